mod codec;
mod grid;
mod pair;
mod validate;

pub use codec::{decode, encode, recover_nearest, shorten};
pub use validate::{is_full, is_short, is_valid};
