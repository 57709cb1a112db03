pub use self::piece::*;

pub(crate) mod piece;
