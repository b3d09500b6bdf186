use crate::Field;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown float format: {0:?}")]
    UnknownFormat(String),

    #[error("invalid {field} field: expected {expected} bits, got {found} bits")]
    InvalidFieldWidth {
        field: Field,
        expected: usize,
        found: usize,
    },

    #[error("invalid {field} field: {found:?} is not a binary digit")]
    NonBinaryDigit { field: Field, found: char },

    #[error("bit pattern does not fit in {bits} bits")]
    PatternTooWide { bits: u32 },

    #[error("invalid byte length: expected {expected} bytes, got {found} bytes")]
    InvalidLength { expected: usize, found: usize },

    #[error("hex error ({0})")]
    Hex(#[from] hex::FromHexError),

    #[error("bit index {index} out of range for {field} field of width {width}")]
    BitIndexOutOfRange {
        field: Field,
        index: usize,
        width: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}
