use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("a chunk sequence needs at least one chunk")]
    InvalidChunks,

    #[error("chunk {chunk} at index {index} does not fit below the radix {radix}")]
    ChunkOutOfRange { index: usize, chunk: u32, radix: u64 },

    #[error("chunk size {0} is not in 1..=9")]
    InvalidChunkSize(u32),

    #[error("negative exponent {0} is not supported")]
    NegativeExponent(i64),

    #[error("cannot combine chunk size {left} with chunk size {right}")]
    MismatchedChunkSize { left: u32, right: u32 },
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("invalid digit {found:?} at index {index}")]
    InvalidDigit { index: usize, found: char },
}
