use crate::{Error, Result};
use std::fmt;

/// Largest chunk size whose radix keeps `(R - 1)^2 + (R - 1)` plus a pending
/// carry inside a `u64` accumulator.
pub const MAX_CHUNK_SIZE: u32 = 9;
pub const DEFAULT_CHUNK_SIZE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Number of decimal digits stored in a single chunk.
///
/// ```rust
/// use chunked_pow::ChunkSize;
///
/// assert_eq!(3, ChunkSize::default().get());
/// assert_eq!(1_000, ChunkSize::default().radix());
/// assert!(ChunkSize::new(0).is_err());
/// assert!(ChunkSize::new(10).is_err());
/// ```
pub struct ChunkSize(u32);

impl ChunkSize {
    pub fn new(digits: u32) -> Result<ChunkSize> {
        if digits == 0 || digits > MAX_CHUNK_SIZE {
            return Err(Error::InvalidChunkSize(digits));
        }

        Ok(ChunkSize(digits))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn digits(self) -> usize {
        self.0 as usize
    }

    /// The chunk base `10^digits`
    pub fn radix(self) -> u64 {
        10_u64.pow(self.0)
    }
}

impl Default for ChunkSize {
    fn default() -> ChunkSize {
        ChunkSize(DEFAULT_CHUNK_SIZE)
    }
}

impl TryFrom<u32> for ChunkSize {
    type Error = Error;

    fn try_from(input: u32) -> Result<ChunkSize> {
        ChunkSize::new(input)
    }
}

impl std::str::FromStr for ChunkSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s.parse::<u32>().map_err(|e| e.to_string())?;
        ChunkSize::new(digits).map_err(|e| e.to_string())
    }
}

impl fmt::Display for ChunkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
