#![deny(clippy::all)]
// #![deny(clippy::pedantic)]

//! Arbitrary precision non-negative integers stored as fixed-width decimal
//! chunks, with schoolbook multiplication and exponentiation by squaring.
//!
//! ```rust
//! use chunked_pow::{multiply, power, ChunkedInteger};
//!
//! let a = ChunkedInteger::from_decimal("123").unwrap();
//!
//! assert_eq!("15129", multiply(&a, &a).unwrap().to_string());
//! assert_eq!("15129", power(&a, 2).to_string());
//! ```

#[macro_use]
mod r#macro;

mod chunk_size;
mod error;
#[cfg_attr(feature = "rayon", allow(dead_code))]
mod not_rayon;
mod power;
#[cfg(test)]
mod proptests;
#[cfg(feature = "rayon")]
mod rayon;

pub use chunk_size::{ChunkSize, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
pub use error::{Error, ParseError, Result};
pub use power::{checked_power, power};

#[cfg(not(feature = "rayon"))]
use crate::not_rayon::multiply_chunks;
#[cfg(feature = "rayon")]
use crate::rayon::multiply_chunks;

use std::fmt::Write;
use tracing::trace;

#[derive(Debug, Clone)]
/// Non-negative integer split into decimal chunks, most significant first.
///
/// Equality and hashing look at the chunks and chunk sizes only, so
/// `"042"` and `"42"` compare equal even though they print differently.
///
/// ```rust
/// use chunked_pow::ChunkedInteger;
///
/// let number = ChunkedInteger::from_decimal("12345").unwrap();
///
/// assert_eq!(&[12, 345], number.chunks());
/// assert_eq!("12345", number.to_string());
/// ```
pub struct ChunkedInteger {
    chunks: Vec<u32>,
    chunk_size: ChunkSize,
    // size the chunks were actually split with, kept by reinterpret_chunk_size
    split_with: ChunkSize,
    decimal: String,
}

impl ChunkedInteger {
    /// Creates a ChunkedInteger with the value 0
    ///
    /// ```rust
    /// use chunked_pow::ChunkedInteger;
    ///
    /// assert_eq!("0", ChunkedInteger::zero().to_string());
    /// assert_eq!(&[0], ChunkedInteger::zero().chunks());
    /// ```
    pub fn zero() -> ChunkedInteger {
        Self::from_unsigned(0, ChunkSize::default())
    }

    /// Creates a ChunkedInteger with the value 1
    pub fn one() -> ChunkedInteger {
        Self::from_unsigned(1, ChunkSize::default())
    }

    /// Parses a decimal digit string using the default chunk size.
    ///
    /// The string is kept verbatim as the decimal representation.
    ///
    /// ```rust
    /// use chunked_pow::{ChunkedInteger, Error, ParseError};
    ///
    /// let number = ChunkedInteger::from_decimal("1000001").unwrap();
    /// assert_eq!(&[1, 0, 1], number.chunks());
    ///
    /// assert_eq!(
    ///     ChunkedInteger::from_decimal("12a"),
    ///     Err(Error::Parse(ParseError::InvalidDigit { index: 2, found: 'a' }))
    /// );
    /// ```
    pub fn from_decimal(input: &str) -> Result<ChunkedInteger> {
        Self::from_decimal_with(input, ChunkSize::default())
    }

    pub fn from_decimal_with(input: &str, chunk_size: ChunkSize) -> Result<ChunkedInteger> {
        if input.is_empty() {
            return Err(ParseError::Empty.into());
        }

        if let Some((index, found)) = input.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseError::InvalidDigit { index, found }.into());
        }

        Ok(ChunkedInteger {
            chunks: split_digits(input, chunk_size),
            chunk_size,
            split_with: chunk_size,
            decimal: input.to_string(),
        })
    }

    /// Wraps a chunk sequence using the default chunk size.
    ///
    /// ```rust
    /// use chunked_pow::{ChunkedInteger, Error};
    ///
    /// assert_eq!("12345", ChunkedInteger::from_chunks(vec![12, 345]).unwrap().to_string());
    /// assert_eq!("7000008", ChunkedInteger::from_chunks(vec![7, 0, 8]).unwrap().to_string());
    /// assert_eq!(ChunkedInteger::from_chunks(vec![]), Err(Error::InvalidChunks));
    /// ```
    pub fn from_chunks(chunks: Vec<u32>) -> Result<ChunkedInteger> {
        Self::from_chunks_with(chunks, ChunkSize::default())
    }

    pub fn from_chunks_with(chunks: Vec<u32>, chunk_size: ChunkSize) -> Result<ChunkedInteger> {
        if chunks.is_empty() {
            return Err(Error::InvalidChunks);
        }

        let radix = chunk_size.radix();
        if let Some((index, &chunk)) = chunks
            .iter()
            .enumerate()
            .find(|(_, chunk)| u64::from(**chunk) >= radix)
        {
            return Err(Error::ChunkOutOfRange {
                index,
                chunk,
                radix,
            });
        }

        Ok(Self::from_trusted(trim_leading_zeros(chunks), chunk_size))
    }

    pub(crate) fn from_unsigned(mut value: u128, chunk_size: ChunkSize) -> ChunkedInteger {
        let radix = u128::from(chunk_size.radix());
        let mut chunks = Vec::new();

        loop {
            chunks.push((value % radix) as u32);
            value /= radix;
            if value == 0 {
                break;
            }
        }
        chunks.reverse();

        Self::from_trusted(chunks, chunk_size)
    }

    /// `chunks` must be non-empty, in range and free of leading zero chunks.
    fn from_trusted(chunks: Vec<u32>, chunk_size: ChunkSize) -> ChunkedInteger {
        let decimal = render_chunks(&chunks, chunk_size);

        ChunkedInteger {
            chunks,
            chunk_size,
            split_with: chunk_size,
            decimal,
        }
    }

    pub fn chunks(&self) -> &[u32] {
        &self.chunks
    }

    pub fn to_chunks(&self) -> Vec<u32> {
        self.chunks.clone()
    }

    pub fn into_chunks(self) -> Vec<u32> {
        self.chunks
    }

    pub fn chunk_size(&self) -> ChunkSize {
        self.chunk_size
    }

    pub fn radix(&self) -> u64 {
        self.chunk_size.radix()
    }

    pub fn is_zero(&self) -> bool {
        self.chunks == [0]
    }

    pub fn as_str(&self) -> &str {
        &self.decimal
    }

    pub fn to_decimal_string(&self) -> String {
        self.decimal.clone()
    }

    /// Replaces the chunk size without touching the stored chunks or the
    /// decimal string.
    ///
    /// The chunks keep their old meaning, so [`multiply`] rejects the value
    /// until it is reinterpreted back or rechunked. Use
    /// [`ChunkedInteger::rechunk`] to actually convert between chunk sizes.
    ///
    /// ```rust
    /// use chunked_pow::{multiply, ChunkSize, ChunkedInteger};
    ///
    /// let a = ChunkedInteger::from_decimal("12345").unwrap();
    /// let b = a.clone().reinterpret_chunk_size(ChunkSize::new(2).unwrap());
    ///
    /// assert_eq!(&[12, 345], b.chunks());
    /// assert!(multiply(&a, &b).is_err());
    /// assert!(multiply(&b, &b).is_err());
    /// ```
    pub fn reinterpret_chunk_size(mut self, chunk_size: ChunkSize) -> ChunkedInteger {
        self.chunk_size = chunk_size;
        self
    }

    /// Splits the decimal representation again using a new chunk size.
    ///
    /// ```rust
    /// use chunked_pow::{ChunkSize, ChunkedInteger};
    ///
    /// let number = ChunkedInteger::from_decimal("12345").unwrap();
    /// let rechunked = number.rechunk(ChunkSize::new(2).unwrap());
    ///
    /// assert_eq!(&[1, 23, 45], rechunked.chunks());
    /// assert_eq!("12345", rechunked.to_string());
    /// ```
    pub fn rechunk(&self, chunk_size: ChunkSize) -> ChunkedInteger {
        ChunkedInteger {
            chunks: split_digits(&self.decimal, chunk_size),
            chunk_size,
            split_with: chunk_size,
            decimal: self.decimal.clone(),
        }
    }

    /// Method form of [`multiply`].
    pub fn multiply(&self, other: &ChunkedInteger) -> Result<ChunkedInteger> {
        multiply(self, other)
    }

    /// Whether the chunks were split with the chunk size they are labelled
    /// with.
    pub fn is_consistent(&self) -> bool {
        self.split_with == self.chunk_size
    }

    /// Method form of [`power`].
    ///
    /// ```rust
    /// use chunked_pow::ChunkedInteger;
    ///
    /// assert_eq!("1000000000000", ChunkedInteger::from(10_u8).pow(12).to_string());
    /// ```
    pub fn pow(&self, exponent: u64) -> ChunkedInteger {
        power(self, exponent)
    }
}

/// Multiplies two chunked integers with schoolbook multiplication in base
/// `10^chunk_size`.
///
/// Both operands have to use the same chunk size, and neither may carry a
/// chunk size from [`ChunkedInteger::reinterpret_chunk_size`] that differs
/// from the one its chunks were split with.
///
/// ```rust
/// use chunked_pow::{multiply, ChunkSize, ChunkedInteger, Error};
///
/// let a = ChunkedInteger::from_decimal("123").unwrap();
/// assert_eq!("15129", multiply(&a, &a).unwrap().to_string());
///
/// let b = ChunkedInteger::from_decimal_with("123", ChunkSize::new(4).unwrap()).unwrap();
/// assert_eq!(
///     multiply(&a, &b),
///     Err(Error::MismatchedChunkSize { left: 3, right: 4 })
/// );
/// ```
pub fn multiply(a: &ChunkedInteger, b: &ChunkedInteger) -> Result<ChunkedInteger> {
    for operand in [a, b] {
        if !operand.is_consistent() {
            return Err(Error::MismatchedChunkSize {
                left: operand.split_with.get(),
                right: operand.chunk_size.get(),
            });
        }
    }

    if a.chunk_size != b.chunk_size {
        return Err(Error::MismatchedChunkSize {
            left: a.chunk_size.get(),
            right: b.chunk_size.get(),
        });
    }

    Ok(multiply_unchecked(a, b))
}

/// Caller guarantees both operands are consistent and share a chunk size.
pub(crate) fn multiply_unchecked(a: &ChunkedInteger, b: &ChunkedInteger) -> ChunkedInteger {
    trace!(
        lhs_chunks = a.chunks.len(),
        rhs_chunks = b.chunks.len(),
        "multiply"
    );

    let product = multiply_chunks(&a.chunks, &b.chunks, a.radix());

    ChunkedInteger::from_trusted(trim_leading_zeros(product), a.chunk_size)
}

/// Splits an all-digit string into chunks, padding the front with zeros.
fn split_digits(input: &str, chunk_size: ChunkSize) -> Vec<u32> {
    let digits = chunk_size.digits();
    let padding = (digits - input.len() % digits) % digits;

    let padded: Vec<u8> = std::iter::repeat(b'0')
        .take(padding)
        .chain(input.bytes())
        .collect();

    let chunks = padded
        .chunks(digits)
        .map(|group| {
            group
                .iter()
                .fold(0_u32, |acc, digit| acc * 10 + u32::from(digit - b'0'))
        })
        .collect();

    trim_leading_zeros(chunks)
}

/// Drops leading zero chunks but always keeps the last chunk.
fn trim_leading_zeros(mut chunks: Vec<u32>) -> Vec<u32> {
    let first = chunks
        .iter()
        .position(|&chunk| chunk != 0)
        .unwrap_or_else(|| chunks.len().saturating_sub(1));
    chunks.drain(..first);

    chunks
}

fn render_chunks(chunks: &[u32], chunk_size: ChunkSize) -> String {
    let width = chunk_size.digits();
    let mut out = String::with_capacity(chunks.len() * width);

    if let Some((first, rest)) = chunks.split_first() {
        // writing into a String cannot fail
        let _ = write!(out, "{}", first);
        for chunk in rest {
            let _ = write!(out, "{:0width$}", chunk, width = width);
        }
    }

    out
}

impl_unsigned!(u8);
impl_unsigned!(u16);
impl_unsigned!(u32);
impl_unsigned!(u64);
impl_unsigned!(u128);
impl_unsigned!(usize);

impl std::convert::TryFrom<String> for ChunkedInteger {
    type Error = Error;

    fn try_from(input: String) -> Result<Self> {
        Self::try_from(input.as_str())
    }
}

impl std::convert::TryFrom<&str> for ChunkedInteger {
    type Error = Error;

    fn try_from(input: &str) -> Result<Self> {
        ChunkedInteger::from_decimal(input)
    }
}

impl std::convert::TryFrom<Vec<u32>> for ChunkedInteger {
    type Error = Error;

    fn try_from(input: Vec<u32>) -> Result<Self> {
        ChunkedInteger::from_chunks(input)
    }
}

impl std::str::FromStr for ChunkedInteger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ChunkedInteger::from_decimal(s)
    }
}

impl PartialEq for ChunkedInteger {
    fn eq(&self, other: &ChunkedInteger) -> bool {
        self.chunks == other.chunks
            && self.chunk_size == other.chunk_size
            && self.split_with == other.split_with
    }
}

impl Eq for ChunkedInteger {}

impl std::hash::Hash for ChunkedInteger {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.chunks.hash(state);
        self.chunk_size.hash(state);
        self.split_with.hash(state);
    }
}

impl Default for ChunkedInteger {
    fn default() -> ChunkedInteger {
        Self::zero()
    }
}

impl From<ChunkedInteger> for String {
    fn from(input: ChunkedInteger) -> String {
        input.decimal
    }
}

impl AsRef<str> for ChunkedInteger {
    fn as_ref(&self) -> &str {
        &self.decimal
    }
}

impl std::fmt::Display for ChunkedInteger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.decimal)
    }
}



#[cfg(test)]
mod chunks {
    use crate::{ChunkSize, ChunkedInteger, Error};

    #[test]
    fn from_chunks() {
        let number = ChunkedInteger::from_chunks(vec![12, 345]).unwrap();

        assert_eq!(number.to_string(), "12345");
        assert_eq!(number.to_chunks(), vec![12, 345]);
    }

    #[test]
    fn empty() {
        assert_eq!(
            ChunkedInteger::try_from(Vec::<u32>::new()),
            Err(Error::InvalidChunks)
        )
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            ChunkedInteger::from_chunks(vec![1, 1000]),
            Err(Error::ChunkOutOfRange {
                index: 1,
                chunk: 1000,
                radix: 1000
            })
        )
    }

    #[test]
    fn strips_leading_zero_chunks() {
        let number = ChunkedInteger::from_chunks(vec![0, 0, 12, 5]).unwrap();

        assert_eq!(number.chunks(), &[12, 5]);
        assert_eq!(number.to_string(), "12005");
    }

    #[test]
    fn single_zero_survives() {
        let number = ChunkedInteger::from_chunks(vec![0, 0, 0]).unwrap();

        assert_eq!(number.chunks(), &[0]);
        assert_eq!(number.to_string(), "0");
    }

    #[test]
    fn round_trips_through_string() {
        let number = ChunkedInteger::from_chunks(vec![3, 0, 999, 10]).unwrap();
        let parsed = ChunkedInteger::from_decimal(number.as_str()).unwrap();

        assert_eq!(parsed, number);
    }

    #[test]
    fn reinterpret_keeps_data() {
        let size = ChunkSize::new(5).unwrap();
        let number = ChunkedInteger::from_decimal("1234567")
            .unwrap()
            .reinterpret_chunk_size(size);

        assert_eq!(number.chunks(), &[1, 234, 567]);
        assert_eq!(number.to_string(), "1234567");
        assert_eq!(number.chunk_size(), size);
        assert!(!number.is_consistent());
    }

    #[test]
    fn reinterpret_back_is_consistent() {
        let number = ChunkedInteger::from_decimal("1234567").unwrap();
        let back = number
            .clone()
            .reinterpret_chunk_size(ChunkSize::new(5).unwrap())
            .reinterpret_chunk_size(ChunkSize::default());

        assert!(back.is_consistent());
        assert_eq!(back, number);
    }

    #[test]
    fn reinterpreted_differs_from_native() {
        let size = ChunkSize::new(1).unwrap();
        let native = ChunkedInteger::from_decimal_with("7", size).unwrap();
        let reinterpreted = ChunkedInteger::from_decimal("7")
            .unwrap()
            .reinterpret_chunk_size(size);

        assert_ne!(native, reinterpreted);
    }

    #[test]
    fn rechunk_round_trip() {
        let number = ChunkedInteger::from_decimal("1234567").unwrap();
        let back = number
            .rechunk(ChunkSize::new(1).unwrap())
            .rechunk(ChunkSize::default());

        assert_eq!(back, number);
    }
}
