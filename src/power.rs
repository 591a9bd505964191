use crate::{multiply_unchecked, ChunkedInteger, Error, Result};
use tracing::{debug, trace};

/// Calculates `base` to the power of `exponent` by repeated squaring.
///
/// Walks the exponent's bits from the most significant one down, squaring
/// the accumulator at every bit and multiplying by `base` when the bit is
/// set. This performs the same multiplications as the recursive
/// `x^n = x^(n % 2) * (x^(n / 2))^2` decomposition without growing the stack.
///
/// A base whose chunk size was changed with
/// [`ChunkedInteger::reinterpret_chunk_size`] is split again with that chunk
/// size first, so the result always uses the base's current chunk size.
///
/// ```rust
/// use chunked_pow::{power, ChunkedInteger};
///
/// let base = ChunkedInteger::from_decimal("123").unwrap();
///
/// assert_eq!("15129", power(&base, 2).to_string());
/// assert_eq!("1", power(&base, 0).to_string());
/// ```
pub fn power(base: &ChunkedInteger, exponent: u64) -> ChunkedInteger {
    if !base.is_consistent() {
        debug!(
            chunk_size = base.chunk_size().get(),
            "rechunking reinterpreted base"
        );
        return power(&base.rechunk(base.chunk_size()), exponent);
    }

    let mut result = ChunkedInteger::from_unsigned(1, base.chunk_size());
    if exponent == 0 {
        return result;
    }

    let bits = u64::BITS - exponent.leading_zeros();
    debug!(
        base_chunks = base.chunks().len(),
        exponent,
        bits,
        chunk_size = base.chunk_size().get(),
        "starting exponentiation"
    );

    for bit in (0..bits).rev() {
        result = multiply_unchecked(&result, &result);
        if (exponent >> bit) & 1 == 1 {
            result = multiply_unchecked(base, &result);
        }
        trace!(bit, chunks = result.chunks().len(), "exponentiation step");
    }

    debug!(result_chunks = result.chunks().len(), "finished exponentiation");
    result
}

/// Like [`power`], but takes a signed exponent and rejects negative values.
///
/// ```rust
/// use chunked_pow::{checked_power, ChunkedInteger, Error};
///
/// let base = ChunkedInteger::from(2_u8);
///
/// assert_eq!("1024", checked_power(&base, 10).unwrap().to_string());
/// assert_eq!(Err(Error::NegativeExponent(-1)), checked_power(&base, -1));
/// ```
pub fn checked_power(base: &ChunkedInteger, exponent: i64) -> Result<ChunkedInteger> {
    let exponent = u64::try_from(exponent).map_err(|_| Error::NegativeExponent(exponent))?;

    Ok(power(base, exponent))
}
