use anyhow::{Context, Result};
use chunked_pow::{power, ChunkSize, ChunkedInteger};
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Entering this value exits the prompt loop.
pub const EXIT_INPUT: i64 = -1;
pub const MAX_INPUT: i64 = 99_999;

const PROMPT: &str = "Enter a number (0 - 99999): ";
const NEXT_PROMPT: &str =
    "To exit, enter any negative number. Otherwise enter a number (0 - 99999): ";
const OUT_OF_RANGE: &str = "Input number was outside of specified range.";

pub fn is_valid_input(number: i64) -> bool {
    (EXIT_INPUT..=MAX_INPUT).contains(&number)
}

/// The decimal form of `number` and the same digits reversed.
pub fn number_and_reversed(number: u32) -> (String, String) {
    let forward = number.to_string();
    let reversed = forward.chars().rev().collect();

    (forward, reversed)
}

/// Result of one `C = A ^ B` computation
pub struct Computation {
    pub base: ChunkedInteger,
    pub exponent: u64,
    pub result: ChunkedInteger,
    pub elapsed_ms: u128,
}

pub fn compute(base: ChunkedInteger, exponent: u64) -> Computation {
    let start = Instant::now();
    let result = power(&base, exponent);
    let elapsed_ms = start.elapsed().as_millis();

    info!(
        base = %base,
        exponent,
        digits = result.as_str().len(),
        elapsed_ms = elapsed_ms as u64,
        "computed power"
    );

    Computation {
        base,
        exponent,
        result,
        elapsed_ms,
    }
}

/// Computes `A ^ reverse(A)` for the prompt loop.
pub fn compute_reversed(number: u32, chunk_size: ChunkSize) -> Result<Computation> {
    let (forward, reversed) = number_and_reversed(number);

    let base = ChunkedInteger::from_decimal_with(&forward, chunk_size)?;
    let exponent = reversed
        .parse::<u64>()
        .with_context(|| format!("reversed digits {:?} are not a number", reversed))?;

    Ok(compute(base, exponent))
}

fn write_computation<W: Write>(output: &mut W, computation: &Computation) -> Result<()> {
    writeln!(
        output,
        "Result: {} ^ {}: \n{}",
        computation.base, computation.exponent, computation.result
    )?;
    writeln!(
        output,
        "This computation took {} milliseconds to execute.",
        computation.elapsed_ms
    )?;

    Ok(())
}

/// Reads lines until one holds a number in `-1..=99999`.
///
/// Returns `None` once the input is exhausted.
fn read_number<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<i64>> {
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<i64>() {
            Ok(number) if is_valid_input(number) => return Ok(Some(number)),
            parsed => {
                debug!(input = line.trim(), valid_integer = parsed.is_ok(), "rejected input");
                write!(output, "{}\nEnter a number(0 - 99999) : ", OUT_OF_RANGE)?;
                output.flush()?;
            }
        }
    }
}

/// Prompt loop: read A, print `A ^ reverse(A)` with its timing, repeat until
/// a negative number or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    chunk_size: ChunkSize,
) -> Result<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    while let Some(number) = read_number(&mut input, &mut output)? {
        let number = match u32::try_from(number) {
            Ok(number) => number,
            Err(_) => break,
        };

        let computation = compute_reversed(number, chunk_size)?;
        write_computation(&mut output, &computation)?;

        write!(output, "{}", NEXT_PROMPT)?;
        output.flush()?;
    }

    Ok(())
}

pub fn run_power<W: Write>(
    mut output: W,
    base: &str,
    exponent: u64,
    chunk_size: ChunkSize,
) -> Result<()> {
    let base = ChunkedInteger::from_decimal_with(base, chunk_size)
        .with_context(|| format!("invalid base {:?}", base))?;

    let computation = compute(base, exponent);
    writeln!(output, "{}", computation.result)?;

    Ok(())
}

pub fn run_multiply<W: Write>(
    mut output: W,
    lhs: &str,
    rhs: &str,
    chunk_size: ChunkSize,
) -> Result<()> {
    let lhs = ChunkedInteger::from_decimal_with(lhs, chunk_size)
        .with_context(|| format!("invalid left operand {:?}", lhs))?;
    let rhs = ChunkedInteger::from_decimal_with(rhs, chunk_size)
        .with_context(|| format!("invalid right operand {:?}", rhs))?;

    writeln!(output, "{}", lhs.multiply(&rhs)?)?;

    Ok(())
}
