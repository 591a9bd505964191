use chunked_pow::ChunkSize;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chunked-pow")]
#[command(author, version, about = "Compute C = A ^ B for large decimal integers")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Decimal digits stored per chunk (1 - 9)
    #[arg(long, global = true, env = "CHUNKED_POW_CHUNK_SIZE", default_value_t = ChunkSize::default())]
    pub chunk_size: ChunkSize,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prompt for A and compute A raised to A with its digits reversed
    Interactive,

    /// Raise a decimal number to a power
    Power {
        /// Base as a decimal digit string
        base: String,

        /// Non-negative exponent
        exponent: u64,
    },

    /// Multiply two decimal numbers
    Multiply {
        /// Left operand as a decimal digit string
        lhs: String,

        /// Right operand as a decimal digit string
        rhs: String,
    },
}
