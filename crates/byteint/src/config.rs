//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand, ValueEnum};

use byteint_core::DEFAULT_MAX_SIZE;

/// byteint: arbitrary-precision integers in any base from 1 to 2^32.
#[derive(Parser, Debug)]
#[command(name = "byteint", version, about)]
pub struct AppConfig {
    /// Largest digit count (base-256) of any value.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_SIZE, env = "BYTEINT_MAX_SIZE")]
    pub max_size: usize,

    /// Print a JSON object instead of the bare value.
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a value from one base to another.
    Convert {
        /// Value to convert.
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Base of the input (number or name such as `hex`, `braille`).
        #[arg(long, default_value = "10")]
        from: String,

        /// Base of the output.
        #[arg(long, default_value = "10")]
        to: String,
    },

    /// Apply a binary operation to two values.
    Eval {
        /// Left operand.
        #[arg(allow_hyphen_values = true)]
        lhs: String,

        /// Operation.
        #[arg(value_enum)]
        op: Op,

        /// Right operand.
        #[arg(allow_hyphen_values = true)]
        rhs: String,

        /// Base of both operands.
        #[arg(long, default_value = "10")]
        base: String,

        /// Base of the result (defaults to the operand base).
        #[arg(long)]
        to: Option<String>,

        /// Rounding mode keyword for `div`, `mod` and `shr`.
        #[arg(long)]
        rounding: Option<String>,
    },

    /// Map a value linearly from one range onto another.
    Map {
        /// Value to map.
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Lower bound of the source range.
        #[arg(allow_hyphen_values = true)]
        from_min: String,

        /// Upper bound of the source range.
        #[arg(allow_hyphen_values = true)]
        from_max: String,

        /// Lower bound of the target range.
        #[arg(allow_hyphen_values = true)]
        to_min: String,

        /// Upper bound of the target range.
        #[arg(allow_hyphen_values = true)]
        to_max: String,

        /// Hold the result inside the target range.
        #[arg(long)]
        clamp: bool,

        /// Base of every value, input and output.
        #[arg(long, default_value = "10")]
        base: String,
    },

    /// Draw a pseudo-random value in `[MIN, MAX]`.
    Random {
        /// Lower bound.
        #[arg(allow_hyphen_values = true)]
        min: String,

        /// Upper bound.
        #[arg(allow_hyphen_values = true)]
        max: String,

        /// Seed for a reproducible draw.
        #[arg(long)]
        seed: Option<u64>,

        /// Base of the bounds and the result.
        #[arg(long, default_value = "10")]
        base: String,
    },
}

/// Binary operations accepted by `eval`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Gcd,
    Cmp,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
