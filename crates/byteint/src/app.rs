//! Application entry point and dispatch.

use std::io;
use std::str::FromStr;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use byteint_core::{BigIntError, BigInteger, DivRounding, Limits, ModRounding, ShiftRounding};

use crate::config::{AppConfig, Command, Op};
use crate::output::{write_rendered, Rendered};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "byteint", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = &config.command else {
        anyhow::bail!("no command given (try --help)");
    };
    let limits = Limits::with_max_size(config.max_size)?;
    let rendered = execute(command, &limits)?;
    write_rendered(&mut io::stdout().lock(), &rendered, config.json)?;
    Ok(())
}

/// Run one subcommand under `limits` and format its result.
pub fn execute(command: &Command, limits: &Limits) -> Result<Rendered> {
    match command {
        Command::Convert { value, from, to } => {
            debug!(%from, %to, "convert");
            let n = operand(value, from, limits)?;
            Ok(Rendered::new(&n, to)?)
        }
        Command::Eval {
            lhs,
            op,
            rhs,
            base,
            to,
            rounding,
        } => {
            debug!(?op, %base, rounding = rounding.as_deref(), "eval");
            let a = operand(lhs, base, limits)?;
            let b = operand(rhs, base, limits)?;
            let result = eval(&a, *op, &b, rounding.as_deref())
                .with_context(|| format!("evaluating {lhs} {op:?} {rhs}"))?;
            Ok(Rendered::new(&result, to.as_deref().unwrap_or(base))?)
        }
        Command::Map {
            value,
            from_min,
            from_max,
            to_min,
            to_max,
            clamp,
            base,
        } => {
            let [v, a, b, c, d] = [value, from_min, from_max, to_min, to_max]
                .map(|text| operand(text, base, limits));
            let mapped = v?.map_range(&a?, &b?, &c?, &d?, *clamp)?;
            Ok(Rendered::new(&mapped, base)?)
        }
        Command::Random {
            min,
            max,
            seed,
            base,
        } => {
            let lo = operand(min, base, limits)?;
            let hi = operand(max, base, limits)?;
            let drawn = match seed {
                Some(seed) => {
                    debug!(seed, "seeded draw");
                    let mut rng = StdRng::seed_from_u64(*seed);
                    BigInteger::random_int_with(&mut rng, &lo, &hi, limits)?
                }
                None => BigInteger::random_int(&lo, &hi, limits)?,
            };
            Ok(Rendered::new(&drawn, base)?)
        }
    }
}

fn operand(text: &str, base: &str, limits: &Limits) -> Result<BigInteger> {
    BigInteger::parse(text, base, limits)
        .with_context(|| format!("parsing {text:?} in base {base}"))
}

/// Apply `op`. `cmp` yields -1, 0 or 1.
fn eval(
    a: &BigInteger,
    op: Op,
    b: &BigInteger,
    rounding: Option<&str>,
) -> byteint_core::Result<BigInteger> {
    match op {
        Op::Add => a.checked_add(b),
        Op::Sub => a.checked_sub(b),
        Op::Mul => a.checked_mul(b),
        Op::Div => a.checked_div(b, mode::<DivRounding>(rounding)?),
        Op::Mod => a.checked_rem(b, mode::<ModRounding>(rounding)?),
        Op::Pow => a.checked_pow(b),
        Op::And => a.bit_and(b),
        Op::Or => a.bit_or(b),
        Op::Xor => a.bit_xor(b),
        Op::Shl => a.shl(shift_amount(b)?),
        Op::Shr => a.shr(shift_amount(b)?, mode::<ShiftRounding>(rounding)?),
        Op::Gcd => Ok(BigInteger::gcd(a, b)),
        Op::Cmp => BigInteger::from_i128(i128::from(a.cmp(b) as i8), a.limits()),
    }
}

fn mode<T>(keyword: Option<&str>) -> byteint_core::Result<T>
where
    T: FromStr<Err = BigIntError> + Default,
{
    keyword.map_or_else(|| Ok(T::default()), str::parse)
}

fn shift_amount(n: &BigInteger) -> byteint_core::Result<u64> {
    if n.is_negative() && !n.is_zero() {
        return Err(BigIntError::Domain("negative shift amount".into()));
    }
    n.to_u64()
        .ok_or_else(|| BigIntError::Domain("shift amount does not fit in 64 bits".into()))
}
