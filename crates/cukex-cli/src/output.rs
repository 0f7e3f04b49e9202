//! Writing translated expressions.

use std::io::Write;

use cukex::{ParameterTypeRegistry, transform_with};
use eyre::{Result, WrapErr};
use tracing::debug;

/// Translate each expression in order and write one regex per line.
///
/// Stops at the first expression that fails to translate; the regexes for
/// the expressions before it have already been written.
///
/// # Errors
///
/// Returns an error naming the rejected expression, or when writing fails.
pub fn write_regexes<W, S>(
    writer: &mut W,
    registry: &ParameterTypeRegistry,
    expressions: &[S],
) -> Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for expression in expressions {
        let expression = expression.as_ref();
        let regex = transform_with(registry, expression)
            .wrap_err_with(|| format!("invalid cucumber expression `{expression}`"))?;
        debug!(expression, regex = %regex, "translated");
        writeln!(writer, "{regex}").wrap_err("failed to write regex")?;
    }
    writer.flush().wrap_err("failed to flush output")
}
