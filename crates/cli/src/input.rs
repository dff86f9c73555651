//! Parsing of typed console input.

use thiserror::Error;

/// Reasons a line did not yield an integer in the requested range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundedIntError {
    /// The line held no token at all.
    #[error("no number entered")]
    Empty,
    /// The first token does not start with an integer.
    #[error("not a number: {0}")]
    NotANumber(String),
    /// The number is outside `[min, max]`.
    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

/// Read the integer at the start of `raw` and check it is in `[min, max]`.
///
/// The number is the leading `[+-]?digits` run of the first
/// whitespace-delimited token, so `12abc` reads as 12 and `5.5` as 5.
/// Anything after it is ignored.
///
/// # Errors
///
/// Returns [`BoundedIntError`] if the line is blank, the token does not start
/// with an integer, the integer overflows, or the value falls outside the
/// range.
pub fn parse_bounded_int(raw: &str, min: u32, max: u32) -> Result<u32, BoundedIntError> {
    let token = raw.split_whitespace().next().ok_or(BoundedIntError::Empty)?;
    let not_a_number = || BoundedIntError::NotANumber(token.to_owned());

    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits = token
        .get(sign_len..)
        .unwrap_or_default()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return Err(not_a_number());
    }

    let value: i64 = token
        .get(..sign_len + digits)
        .ok_or_else(not_a_number)?
        .parse()
        .map_err(|_| not_a_number())?;

    u32::try_from(value)
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or(BoundedIntError::OutOfRange { value, min, max })
}

/// Whether a yes/no answer means yes. Only a leading `Y` or `y` counts.
///
/// Callers read the answer with [`Console::ask_nonblank`], so a blank line
/// never reaches here from the console.
///
/// [`Console::ask_nonblank`]: crate::console::Console::ask_nonblank
#[must_use]
pub fn is_yes(raw: &str) -> bool {
    matches!(raw.trim_start().chars().next(), Some('Y' | 'y'))
}
