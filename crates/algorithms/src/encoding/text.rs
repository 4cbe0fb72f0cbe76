//! Helpers for the line-oriented text format
//!
//! Readers take the input from the front and hand back the unread rest, so
//! they compose the same way the [`TextSerialize`] implementations do.

use alloc::string::String;
use alloc::vec::Vec;

use dpairing_api::TextSerialize;

use crate::error::{Error, Result, ResultExt};

/// Consumes `sep` from the front of `input`
pub(crate) fn expect_separator<'a>(
    input: &'a str,
    sep: char,
    context: &'static str,
) -> Result<&'a str> {
    match input.strip_prefix(sep) {
        Some(rest) => Ok(rest),
        None => {
            log::debug!("{}: expected separator {:?}", context, sep);
            Err(Error::malformed(context, "missing separator"))
        }
    }
}

/// Reads a point flag, `0` or `1`
pub(crate) fn read_flag<'a>(input: &'a str, context: &'static str) -> Result<(bool, &'a str)> {
    let mut chars = input.chars();
    let flag = match chars.next() {
        Some('0') => false,
        Some('1') => true,
        _ => {
            log::debug!("{}: bad flag", context);
            return Err(Error::malformed(context, "flag must be 0 or 1"));
        }
    };
    Ok((flag, chars.as_str()))
}

/// Reads an unsigned decimal without leading zeros
pub(crate) fn read_decimal<'a>(input: &'a str, context: &'static str) -> Result<(usize, &'a str)> {
    let digits = input
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let (num, rest) = input.split_at(digits);
    if num.is_empty() || (num.len() > 1 && num.starts_with('0')) {
        log::debug!("{}: bad length prefix {:?}", context, num);
        return Err(Error::malformed(context, "expected a decimal length"));
    }
    let value = num
        .parse::<usize>()
        .map_err(|_| Error::malformed(context, "length does not fit in usize"))?;
    Ok((value, rest))
}

/// Writes a decimal length, `'\n'`, then the elements separated by `'\n'`
pub fn write_sequence<T: TextSerialize>(items: &[T], out: &mut String) {
    out.push_str(&alloc::format!("{}", items.len()));
    out.push('\n');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        item.write_text(out);
    }
}

/// Reads a sequence written by [`write_sequence`]
pub fn read_sequence<T: TextSerialize>(input: &str) -> Result<(Vec<T>, &str)> {
    const CTX: &str = "read_sequence";
    let (len, rest) = read_decimal(input, CTX)?;
    let mut rest = expect_separator(rest, '\n', CTX)?;
    // the prefix is untrusted, so capacity grows with what actually parses
    let mut items = Vec::new();
    for i in 0..len {
        if i > 0 {
            rest = expect_separator(rest, '\n', CTX)?;
        }
        let (item, tail) = T::read_text(rest).with_context(CTX)?;
        items.push(item);
        rest = tail;
    }
    Ok((items, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_and_flags() {
        assert_eq!(expect_separator(" x", ' ', "t").unwrap(), "x");
        assert!(expect_separator("x", ' ', "t").is_err());
        assert!(expect_separator("", '\n', "t").is_err());

        assert_eq!(read_flag("1 rest", "t").unwrap(), (true, " rest"));
        assert_eq!(read_flag("0", "t").unwrap(), (false, ""));
        assert!(read_flag("2", "t").is_err());
        assert!(read_flag("", "t").is_err());
    }

    #[test]
    fn decimal_lengths() {
        assert_eq!(read_decimal("12\nx", "t").unwrap(), (12, "\nx"));
        assert_eq!(read_decimal("0\n", "t").unwrap(), (0, "\n"));
        assert!(read_decimal("012\n", "t").is_err());
        assert!(read_decimal("\n", "t").is_err());
        assert!(read_decimal("99999999999999999999999\n", "t").is_err());
    }
}
