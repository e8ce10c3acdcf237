//! Registry line grammar
//!
//! A well-formed line is `AS<number><whitespace><name>`, e.g.
//! `AS5     SYMBOLICS - Symbolics, Inc.` or `AS6.110 HOSTING4BIZ - Hosting4Biz`.

use crate::asn::{decode, Asn, FormatError};
use once_cell::sync::Lazy;
use regex::Regex;

// Whole-line anchored; the number is `digits` or `digits.digits`.
static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^AS([0-9]+|[0-9]+\.[0-9]+)\s+(.*)$").expect("line pattern is valid")
});

/// Parse one registry line into its AS number and full name
///
/// The line must already be trimmed by the caller. The name is everything
/// after the whitespace following the number, returned verbatim; it may be
/// empty.
///
/// # Examples
///
/// ```
/// use asnames::asn::Asn;
/// use asnames::names::parse_line;
///
/// let (asn, name) = parse_line("AS5     SYMBOLICS - Symbolics, Inc.").unwrap();
/// assert_eq!(asn, Asn(5));
/// assert_eq!(name, "SYMBOLICS - Symbolics, Inc.");
///
/// assert!(parse_line("ASN44 BROKEN - TEST").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<(Asn, &str), FormatError> {
    let malformed = || FormatError::MalformedLine {
        line: line.to_string(),
    };

    let caps = LINE_RE.captures(line).ok_or_else(malformed)?;
    let (Some(number), Some(name)) = (caps.get(1), caps.get(2)) else {
        return Err(malformed());
    };

    let asn = decode(number.as_str())?;
    Ok((asn, &line[name.start()..name.end()]))
}
