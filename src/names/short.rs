//! Short name derivation
//!
//! Registry names conventionally read `TOKEN - description`, where `TOKEN`
//! is made of uppercase ASCII letters and dashes (`ISI-AS - University of
//! Southern California`). The token is the AS's short name.

use once_cell::sync::Lazy;
use regex::Regex;

// The rest after the separator may be anything, so a prefix match is enough.
static SHORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z-]+) - ").expect("short name pattern is valid"));

/// Derive the short name from a full AS name
///
/// Returns the leading token when `full` has the exact shape
/// `TOKEN - rest`, otherwise `full` itself, untouched.
///
/// # Examples
///
/// ```
/// use asnames::names::short_name;
///
/// assert_eq!(short_name("ISI-AS - University of Southern California"), "ISI-AS");
/// assert_eq!(short_name("LEVEL3 Level 3 Communications"), "LEVEL3 Level 3 Communications");
/// ```
pub fn short_name(full: &str) -> &str {
    SHORT_RE
        .captures(full)
        .and_then(|caps| caps.get(1))
        .map_or(full, |token| &full[..token.end()])
}
