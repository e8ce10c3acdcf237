//! The `Asn` type and its text codec

use super::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 32-bit Autonomous System number
///
/// # Examples
///
/// ```
/// use asnames::asn::Asn;
///
/// let asn: Asn = "2.21".parse().unwrap();
/// assert_eq!(asn, Asn(131093));
/// assert_eq!(asn.to_string(), "131093");
/// assert_eq!(asn.to_asdot(), "2.21");
/// ```
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Asn(pub u32);

impl Asn {
    /// Largest AS number that fits the legacy 2-byte space
    pub const MAX_2BYTE: u32 = u16::MAX as u32;

    /// Create an AS number from its 32-bit value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Build an AS number from the two halves of the dotted notation
    pub const fn from_asdot(hi: u16, lo: u16) -> Self {
        Self(((hi as u32) << 16) | lo as u32)
    }

    /// Return the AS number as a 32-bit value
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// High 16 bits (the part before the dot in `asdot`)
    pub const fn hi(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Low 16 bits (the part after the dot in `asdot`)
    pub const fn lo(self) -> u16 {
        (self.0 & 0xffff) as u16
    }

    /// True if the number does not fit in the legacy 2-byte space
    pub const fn is_4byte(self) -> bool {
        self.0 > Self::MAX_2BYTE
    }

    /// Render in `asdot` form
    ///
    /// Numbers in the 2-byte space stay plain decimal, as RFC 5396 asks.
    pub fn to_asdot(self) -> String {
        if self.is_4byte() {
            format!("{}.{}", self.hi(), self.lo())
        } else {
            self.0.to_string()
        }
    }
}

impl fmt::Display for Asn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Asn {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl From<u32> for Asn {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Asn> for u32 {
    fn from(asn: Asn) -> Self {
        asn.0
    }
}

/// Decode an AS number token in `asplain` or `asdot` notation
///
/// The token must already be isolated: surrounding whitespace, signs, radix
/// prefixes and non-ASCII digits are all rejected.
///
/// # Examples
///
/// ```
/// use asnames::asn::{decode, Asn, FormatError};
///
/// assert_eq!(decode("12"), Ok(Asn(12)));
/// assert_eq!(decode("1.0"), Ok(Asn(65536)));
/// assert!(matches!(decode("1.2.3"), Err(FormatError::TooManyDots { .. })));
/// ```
pub fn decode(token: &str) -> Result<Asn, FormatError> {
    match token.split_once('.') {
        Some((_, lo)) if lo.contains('.') => Err(FormatError::TooManyDots {
            token: token.to_string(),
        }),
        Some((hi, lo)) => {
            let hi = parse_digits::<u32>(hi, token)?;
            let lo = parse_digits::<u32>(lo, token)?;
            // Halves are not bounded on their own, only the combined value.
            hi.checked_mul(1 << 16)
                .and_then(|high| high.checked_add(lo))
                .map(Asn)
                .ok_or_else(|| FormatError::OutOfRange {
                    value: token.to_string(),
                })
        }
        None => parse_digits::<u32>(token, token).map(Asn),
    }
}

/// Convert an already-numeric or textual AS number into an `Asn`
///
/// Integers pass through unchanged; strings go through [`decode`].
pub fn coerce<T: ToAsn + ?Sized>(value: &T) -> Result<Asn, FormatError> {
    value.to_asn()
}

// Digit check first so that only overflow can make `parse` fail below.
fn parse_digits<T: FromStr>(digits: &str, token: &str) -> Result<T, FormatError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidNumber {
            token: token.to_string(),
        });
    }
    digits.parse().map_err(|_| FormatError::OutOfRange {
        value: token.to_string(),
    })
}

/// Values that can be used as an AS number key
///
/// Implemented for `Asn`, the integer types and strings. Negative integers
/// and integers above `u32::MAX` are outside the AS number space and yield
/// [`FormatError::OutOfRange`].
pub trait ToAsn {
    /// Resolve `self` to an AS number
    fn to_asn(&self) -> Result<Asn, FormatError>;
}

impl ToAsn for Asn {
    fn to_asn(&self) -> Result<Asn, FormatError> {
        Ok(*self)
    }
}

impl ToAsn for u32 {
    fn to_asn(&self) -> Result<Asn, FormatError> {
        Ok(Asn(*self))
    }
}

impl ToAsn for u16 {
    fn to_asn(&self) -> Result<Asn, FormatError> {
        Ok(Asn(u32::from(*self)))
    }
}

macro_rules! impl_to_asn_checked {
    ($($ty:ty),*) => {
        $(
            impl ToAsn for $ty {
                fn to_asn(&self) -> Result<Asn, FormatError> {
                    u32::try_from(*self)
                        .map(Asn)
                        .map_err(|_| FormatError::OutOfRange {
                            value: self.to_string(),
                        })
                }
            }
        )*
    };
}

impl_to_asn_checked!(u64, usize, i32, i64);

impl ToAsn for str {
    fn to_asn(&self) -> Result<Asn, FormatError> {
        decode(self)
    }
}

impl ToAsn for String {
    fn to_asn(&self) -> Result<Asn, FormatError> {
        decode(self)
    }
}

impl<T: ToAsn + ?Sized> ToAsn for &T {
    fn to_asn(&self) -> Result<Asn, FormatError> {
        (**self).to_asn()
    }
}
