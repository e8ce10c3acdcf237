//! AS (Autonomous System) number handling
//!
//! AS numbers are written either in plain decimal (`asplain`, e.g. `131093`)
//! or in the dotted 4-byte notation of RFC 5396 (`asdot`, e.g. `2.21`), where
//! the value is `hi * 65536 + lo`.

pub mod error;
pub mod number;

pub use error::FormatError;
pub use number::{coerce, decode, Asn, ToAsn};
