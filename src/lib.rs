//! AS names database
//!
//! This library parses AS name registries such as the autnums list
//! published at `bgp.potaroo.net/cidr/autnums.html`, which look like
//!
//! ```text
//! AS2     UDEL-DCN - University of Delaware
//! AS3     MIT-GATEWAYS - Massachusetts Institute of Technology
//! AS6     BULL-NETWORK for further information please visit http://www.bull.com
//! AS6.110 HOSTING4BIZ - Hosting4Biz
//! ```
//!
//! and answers full and short name lookups for AS numbers, e.g. to annotate
//! traceroute hops.
//!
//! ```no_run
//! use asnames::AsNames;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = AsNames::load("autnums.txt")?;
//!     println!("AS2 is {}", db.short(2)?);
//!     Ok(())
//! }
//! ```

pub mod asn;
pub mod names;

#[cfg(test)]
mod tests;

// Re-export core types for library users
pub use asn::{coerce, decode, Asn, FormatError, ToAsn};
pub use names::{
    parse_line, short_name, AsNames, AsNamesConfig, AsNamesConfigBuilder, AsnName, LoadError,
    LoadSummary, DEFAULT_UNKNOWN_FULL,
};
