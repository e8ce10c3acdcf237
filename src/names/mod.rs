//! AS names registry: line grammar, short names, and the lookup table

pub mod config;
pub mod db;
pub mod error;
pub mod line;
pub mod short;

pub use config::{AsNamesConfig, AsNamesConfigBuilder, DEFAULT_UNKNOWN_FULL};
pub use db::{AsNames, AsnName, LoadSummary};
pub use error::LoadError;
pub use line::parse_line;
pub use short::short_name;
