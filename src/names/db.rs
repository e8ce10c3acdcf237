//! The AS names registry

use super::config::AsNamesConfig;
use super::error::LoadError;
use super::line::parse_line;
use super::short::short_name;
use crate::asn::{Asn, FormatError, ToAsn};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, trace};

/// Counters collected while loading a registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Number of distinct AS numbers in the registry
    pub entries: usize,
    /// Lines that were blank or did not parse
    pub skipped: usize,
    /// Lines that replaced an earlier entry for the same AS number
    pub duplicates: usize,
}

/// Names of one AS, as reported by [`AsNames::describe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AsnName<'a> {
    /// The AS number
    pub asn: Asn,
    /// Full name, or the unknown sentinel
    pub full: &'a str,
    /// Short name derived from `full`
    pub short: &'a str,
    /// Whether the AS number is present in the registry
    pub known: bool,
}

/// Immutable mapping from AS numbers to registered names
///
/// Built once from an autnums-style text source, one `AS<number> <name>`
/// entry per line. Malformed lines are skipped and logged; when an AS number
/// appears more than once, the last line wins. Lookups of AS numbers that are
/// not in the registry return the configured unknown sentinel.
///
/// # Examples
///
/// ```
/// use asnames::AsNames;
///
/// let source = "AS4     ISI-AS - University of Southern California\n\
///               AS3356  LEVEL3 Level 3 Communications\n";
/// let db = AsNames::from_reader(source.as_bytes()).unwrap();
///
/// assert_eq!(db.full(4).unwrap(), "ISI-AS - University of Southern California");
/// assert_eq!(db.short(4).unwrap(), "ISI-AS");
/// assert_eq!(db.short("3356").unwrap(), "LEVEL3 Level 3 Communications");
/// assert_eq!(db.short(1).unwrap(), "UNKNOWN-NAMESDB");
/// ```
#[derive(Debug, Clone)]
pub struct AsNames {
    names: HashMap<Asn, String>,
    config: AsNamesConfig,
    summary: LoadSummary,
}

impl AsNames {
    /// Load a registry from a file with the default configuration
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_with_config(path, AsNamesConfig::default())
    }

    /// Load a registry from a file
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be opened or read, and
    /// [`LoadError::Config`] if `config` is invalid.
    pub fn load_with_config(
        path: impl AsRef<Path>,
        config: AsNamesConfig,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: Some(path.to_path_buf()),
            source,
        })?;
        Self::build(BufReader::new(file), config, Some(path))
    }

    /// Build a registry from any buffered reader with the default configuration
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        Self::from_reader_with_config(reader, AsNamesConfig::default())
    }

    /// Build a registry from any buffered reader
    pub fn from_reader_with_config<R: BufRead>(
        reader: R,
        config: AsNamesConfig,
    ) -> Result<Self, LoadError> {
        Self::build(reader, config, None)
    }

    fn build<R: BufRead>(
        reader: R,
        config: AsNamesConfig,
        path: Option<&Path>,
    ) -> Result<Self, LoadError> {
        config.validate().map_err(LoadError::Config)?;

        let mut names = HashMap::new();
        let mut summary = LoadSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io {
                path: path.map(Path::to_path_buf),
                source,
            })?;
            let line = line.trim();
            let lineno = index + 1;

            if line.is_empty() {
                trace!(lineno, "skipping blank line");
                summary.skipped += 1;
                continue;
            }

            match parse_line(line) {
                Ok((asn, full)) => {
                    if let Some(previous) = names.insert(asn, full.to_string()) {
                        summary.duplicates += 1;
                        debug!(%asn, lineno, %previous, "duplicate AS number, later line wins");
                    }
                }
                Err(error) => {
                    summary.skipped += 1;
                    debug!(lineno, line, %error, "skipping malformed line");
                }
            }
        }

        summary.entries = names.len();
        info!(
            entries = summary.entries,
            skipped = summary.skipped,
            duplicates = summary.duplicates,
            source = %path.map_or_else(|| "reader".into(), Path::to_string_lossy),
            "loaded AS names"
        );

        Ok(Self {
            names,
            config,
            summary,
        })
    }

    /// Full name of an AS, or the unknown sentinel if it is not registered
    ///
    /// `asn` may be an [`Asn`], an integer, or a decimal/dotted string.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] only when `asn` is a malformed string or an
    /// integer outside the AS number space.
    pub fn full(&self, asn: impl ToAsn) -> Result<&str, FormatError> {
        let asn = asn.to_asn()?;
        Ok(self.get(asn).unwrap_or(self.config.unknown_full.as_str()))
    }

    /// Short name of an AS, derived from [`full`](Self::full)
    pub fn short(&self, asn: impl ToAsn) -> Result<&str, FormatError> {
        self.full(asn).map(short_name)
    }

    /// Full and short names of an AS in one value
    pub fn describe(&self, asn: impl ToAsn) -> Result<AsnName<'_>, FormatError> {
        let asn = asn.to_asn()?;
        let known = self.contains(asn);
        let full = self.full(asn)?;
        Ok(AsnName {
            asn,
            full,
            short: short_name(full),
            known,
        })
    }

    /// Registered full name, without the unknown fallback
    pub fn get(&self, asn: Asn) -> Option<&str> {
        self.names.get(&asn).map(String::as_str)
    }

    /// Check if an AS number is registered
    pub fn contains(&self, asn: Asn) -> bool {
        self.names.contains_key(&asn)
    }

    /// Number of registered AS numbers
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All entries, ordered by AS number
    pub fn iter(&self) -> impl Iterator<Item = (Asn, &str)> {
        let mut entries: Vec<_> = self
            .names
            .iter()
            .map(|(asn, full)| (*asn, full.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(asn, _)| *asn);
        entries.into_iter()
    }

    /// Full name returned for unregistered AS numbers
    pub fn unknown_full(&self) -> &str {
        &self.config.unknown_full
    }

    /// Short name returned for unregistered AS numbers
    pub fn unknown_short(&self) -> &str {
        self.config.unknown_short()
    }

    /// Counters collected while the registry was loaded
    pub fn summary(&self) -> LoadSummary {
        self.summary
    }
}
