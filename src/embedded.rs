// SPDX-License-Identifier: PMPL-1.0-or-later

//! Embedded registry snapshot and the process-wide tables built from it.
//!
//! The crate ships an abridged IANA-format registry plus a curated pairs
//! list as compile-time data, so lookups need no configuration or file I/O.
//! The tables are built on first use and shared read-only for the life of
//! the process; `Lazy` guards the one-time construction against concurrent
//! first callers.

use once_cell::sync::Lazy;

use crate::error::LookupError;
use crate::lookup::LanguageInfo;
use crate::tables::LanguageTables;

/// Abridged IANA language-subtag registry snapshot.
pub const REGISTRY_SNAPSHOT: &str = include_str!("../data/subtag-registry.txt");

/// Curated language-region pairs matching the snapshot.
pub const PAIRS_SNAPSHOT: &str = include_str!("../data/language-pairs.tsv");

// The snapshot is validated by the test suite; failing to build from it is
// a bug in the shipped data, not a runtime condition.
static TABLES: Lazy<LanguageTables> = Lazy::new(|| {
    LanguageTables::from_readers(REGISTRY_SNAPSHOT.as_bytes(), PAIRS_SNAPSHOT.as_bytes())
        .expect("embedded registry snapshot is well-formed")
});

/// The process-wide tables built from the embedded snapshot.
pub fn tables() -> &'static LanguageTables {
    &TABLES
}

/// Resolves a code against the embedded tables.
///
/// # Examples
/// ```
/// let info = langtab::resolve("sv-fi").unwrap();
/// assert_eq!(info.code, "sv-FI");
/// assert_eq!(info.region_name, "Finland");
/// ```
pub fn resolve(code: &str) -> Result<LanguageInfo, LookupError> {
    tables().resolve(code)
}

/// Checks a code against the embedded tables' pair set.
///
/// # Examples
/// ```
/// assert!(langtab::is_known_combination("en-GB"));
/// assert!(!langtab::is_known_combination("sv-RE"));
/// ```
pub fn is_known_combination(code: &str) -> bool {
    tables().is_known_combination(code)
}
