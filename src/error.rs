// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for table construction and code lookup.

use thiserror::Error;

/// Errors raised while building lookup tables from registry and pair sources.
///
/// Construction is all-or-nothing: any of these aborts the whole build.
/// There is no partial table and no per-record skip for malformed input.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Reading an underlying source failed. Never reinterpreted as a
    /// format error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A header line with no colon and no leading whitespace.
    #[error("malformed header line {0:?}")]
    MalformedField(String),

    /// A continuation line appeared before any field.
    #[error("continuation line without a preceding field: {0:?}")]
    OrphanContinuation(String),

    /// A record lacks a field its type requires.
    #[error("record is missing the {0} field")]
    MissingField(&'static str),

    /// The `File-Date` header value is not a `YYYY-MM-DD` date.
    #[error("invalid File-Date {value:?}: {source}")]
    InvalidFileDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A canonical-pair token has no hyphen between language and region.
    #[error("invalid language-region pair: {0:?}")]
    InvalidPair(String),

    /// The registry stream ended before any record.
    #[error("registry input is empty")]
    EmptyRegistry,
}

/// Lookup failures returned by resolution.
///
/// These are ordinary result values, never fatal. Combination checks do not
/// use them at all: unknown input there is simply `false`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The language subtag is not present in the language table.
    #[error("unknown language code {0:?}")]
    UnknownLanguage(String),

    /// The region subtag is not present in the region table.
    #[error("unknown region code {0:?}")]
    UnknownRegion(String),
}
