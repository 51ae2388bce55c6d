// SPDX-License-Identifier: PMPL-1.0-or-later

//! langtab — language-subtag registry tables and code validation.
//!
//! This crate ingests the IANA language-subtag registry format plus a
//! curated list of canonical language-region pairs, and answers two
//! questions about a `language[-REGION]` code: what is it called, and is
//! it a recognised real-world combination?
//!
//! PIPELINE STAGES:
//! 1. **Sections**: `%%`-delimited registry text split into record buffers.
//! 2. **Records**: RFC-822-style folded header fields parsed into ordered,
//!    case-insensitive multimaps.
//! 3. **Tables**: language and region records folded into code→name maps,
//!    joined by the canonical pair set.
//! 4. **Lookup**: case-normalising resolution and combination checks.
//!
//! An abridged registry snapshot is embedded at compile time, so lookups
//! work with no setup at all: see [`resolve`] and [`is_known_combination`].
//! The `langtab` binary covers the ahead-of-time path, generating a
//! persistable tables artifact from full registry and pairs files.

pub mod embedded;
pub mod error;
pub mod lookup;
pub mod pairs;
pub mod registry;
pub mod tables;

pub use embedded::{is_known_combination, resolve, tables};
pub use error::{LookupError, RegistryError};
pub use lookup::LanguageInfo;
pub use tables::{ArtifactFormat, LanguageTables, SubtagType, TableBuilder, TablesArtifact};
