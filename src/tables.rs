// SPDX-License-Identifier: PMPL-1.0-or-later

//! Record classification and lookup-table construction.
//!
//! Folds the registry's language and region records, plus the canonical
//! pair set, into the three immutable tables everything downstream reads.
//! Also owns the persisted form of those tables: a versioned artifact
//! written by the `generate` command and loadable back in either JSON or
//! YAML.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::ValueEnum;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::pairs;
use crate::registry::{Record, SectionReader};

const ARTIFACT_SCHEMA: &str = "langtab.tables";
const ARTIFACT_VERSION: u32 = 1;

/// Registry entry types this system consumes.
///
/// Classification is an exact match on the `Type` value; every other
/// registry type (script, variant, extlang, grandfathered, redundant, and
/// whatever IANA adds next) is irrelevant here and classifies as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtagType {
    Language,
    Region,
}

impl SubtagType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "language" => Some(Self::Language),
            "region" => Some(Self::Region),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Region => "region",
        }
    }
}

/// The three lookup tables plus registry provenance.
///
/// Built once by [`TableBuilder`] and never mutated afterwards; safe to
/// share across threads freely. Ordered maps keep serialized artifacts
/// byte-stable for a given input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTables {
    /// `File-Date` of the registry the tables were built from.
    pub file_date: NaiveDate,
    /// Lowercase language subtag to display name.
    pub languages: BTreeMap<String, String>,
    /// Uppercase region subtag to display name.
    pub regions: BTreeMap<String, String>,
    /// Canonical `language-REGION` combinations.
    pub pairs: BTreeSet<String>,
}

impl LanguageTables {
    /// One-shot build from registry and pairs readers.
    pub fn from_readers<R1: BufRead, R2: BufRead>(
        registry: R1,
        pairs: R2,
    ) -> Result<Self, RegistryError> {
        let mut builder = TableBuilder::new();
        builder.load_registry(registry)?;
        builder.load_pairs(pairs)?;
        builder.build()
    }

    /// One-shot build from registry and pairs files on disk.
    pub fn from_files(registry: &Path, pairs: &Path) -> Result<Self, RegistryError> {
        let registry = BufReader::new(File::open(registry)?);
        let pairs = BufReader::new(File::open(pairs)?);
        Self::from_readers(registry, pairs)
    }
}

/// Streaming builder folding registry records and canonical pairs into
/// [`LanguageTables`].
#[derive(Debug, Default)]
pub struct TableBuilder {
    file_date: Option<NaiveDate>,
    languages: BTreeMap<String, String>,
    regions: BTreeMap<String, String>,
    pairs: BTreeSet<String>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes a registry stream: the header record first, then entries.
    ///
    /// The header record must carry a parsable `File-Date`. Classified
    /// language and region records fold into their tables last-write-wins;
    /// records of any other type, or with no type at all, are skipped
    /// silently.
    pub fn load_registry<R: BufRead>(&mut self, input: R) -> Result<(), RegistryError> {
        let mut records = SectionReader::new(input).records();
        let header = match records.next() {
            Some(record) => record?,
            None => return Err(RegistryError::EmptyRegistry),
        };
        let raw_date = header
            .get("File-Date")
            .ok_or(RegistryError::MissingField("File-Date"))?;
        let file_date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|source| {
            RegistryError::InvalidFileDate {
                value: raw_date.to_string(),
                source,
            }
        })?;
        self.file_date = Some(file_date);

        let mut kept = 0usize;
        let mut skipped = 0usize;
        for record in records {
            let record = record?;
            match record.get("Type").and_then(SubtagType::parse) {
                Some(kind) => {
                    self.fold_subtag(kind, &record)?;
                    kept += 1;
                }
                None => skipped += 1,
            }
        }
        debug!(
            "registry {}: kept {} subtag records, skipped {} of other types",
            file_date, kept, skipped
        );
        Ok(())
    }

    fn fold_subtag(&mut self, kind: SubtagType, record: &Record) -> Result<(), RegistryError> {
        let subtag = record
            .get("Subtag")
            .ok_or(RegistryError::MissingField("Subtag"))?;
        let description = record
            .get("Description")
            .ok_or(RegistryError::MissingField("Description"))?;
        match kind {
            SubtagType::Language => {
                self.languages
                    .insert(subtag.to_ascii_lowercase(), description.to_string());
            }
            SubtagType::Region => {
                self.regions
                    .insert(subtag.to_ascii_uppercase(), description.to_string());
            }
        }
        Ok(())
    }

    /// Folds a canonical-pairs stream into the pair set.
    ///
    /// Pairs are not cross-checked against the language or region tables,
    /// here or in [`build`](Self::build); the sources are independent and
    /// any divergence surfaces only at lookup time.
    pub fn load_pairs<R: BufRead>(&mut self, input: R) -> Result<(), RegistryError> {
        let mut loaded = pairs::load_pairs(input)?;
        self.pairs.append(&mut loaded);
        Ok(())
    }

    /// Finishes the build. Fails unless a registry stream was loaded.
    pub fn build(self) -> Result<LanguageTables, RegistryError> {
        let file_date = self.file_date.ok_or(RegistryError::EmptyRegistry)?;
        info!(
            "built tables from registry {}: {} languages, {} regions, {} pairs",
            file_date,
            self.languages.len(),
            self.regions.len(),
            self.pairs.len()
        );
        Ok(LanguageTables {
            file_date,
            languages: self.languages,
            regions: self.regions,
            pairs: self.pairs,
        })
    }
}

/// Serialization formats for the persisted tables artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArtifactFormat {
    Json,
    Yaml,
}

impl ArtifactFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Picks a format from a path's extension, defaulting to JSON.
    pub fn for_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
            .unwrap_or(Self::Json)
    }
}

/// Persisted form of [`LanguageTables`]: the tables wrapped with schema,
/// format version, and generation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesArtifact {
    pub schema: String,
    pub version: u32,
    pub generated_at: String,
    pub tables: LanguageTables,
}

impl TablesArtifact {
    pub fn new(tables: LanguageTables) -> Self {
        Self {
            schema: ARTIFACT_SCHEMA.to_string(),
            version: ARTIFACT_VERSION,
            generated_at: chrono::Utc::now().to_rfc3339(),
            tables,
        }
    }

    /// Serializes the artifact in the requested format.
    pub fn render(&self, format: ArtifactFormat) -> anyhow::Result<String> {
        match format {
            ArtifactFormat::Json => {
                serde_json::to_string_pretty(self).context("serializing tables artifact as json")
            }
            ArtifactFormat::Yaml => {
                serde_yaml::to_string(self).context("serializing tables artifact as yaml")
            }
        }
    }

    /// Writes the artifact, creating parent directories as needed.
    pub fn save(&self, path: &Path, format: ArtifactFormat) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating artifact parent {}", parent.display()))?;
            }
        }
        let rendered = self.render(format)?;
        fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Reads an artifact back, accepting either serialization format, and
    /// validates its schema and version.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let artifact: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
                .with_context(|| format!("parsing {}", path.display()))?,
            _ => serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", path.display()))?,
        };
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.schema != ARTIFACT_SCHEMA {
            bail!("unsupported tables artifact schema '{}'", self.schema);
        }
        if self.version != ARTIFACT_VERSION {
            bail!(
                "unsupported tables artifact version {} (expected {})",
                self.version,
                ARTIFACT_VERSION
            );
        }
        Ok(())
    }
}
