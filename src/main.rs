// SPDX-License-Identifier: PMPL-1.0-or-later

//! langtab: language-subtag registry tables and code validation
//!
//! Builds lookup tables from an IANA-format subtag registry plus a curated
//! canonical-pairs list, writes them out as a versioned artifact, and
//! answers resolve/check queries from the terminal. Queries run against the
//! embedded registry snapshot unless a generated artifact is supplied.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

use langtab::{ArtifactFormat, LanguageTables, TablesArtifact};

#[derive(Parser)]
#[command(name = "langtab")]
#[command(version)]
#[command(about = "Language-subtag registry tables and language-region code validation")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build lookup tables from registry and pairs files, write an artifact
    Generate {
        /// IANA-format language-subtag registry file
        #[arg(short, long, value_name = "REGISTRY")]
        input: PathBuf,

        /// Tab-separated canonical language-region pairs file
        #[arg(short, long, value_name = "PAIRS")]
        pairs: PathBuf,

        /// Artifact output path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Artifact format (defaults from the output extension)
        #[arg(short, long, value_enum)]
        format: Option<ArtifactFormat>,
    },

    /// Resolve a language[-region] code to its canonical form and names
    Resolve {
        /// Code to resolve, e.g. "en-gb"
        #[arg(value_name = "CODE")]
        code: String,

        /// Use a generated artifact instead of the embedded tables
        #[arg(short, long, value_name = "FILE")]
        tables: Option<PathBuf>,
    },

    /// Check whether a code is a known real-world combination
    Check {
        /// Code to check, e.g. "sv-FI"
        #[arg(value_name = "CODE")]
        code: String,

        /// Use a generated artifact instead of the embedded tables
        #[arg(short, long, value_name = "FILE")]
        tables: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            pairs,
            output,
            format,
        } => generate(&input, &pairs, &output, format),
        Commands::Resolve { code, tables } => resolve(&code, tables.as_deref()),
        Commands::Check { code, tables } => check(&code, tables.as_deref()),
    }
}

fn generate(
    input: &Path,
    pairs: &Path,
    output: &Path,
    format: Option<ArtifactFormat>,
) -> Result<()> {
    println!("Reading registry: {}", input.display());
    println!("Reading pairs: {}", pairs.display());

    let tables = LanguageTables::from_files(input, pairs)
        .with_context(|| format!("building tables from {}", input.display()))?;

    let format = format.unwrap_or_else(|| ArtifactFormat::for_path(output));
    let artifact = TablesArtifact::new(tables);
    artifact.save(output, format)?;

    println!("\n{}", "TABLES GENERATED".bold().green());
    println!("  Registry date: {}", artifact.tables.file_date);
    println!("  Languages: {}", artifact.tables.languages.len());
    println!("  Regions: {}", artifact.tables.regions.len());
    println!("  Known pairs: {}", artifact.tables.pairs.len());
    println!(
        "  Artifact: {} ({})",
        output.display(),
        format.extension()
    );
    Ok(())
}

fn resolve(code: &str, tables_path: Option<&Path>) -> Result<()> {
    let tables = load_tables(tables_path)?;
    let info = tables
        .resolve(code)
        .with_context(|| format!("resolving {:?}", code))?;

    println!("{}", info.code.as_str().bold().cyan());
    println!("  Language: {} ({})", info.language, info.language_name);
    if info.has_region {
        println!("  Region: {} ({})", info.region, info.region_name);
    }
    let status = if tables.is_known_combination(&info.code) {
        "known combination".green()
    } else {
        "unrecognised combination".yellow()
    };
    println!("  Status: {}", status);
    Ok(())
}

fn check(code: &str, tables_path: Option<&Path>) -> Result<()> {
    let tables = load_tables(tables_path)?;
    if tables.is_known_combination(code) {
        println!("{} {}", code, "known".green().bold());
        Ok(())
    } else {
        println!("{} {}", code, "unknown".red().bold());
        std::process::exit(1);
    }
}

fn load_tables(path: Option<&Path>) -> Result<Cow<'static, LanguageTables>> {
    match path {
        Some(path) => {
            let artifact = TablesArtifact::load(path)?;
            Ok(Cow::Owned(artifact.tables))
        }
        None => Ok(Cow::Borrowed(langtab::tables())),
    }
}
