// SPDX-License-Identifier: PMPL-1.0-or-later

//! Canonical language-region pair loading.

use std::collections::BTreeSet;
use std::io::BufRead;

use log::debug;

use crate::error::RegistryError;

/// Reads a tab-separated canonical-pairs stream into the pair set.
///
/// Only the first column is consumed; anything after the first tab is
/// free-form annotation. The column must be a `language-region` token with
/// the language half already lowercase and the region half in arbitrary
/// case: the split happens on the first hyphen and the region half is
/// uppercased to form the canonical `language-REGION` member. A token with
/// no hyphen aborts the load, since the pairs source always encodes a
/// region. Blank lines are skipped.
pub fn load_pairs<R: BufRead>(input: R) -> Result<BTreeSet<String>, RegistryError> {
    let mut pairs = BTreeSet::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let token = line.split_once('\t').map_or(line.as_str(), |(first, _)| first);
        let Some((language, region)) = token.split_once('-') else {
            return Err(RegistryError::InvalidPair(token.to_string()));
        };
        pairs.insert(format!("{}-{}", language, region.to_ascii_uppercase()));
    }
    debug!("loaded {} canonical language-region pairs", pairs.len());
    Ok(pairs)
}
