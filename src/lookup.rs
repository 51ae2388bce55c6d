// SPDX-License-Identifier: PMPL-1.0-or-later

//! Code resolution and combination checks over built tables.

use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::tables::LanguageTables;

/// Everything known about a resolved `language[-REGION]` code.
///
/// A plain value: constructed per lookup, never mutated afterwards, owned
/// by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Canonical code: language lowercase, region uppercase.
    pub code: String,
    /// Language subtag, lowercase.
    pub language: String,
    /// Display name of the language.
    pub language_name: String,
    /// Whether the input carried a region subtag.
    pub has_region: bool,
    /// Region subtag, uppercase; empty when `has_region` is false.
    pub region: String,
    /// Display name of the region; empty when `has_region` is false.
    pub region_name: String,
}

impl LanguageTables {
    /// Resolves a `language[-region]` code to its canonical form and names.
    ///
    /// The language half is matched lowercase and the region half uppercase,
    /// so any case mix on input resolves identically. Fails with
    /// [`LookupError::UnknownLanguage`] or [`LookupError::UnknownRegion`]
    /// when a half is absent from its table; the region is only consulted
    /// after the language has been accepted.
    ///
    /// # Examples
    /// ```
    /// let info = langtab::resolve("en-gb").unwrap();
    /// assert_eq!(info.code, "en-GB");
    /// assert_eq!(info.region_name, "United Kingdom");
    /// ```
    pub fn resolve(&self, code: &str) -> Result<LanguageInfo, LookupError> {
        let (language, region) = split_code(code);
        let language = language.to_ascii_lowercase();
        let language_name = self
            .languages
            .get(&language)
            .ok_or_else(|| LookupError::UnknownLanguage(language.clone()))?;

        let Some(region) = region else {
            return Ok(LanguageInfo {
                code: language.clone(),
                language_name: language_name.clone(),
                language,
                has_region: false,
                region: String::new(),
                region_name: String::new(),
            });
        };

        let region = region.to_ascii_uppercase();
        let region_name = self
            .regions
            .get(&region)
            .ok_or_else(|| LookupError::UnknownRegion(region.clone()))?;

        Ok(LanguageInfo {
            code: format!("{language}-{region}"),
            language_name: language_name.clone(),
            language,
            has_region: true,
            region_name: region_name.clone(),
            region,
        })
    }

    /// Whether a code names a curated real-world combination.
    ///
    /// A bare valid language is always known. With a region present the
    /// canonical pair must be in the pair set; membership there is
    /// independent of the region table, so an unknown region simply yields
    /// `false`. Never fails.
    pub fn is_known_combination(&self, code: &str) -> bool {
        let (language, region) = split_code(code);
        let language = language.to_ascii_lowercase();
        if !self.languages.contains_key(&language) {
            return false;
        }
        match region {
            None => true,
            Some(region) => {
                let pair = format!("{}-{}", language, region.to_ascii_uppercase());
                self.pairs.contains(&pair)
            }
        }
    }
}

/// Splits on the first hyphen: `"en-GB"` → `("en", Some("GB"))`.
fn split_code(code: &str) -> (&str, Option<&str>) {
    match code.split_once('-') {
        Some((language, region)) => (language, Some(region)),
        None => (code, None),
    }
}
