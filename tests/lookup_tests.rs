// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lookup tests against the embedded registry snapshot

use langtab::{is_known_combination, resolve, tables, LanguageInfo, LookupError};

#[test]
fn test_uppercase_language_normalized() {
    let info = resolve("SV").expect("resolve should succeed");
    assert_eq!(info.code, "sv");
    assert_eq!(info.language, "sv");
    assert_eq!(info.language_name, "Swedish");
    assert!(!info.has_region);
}

#[test]
fn test_bare_language_has_empty_region_fields() {
    let info = resolve("ta").expect("resolve should succeed");
    assert_eq!(info.language_name, "Tamil");
    assert!(!info.has_region);
    assert_eq!(info.region, "");
    assert_eq!(info.region_name, "");
    assert!(is_known_combination("ta"));
}

#[test]
fn test_swedish_finland_resolves() {
    let info = resolve("sv-fi").expect("resolve should succeed");
    assert_eq!(info.code, "sv-FI");
    assert_eq!(info.region, "FI");
    assert_eq!(info.region_name, "Finland");
    assert!(is_known_combination("sv-fi"));
}

#[test]
fn test_british_english_golden_result() {
    let info = resolve("en-gb").expect("resolve should succeed");
    assert_eq!(
        info,
        LanguageInfo {
            code: "en-GB".to_string(),
            language: "en".to_string(),
            language_name: "English".to_string(),
            has_region: true,
            region: "GB".to_string(),
            region_name: "United Kingdom".to_string(),
        }
    );
    assert!(is_known_combination("en-GB"));
}

#[test]
fn test_unknown_language_fails() {
    let err = resolve("xz").expect_err("xz should not resolve");
    assert_eq!(err, LookupError::UnknownLanguage("xz".to_string()));
    assert!(!is_known_combination("xz"));
}

#[test]
fn test_unknown_region_fails_despite_valid_language() {
    let err = resolve("sv-SW").expect_err("sv-SW should not resolve");
    assert_eq!(err, LookupError::UnknownRegion("SW".to_string()));
}

#[test]
fn test_reunion_resolves_but_pair_unknown() {
    let info = resolve("sv-RE").expect("sv-RE should resolve");
    assert_eq!(info.region_name, "Réunion");
    assert!(!is_known_combination("sv-RE"));
}

#[test]
fn test_resolution_is_idempotent() {
    for code in ["en-gb", "SV-FI", "ta", "PT-br", "es-419"] {
        let first = resolve(code).expect("resolve should succeed");
        let second = resolve(&first.code).expect("canonical code should resolve");
        assert_eq!(first, second, "re-resolving {code}");
    }
}

#[test]
fn test_case_variants_resolve_identically() {
    let canonical = resolve("en-GB").expect("resolve should succeed");
    for variant in ["en-gb", "EN-GB", "En-Gb", "eN-gB", "en-Gb"] {
        assert_eq!(
            resolve(variant).expect("variant should resolve"),
            canonical,
            "variant {variant}"
        );
    }
}

#[test]
fn test_numeric_region_resolves() {
    let info = resolve("es-419").expect("resolve should succeed");
    assert_eq!(info.code, "es-419");
    assert_eq!(info.region_name, "Latin America and the Caribbean");
    assert!(is_known_combination("es-419"));
}

#[test]
fn test_valid_parts_do_not_imply_known_pair() {
    // Both halves of en-FI are valid on their own; the combination is not
    // in the curated set.
    assert!(resolve("en-FI").is_ok());
    assert!(!is_known_combination("en-FI"));
}

#[test]
fn test_tables_initialized_once() {
    assert!(std::ptr::eq(tables(), tables()));
}

#[test]
fn test_region_check_requires_valid_language() {
    assert!(!is_known_combination("xz-GB"));
}
