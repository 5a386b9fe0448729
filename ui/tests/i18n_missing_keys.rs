use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::PathBuf;

/// Translation completeness checks for the two site locales.
///
/// `uk` is the reference locale; the parity test is symmetric because the
/// site is strictly bilingual and a key present in only one file is always a
/// mistake. The parser is a lightweight heuristic:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` as a message definition
/// - Skips blank / attribute / continuation lines
const UK: &str = include_str!("../i18n/uk/paperbag-ui.ftl");
const EN: &str = include_str!("../i18n/en/paperbag-ui.ftl");

#[test]
fn locales_have_identical_key_sets() {
    assert_no_dup_keys(UK, "uk");
    assert_no_dup_keys(EN, "en");

    let uk_keys = extract_keys(UK);
    let en_keys = extract_keys(EN);
    assert!(!uk_keys.is_empty(), "Reference locale (uk) contains no keys.");

    let missing_in_en: BTreeSet<_> = uk_keys.difference(&en_keys).collect();
    let missing_in_uk: BTreeSet<_> = en_keys.difference(&uk_keys).collect();

    assert!(
        missing_in_en.is_empty() && missing_in_uk.is_empty(),
        "Locale key sets diverge.\nMissing in en: {missing_in_en:?}\nMissing in uk: {missing_in_uk:?}",
    );
}

/// Every key looked up with a literal in the source must exist in the
/// dictionaries. Conservative: only direct `tr(lang, "...")` call sites are
/// matched; keys built with `format!` (the catalog prefixes) are covered by
/// the explicit prefix test below.
#[test]
fn literal_lookup_keys_exist() {
    let uk_keys = extract_keys(UK);
    let mut missing = BTreeSet::new();

    for source in rust_sources() {
        let content = fs::read_to_string(&source).expect("readable source file");
        for key in extract_literal_keys(&content) {
            if !uk_keys.contains(&key) {
                missing.insert(format!("{key}  (in {})", source.display()));
            }
        }
    }

    assert!(
        missing.is_empty(),
        "Source code looks up keys absent from uk/paperbag-ui.ftl:\n  {}",
        missing.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

/// The catalog detail scaffold derives its keys as `{prefix}-{suffix}`.
/// Check the full grid for every prefix in use.
#[test]
fn catalog_prefix_grids_are_complete() {
    let prefixes = [
        "bags-paper",
        "bags-laminated",
        "bags-kraft-print",
        "bags-kraft-handles",
        "bags-clutch",
        "bags-eco",
        "components-handles",
        "components-tips",
        "components-eyelets",
        "twine",
        "cutting",
        // Home feature cards use the same derived-key pattern.
    ];
    let suffixes = [
        "title", "desc", "point-1", "point-2", "point-3", "material", "sizes", "printing",
        "min-qty",
    ];

    for (locale, src) in [("uk", UK), ("en", EN)] {
        let keys = extract_keys(src);
        let mut missing = BTreeSet::new();
        for prefix in prefixes {
            for suffix in suffixes {
                let key = format!("{prefix}-{suffix}");
                if !keys.contains(&key) {
                    missing.insert(key);
                }
            }
        }
        for prefix in ["home-feature-eco", "home-feature-quality", "home-feature-delivery"] {
            for suffix in ["title", "desc"] {
                let key = format!("{prefix}-{suffix}");
                if !keys.contains(&key) {
                    missing.insert(key);
                }
            }
        }
        assert!(
            missing.is_empty(),
            "Locale {locale} is missing catalog keys:\n  {}",
            missing.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file.
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty() && !key.contains(' ') && !seen.insert(key.to_string()) {
                dups.insert(key.to_string());
            }
        }
    }

    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}: {dups:?}"
    );
}

/// All `tr(lang, "...")` literal keys in a source file.
fn extract_literal_keys(content: &str) -> Vec<String> {
    const PATTERN: &str = "tr(lang, \"";
    let mut keys = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find(PATTERN) {
        rest = &rest[start + PATTERN.len()..];
        if let Some(end) = rest.find('"') {
            let key = &rest[..end];
            if key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')) && !key.is_empty() {
                keys.push(key.to_string());
            }
            rest = &rest[end..];
        }
    }

    keys
}

/// All `.rs` files under `src/`.
fn rust_sources() -> Vec<PathBuf> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut found = Vec::new();
    let mut stack = vec![root];

    while let Some(dir) = stack.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                found.push(path);
            }
        }
    }

    found
}
