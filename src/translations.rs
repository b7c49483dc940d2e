//! Locale dictionaries and completeness checks
//!
//! A locale file is a two-level JSON object, section then key:
//!
//! ```json
//! { "hero": { "title": "Winning picks", "cta": "Join now" } }
//! ```
//!
//! Lookups distinguish a missing key from an empty string. Rendering falls
//! back to the key itself so a gap shows up on the page instead of blank
//! text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::TranslationError;

type Sections = BTreeMap<String, BTreeMap<String, String>>;

/// Result of a dictionary lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a str),
    Missing,
}

/// Fully qualified translation key, displayed as `section.key`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TranslationKey {
    pub section: String,
    pub key: String,
}

impl TranslationKey {
    pub fn new(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.key)
    }
}

/// One locale's dictionary
#[derive(Debug, Clone, Default)]
pub struct Translations {
    pub locale: String,
    sections: Sections,
}

impl Translations {
    pub fn from_json_str(locale: &str, json: &str) -> Result<Self, serde_json::Error> {
        let sections: Sections = serde_json::from_str(json)?;
        Ok(Self {
            locale: locale.to_string(),
            sections,
        })
    }

    /// Load a locale file; the locale name is the file stem (`es.json` -> `es`)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TranslationError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TranslationError::io(path, e))?;
        let locale = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_json_str(&locale, &content).map_err(|e| TranslationError::json(path, e))
    }

    pub fn lookup(&self, section: &str, key: &str) -> Lookup<'_> {
        match self.sections.get(section).and_then(|s| s.get(key)) {
            Some(text) => Lookup::Found(text.as_str()),
            None => Lookup::Missing,
        }
    }

    /// Text for a key, or the key itself when it is missing
    pub fn text<'a>(&'a self, section: &str, key: &'a str) -> &'a str {
        match self.lookup(section, key) {
            Lookup::Found(text) => text,
            Lookup::Missing => key,
        }
    }

    pub fn keys(&self) -> BTreeSet<TranslationKey> {
        self.sections
            .iter()
            .flat_map(|(section, entries)| {
                entries
                    .keys()
                    .map(move |key| TranslationKey::new(section.as_str(), key.as_str()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(|s| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn empty_keys(&self) -> Vec<TranslationKey> {
        self.sections
            .iter()
            .flat_map(|(section, entries)| {
                entries
                    .iter()
                    .filter(|(_, text)| text.trim().is_empty())
                    .map(move |(key, _)| TranslationKey::new(section.as_str(), key.as_str()))
            })
            .collect()
    }
}

/// Completeness of one locale against the reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleReport {
    pub locale: String,
    /// In the reference, absent here
    pub missing: Vec<TranslationKey>,
    /// Present here, absent from the reference
    pub extra: Vec<TranslationKey>,
    pub empty: Vec<TranslationKey>,
}

impl LocaleReport {
    /// Extra keys are harmless; missing and empty ones are not
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.empty.is_empty()
    }
}

/// Compare a candidate locale to the reference locale
pub fn verify(reference: &Translations, candidate: &Translations) -> LocaleReport {
    let expected = reference.keys();
    let actual = candidate.keys();

    LocaleReport {
        locale: candidate.locale.clone(),
        missing: expected.difference(&actual).cloned().collect(),
        extra: actual.difference(&expected).cloned().collect(),
        empty: candidate.empty_keys(),
    }
}

/// Verification of every locale in a directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerificationReport {
    pub reference: String,
    pub reference_keys: usize,
    pub locales: Vec<LocaleReport>,
    /// Keys referenced from source files that the reference locale lacks
    pub unknown_usages: Vec<TranslationKey>,
}

impl VerificationReport {
    pub fn is_complete(&self) -> bool {
        self.unknown_usages.is_empty() && self.locales.iter().all(|l| l.is_complete())
    }
}

/// Load every `*.json` locale in `dir` and verify each against `reference_locale`
///
/// The reference locale itself is checked for empty values too.
pub fn verify_dir<P: AsRef<Path>>(
    dir: P,
    reference_locale: &str,
) -> Result<VerificationReport, TranslationError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| TranslationError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| TranslationError::io(dir, e))?.path();
        if path.extension().map_or(false, |ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut locales = Vec::with_capacity(paths.len());
    for path in &paths {
        locales.push(Translations::load(path)?);
    }

    let reference = locales
        .iter()
        .find(|t| t.locale == reference_locale)
        .ok_or_else(|| TranslationError::MissingReference(reference_locale.to_string()))?;

    let reports: Vec<LocaleReport> = locales.iter().map(|t| verify(reference, t)).collect();

    for report in &reports {
        if report.is_complete() {
            info!("Locale '{}' is complete", report.locale);
        } else {
            warn!(
                "Locale '{}': {} missing, {} empty",
                report.locale,
                report.missing.len(),
                report.empty.len()
            );
        }
    }

    Ok(VerificationReport {
        reference: reference_locale.to_string(),
        reference_keys: reference.len(),
        locales: reports,
        unknown_usages: Vec::new(),
    })
}

/// Finds translation keys referenced from source text
///
/// Recognises `t("section", "key")` and `t("section.key")`, with either
/// quote style.
pub struct UsageScanner {
    pair_pattern: Regex,
    dotted_pattern: Regex,
}

impl Default for UsageScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageScanner {
    pub fn new() -> Self {
        Self {
            pair_pattern: Regex::new(
                r#"\bt\(\s*["']([A-Za-z0-9_-]+)["']\s*,\s*["']([A-Za-z0-9_-]+)["']\s*\)"#,
            )
            .unwrap(),
            dotted_pattern: Regex::new(r#"\bt\(\s*["']([A-Za-z0-9_-]+)\.([A-Za-z0-9_-]+)["']\s*\)"#)
                .unwrap(),
        }
    }

    /// Distinct keys referenced in `source`, sorted
    pub fn scan(&self, source: &str) -> Vec<TranslationKey> {
        let mut found = BTreeSet::new();
        for pattern in [&self.pair_pattern, &self.dotted_pattern] {
            for caps in pattern.captures_iter(source) {
                found.insert(TranslationKey::new(&caps[1], &caps[2]));
            }
        }
        found.into_iter().collect()
    }

    /// Scan every file under `dir` with one of `extensions`, recursively
    pub fn scan_dir<P: AsRef<Path>>(
        &self,
        dir: P,
        extensions: &[&str],
    ) -> Result<Vec<TranslationKey>, TranslationError> {
        let mut found = BTreeSet::new();
        self.scan_dir_into(dir.as_ref(), extensions, &mut found)?;
        Ok(found.into_iter().collect())
    }

    fn scan_dir_into(
        &self,
        dir: &Path,
        extensions: &[&str],
        found: &mut BTreeSet<TranslationKey>,
    ) -> Result<(), TranslationError> {
        let entries = fs::read_dir(dir).map_err(|e| TranslationError::io(dir, e))?;
        for entry in entries {
            let path = entry.map_err(|e| TranslationError::io(dir, e))?.path();
            if path.is_dir() {
                self.scan_dir_into(&path, extensions, found)?;
                continue;
            }
            let matches = path
                .extension()
                .and_then(|e| e.to_str())
                .map_or(false, |e| extensions.contains(&e));
            if !matches {
                continue;
            }
            let source = fs::read_to_string(&path).map_err(|e| TranslationError::io(&path, e))?;
            found.extend(self.scan(&source));
        }
        Ok(())
    }
}

/// Keys used in source but not defined by the reference locale
pub fn unknown_usages(reference: &Translations, used: &[TranslationKey]) -> Vec<TranslationKey> {
    let defined = reference.keys();
    used.iter()
        .filter(|k| !defined.contains(*k))
        .cloned()
        .collect()
}
