//! Loading and validation of Crowdin translation exports.
//!
//! An export is a YAML document with a single top-level entry: the language
//! name mapped to the translation sections. Loading resolves the document
//! against the full canonical schema up front, so rendering can never hit a
//! missing key.

use std::{
    fs::File,
    io::{BufReader, Cursor, Read},
    path::Path,
};

use serde::Deserialize;
use serde_yaml::Mapping;

use crate::{
    error::Error,
    schema::{BddPrefix, HeaderGroup, SettingField},
};

/// The raw translation sections of one export, as deserialized from YAML.
///
/// `Mapping` keeps the source insertion order, which matters for the
/// true/false string collections.
#[derive(Debug, Deserialize)]
struct Sections {
    #[serde(rename = "Settings")]
    settings: Mapping,
    #[serde(rename = "Setup")]
    setup: Mapping,
    #[serde(rename = "Keywords")]
    keywords: Mapping,
    #[serde(rename = "Headers")]
    headers: Mapping,
    #[serde(rename = "BDD")]
    bdd: Mapping,
    #[serde(rename = "TrueString")]
    true_strings: Mapping,
    #[serde(rename = "FalseString")]
    false_strings: Mapping,
}

/// One fully resolved language definition: every generated attribute's value,
/// validated against the canonical schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDef {
    /// The generated Python class name, derived from the language name.
    pub class_name: String,
    /// The class doc string (the input file's stem).
    pub doc: String,
    headers: Vec<String>,
    settings: Vec<String>,
    bdd_prefixes: Vec<String>,
    /// Localized words accepted as `True`, in source order.
    pub true_strings: Vec<String>,
    /// Localized words accepted as `False`, in source order.
    pub false_strings: Vec<String>,
}

impl LanguageDef {
    /// Parse and validate one export from any reader.
    ///
    /// `doc` becomes the generated class doc string; [`read_from`] passes
    /// the input file's stem.
    ///
    /// [`read_from`]: LanguageDef::read_from
    pub fn from_reader<R: Read>(reader: R, doc: &str) -> Result<Self, Error> {
        let root: Mapping = serde_yaml::from_reader(reader)?;

        // Exports hold one language per file. If several top-level entries
        // are present the last one wins, matching the upstream converter's
        // pop-an-item behavior; multiple languages per file is unsupported.
        let (name, translations) = root
            .into_iter()
            .last()
            .ok_or_else(|| Error::invalid_document("document has no top-level language entry"))?;
        let name = name
            .as_str()
            .ok_or_else(|| Error::data_mismatch("top-level language name must be a string"))?
            .to_string();

        let sections: Sections = serde_yaml::from_value(translations)
            .map_err(|e| Error::invalid_document(e.to_string()))?;

        // Effective setting table: Settings, then Setup, then Keywords.
        // Later sections overwrite earlier keys on collision.
        let mut merged = sections.settings;
        for (key, value) in sections.setup {
            merged.insert(key, value);
        }
        for (key, value) in sections.keywords {
            merged.insert(key, value);
        }

        let headers = HeaderGroup::ALL
            .iter()
            .map(|group| lookup("Headers", &sections.headers, group.canonical_key()))
            .collect::<Result<Vec<_>, _>>()?;
        let settings = SettingField::ALL
            .iter()
            .map(|field| lookup("Settings", &merged, field.canonical_key()))
            .collect::<Result<Vec<_>, _>>()?;
        let bdd_prefixes = BddPrefix::ALL
            .iter()
            .map(|prefix| lookup("BDD", &sections.bdd, prefix.canonical_key()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LanguageDef {
            class_name: derive_class_name(&name),
            doc: doc.to_string(),
            headers,
            settings,
            bdd_prefixes,
            true_strings: string_values("TrueString", &sections.true_strings)?,
            false_strings: string_values("FalseString", &sections.false_strings)?,
        })
    }

    /// Parse and validate one export file. The file stem becomes the class
    /// doc string.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let doc = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = File::open(path).map_err(Error::Io)?;
        Self::from_reader(BufReader::new(file), &doc)
    }

    /// Parse and validate one export from a YAML string.
    pub fn from_yaml_str(yaml: &str, doc: &str) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(yaml), doc)
    }

    /// The translated header for a structural section group.
    pub fn header(&self, group: HeaderGroup) -> &str {
        &self.headers[group as usize]
    }

    /// The translated value for a canonical setting.
    pub fn setting(&self, field: SettingField) -> &str {
        &self.settings[field as usize]
    }

    /// The translated word for a BDD prefix.
    pub fn bdd_prefix(&self, prefix: BddPrefix) -> &str {
        &self.bdd_prefixes[prefix as usize]
    }
}

/// Derive the generated class name from a language name.
///
/// Hyphenated names are split, each segment gets its first letter
/// capitalized, and the segments are joined without a separator. Only the
/// word-initial letter changes, so internal casing such as "pt-BR" is
/// preserved: `"pt-BR"` → `"PtBR"`, `"Traditional-Chinese"` →
/// `"TraditionalChinese"`.
pub fn derive_class_name(language: &str) -> String {
    language.split('-').map(capitalize_first).collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lookup(section: &'static str, map: &Mapping, key: &str) -> Result<String, Error> {
    let value = map
        .get(key)
        .ok_or_else(|| Error::missing_key(section, key))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::data_mismatch(format!("value for `{key}` in `{section}` must be a string")))
}

fn string_values(section: &'static str, map: &Mapping) -> Result<Vec<String>, Error> {
    map.values()
        .map(|value| {
            value.as_str().map(str::to_string).ok_or_else(|| {
                Error::data_mismatch(format!("values in `{section}` must be strings"))
            })
        })
        .collect()
}
