//! Parsing of IANA registry CSV documents and the media type list format.
//!
//! A registry CSV has the header `Name,Template,Reference`. The list written
//! to disk is a JSON array of `type/subtype` strings, sorted and deduplicated,
//! indented with four spaces and terminated by a newline.

use crate::error::MediaTypeError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Leading subtype token of a `Name` cell, without annotations such as
/// "- DEPRECATED in favor of ..." or "(OBSOLETED by ...)".
static SUBTYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s()]+").expect("static regex"));

#[derive(Debug, Deserialize)]
struct RegistryRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Template", default)]
    template: String,
}

/// Extracts the media types of one registry.
pub fn parse_registry(registry: &str, csv_text: &str) -> Result<Vec<String>, MediaTypeError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut types = Vec::new();
    for row in reader.deserialize::<RegistryRow>() {
        let row = row.map_err(|source| MediaTypeError::Csv {
            registry: registry.to_string(),
            source,
        })?;

        if !row.template.is_empty() {
            types.push(row.template);
            continue;
        }

        if let Some(subtype) = SUBTYPE_RE.find(&row.name) {
            types.push(format!("{}/{}", registry, subtype.as_str()));
        }
    }
    Ok(types)
}

/// Ordered set of media types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaTypeList {
    types: BTreeSet<String>,
}

impl MediaTypeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, media_type: impl Into<String>) -> bool {
        self.types.insert(media_type.into())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Case-insensitive membership test. Parameters (`; charset=...`) are ignored.
    pub fn contains(&self, media_type: &str) -> bool {
        let essence = media_type.split(';').next().unwrap_or("").trim();
        if essence.is_empty() {
            return false;
        }
        self.types.iter().any(|t| t.eq_ignore_ascii_case(essence))
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, MediaTypeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serializes in the on-disk reference format.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, MediaTypeError> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser)?;
        out.push(b'\n');
        Ok(out)
    }
}

impl<S: Into<String>> FromIterator<S> for MediaTypeList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<S: Into<String>> Extend<S> for MediaTypeList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}
