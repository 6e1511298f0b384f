//! Loading the character snapshot and resolving portraits.
//!
//! The snapshot is a JSON array of flat objects written by the scraper. A
//! row becomes eligible only if it has a usable display name and one of the
//! portrait templates names a file that exists in the asset directory.
//! Rows that fail either check are skipped, never fatal; the reasons are
//! collected for diagnostics.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::record::CharacterRecord;

/// Snapshot field holding the display name.
pub const DEFAULT_NAME_FIELD: &str = "姓名";

/// Name the scraper writes when it could not read one.
pub const PLACEHOLDER_NAME: &str = "Unknown";

/// Default URL prefix under which portraits are served.
pub const DEFAULT_AVATAR_URL_PREFIX: &str = "/avatars";

const PORTRAIT_LABEL: &str = "头像";

/// Maps a display name to a candidate portrait filename.
pub type PortraitTemplate = fn(&str) -> String;

fn name_label_name(name: &str) -> String {
    format!("{name}_{PORTRAIT_LABEL}_{name}.png")
}

fn label_name(name: &str) -> String {
    format!("{PORTRAIT_LABEL}_{name}.png")
}

fn bare_name(name: &str) -> String {
    format!("{name}.png")
}

fn name_label(name: &str) -> String {
    format!("{name}_{PORTRAIT_LABEL}.png")
}

/// Portrait filename candidates, tried in this order. The first file that
/// exists wins, so the order decides between duplicates on disk.
pub const PORTRAIT_TEMPLATES: &[PortraitTemplate] =
    &[name_label_name, label_name, bare_name, name_label];

/// Why a snapshot row was left out of the eligible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The row is not a JSON object.
    NotAnObject,
    /// The name field is absent, not a string, or blank.
    MissingName,
    /// The name is the scraper's placeholder.
    PlaceholderName,
    /// The name contains a path separator and cannot address a file.
    InvalidName,
    /// An earlier row already used this name.
    DuplicateName,
    /// No portrait template resolved to an existing file.
    NoPortrait,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAnObject => "not_an_object",
            Self::MissingName => "missing_name",
            Self::PlaceholderName => "placeholder_name",
            Self::InvalidName => "invalid_name",
            Self::DuplicateName => "duplicate_name",
            Self::NoPortrait => "no_portrait",
        }
    }
}

/// A snapshot row that did not make it into the eligible set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Zero-based position in the snapshot array.
    pub index: usize,
    pub name: Option<String>,
    pub reason: SkipReason,
}

/// Records whose portraits resolved, in snapshot order. Names are unique.
#[derive(Debug, Clone, Default)]
pub struct EligibleSet {
    records: Vec<CharacterRecord>,
}

impl EligibleSet {
    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name() == name)
    }
}

/// Result of loading a snapshot.
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub eligible: EligibleSet,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadedRecords {
    pub fn excluded_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Reads a snapshot file and checks each row against an asset directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    snapshot_path: PathBuf,
    asset_dir: PathBuf,
    name_field: String,
    url_prefix: String,
}

impl RecordStore {
    pub fn new(snapshot_path: impl Into<PathBuf>, asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            asset_dir: asset_dir.into(),
            name_field: DEFAULT_NAME_FIELD.to_string(),
            url_prefix: DEFAULT_AVATAR_URL_PREFIX.to_string(),
        }
    }

    /// Use a different snapshot field as the display name.
    pub fn with_name_field(mut self, field: impl Into<String>) -> Self {
        self.name_field = field.into();
        self
    }

    /// Prefix for the `avatar_url` of loaded records.
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }

    /// Load the snapshot and split it into eligible and skipped rows.
    pub fn load(&self) -> CoreResult<LoadedRecords> {
        if !self.snapshot_path.is_file() {
            return Err(CoreError::Configuration(format!(
                "Snapshot file not found: {}",
                self.snapshot_path.display()
            )));
        }
        if !self.asset_dir.is_dir() {
            return Err(CoreError::Configuration(format!(
                "Asset directory not found: {}",
                self.asset_dir.display()
            )));
        }

        let raw = fs::read_to_string(&self.snapshot_path).map_err(|e| {
            CoreError::Configuration(format!(
                "Failed to read snapshot {}: {e}",
                self.snapshot_path.display()
            ))
        })?;
        let rows: Vec<Value> = serde_json::from_str(&raw).map_err(|e| {
            CoreError::Configuration(format!(
                "Snapshot {} is not a JSON array of records: {e}",
                self.snapshot_path.display()
            ))
        })?;

        let mut loaded = LoadedRecords::default();
        let mut seen = HashSet::new();

        for (index, row) in rows.into_iter().enumerate() {
            match self.admit(row, &mut seen) {
                Ok(record) => loaded.eligible.records.push(record),
                Err((name, reason)) => {
                    tracing::debug!(index, name = ?name, reason = reason.as_str(), "Skipping snapshot row");
                    loaded.skipped.push(SkippedRecord {
                        index,
                        name,
                        reason,
                    });
                }
            }
        }

        tracing::info!(
            path = %self.snapshot_path.display(),
            eligible = loaded.eligible.len(),
            excluded = loaded.excluded_count(),
            "Loaded character snapshot"
        );

        Ok(loaded)
    }

    /// The first portrait filename that exists for `name`, if any.
    pub fn resolve_portrait(&self, name: &str) -> Option<String> {
        PORTRAIT_TEMPLATES
            .iter()
            .map(|template| template(name))
            .find(|file| self.asset_dir.join(file).is_file())
    }

    fn admit(
        &self,
        row: Value,
        seen: &mut HashSet<String>,
    ) -> Result<CharacterRecord, (Option<String>, SkipReason)> {
        let Value::Object(fields) = row else {
            return Err((None, SkipReason::NotAnObject));
        };

        let name = match fields.get(&self.name_field).and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => return Err((None, SkipReason::MissingName)),
        };
        if name == PLACEHOLDER_NAME {
            return Err((Some(name), SkipReason::PlaceholderName));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err((Some(name), SkipReason::InvalidName));
        }
        if seen.contains(&name) {
            return Err((Some(name), SkipReason::DuplicateName));
        }

        let Some(file) = self.resolve_portrait(&name) else {
            return Err((Some(name), SkipReason::NoPortrait));
        };

        seen.insert(name.clone());
        let avatar_url = format!("{}/{file}", self.url_prefix.trim_end_matches('/'));
        Ok(CharacterRecord::new(name, fields, avatar_url))
    }
}
