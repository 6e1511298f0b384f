//! The character record served to clients.

use serde::Serialize;
use serde_json::{Map, Value};

/// Field name under which the resolved portrait URL is exposed.
pub const AVATAR_URL_FIELD: &str = "avatar_url";

/// One playable character with a resolved portrait.
///
/// The display name is the identity key. All snapshot fields (including the
/// name field itself) are passed through untouched when serialized, with
/// `avatar_url` appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterRecord {
    #[serde(skip)]
    name: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
    avatar_url: String,
}

impl CharacterRecord {
    /// Build a record. Any `avatar_url` already present in `fields` is
    /// replaced by the resolved one.
    pub fn new(
        name: impl Into<String>,
        mut fields: Map<String, Value>,
        avatar_url: impl Into<String>,
    ) -> Self {
        fields.remove(AVATAR_URL_FIELD);
        Self {
            name: name.into(),
            fields,
            avatar_url: avatar_url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }
}
