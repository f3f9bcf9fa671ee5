//! Maturity model schema types
//!
//! The model store is deserialized from `model.yaml` (or its JSON
//! conversion). Level order is the maturity progression and is preserved
//! everywhere downstream.

pub mod guide;

use serde::{Deserialize, Serialize};

use crate::error::DeriveError;

/// Separator between the `"Level N"` prefix and the display label in
/// [`Level::name`].
pub const LEVEL_NAME_SEPARATOR: &str = ": ";

/// Prefix every [`Level::id`] carries before its numeric rank.
pub const LEVEL_ID_PREFIX: &str = "level";

// ============================================================================
// Model Store
// ============================================================================

/// Root of the maturity model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaturityModel {
    /// Levels in maturity order.
    pub levels: Vec<Level>,
}

impl MaturityModel {
    /// Total number of practices across all levels.
    #[must_use]
    pub fn practice_count(&self) -> usize {
        self.levels.iter().map(|l| l.practices.len()).sum()
    }

    /// Looks up a level by id.
    #[must_use]
    pub fn level(&self, id: &str) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }
}

/// One stage of the maturity progression.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Level identifier, `levelN`.
    pub id: String,

    /// Display name, `"Level N: <label>"`.
    pub name: String,

    /// CSS classes for the level card body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// CSS classes for the level card header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_color: Option<String>,

    /// One-line summary shown above the context paragraph.
    #[serde(default)]
    pub description: String,

    /// Who this level is for.
    #[serde(default)]
    pub context: String,

    /// What a team gains at this level.
    #[serde(default)]
    pub value: String,

    /// Practices owned by this level, in display order.
    #[serde(default)]
    pub practices: Vec<Practice>,
}

impl Level {
    /// Parses the numeric rank from the level id.
    ///
    /// # Errors
    ///
    /// Returns `DeriveError::MalformedLevelId` if the id is not `levelN`
    /// with `N` a positive integer. `index` is only used for the error.
    pub fn rank(&self, index: usize) -> Result<u32, DeriveError> {
        parse_rank(&self.id).ok_or_else(|| DeriveError::MalformedLevelId {
            index,
            id: self.id.clone(),
        })
    }

    /// Returns the display label, the part of the name after `": "`.
    ///
    /// # Errors
    ///
    /// Returns `DeriveError::MalformedLevelName` if the separator is missing
    /// or the label is blank.
    pub fn label(&self) -> Result<&str, DeriveError> {
        split_label(&self.name).ok_or_else(|| DeriveError::MalformedLevelName {
            id: self.id.clone(),
            name: self.name.clone(),
        })
    }
}

/// A single assessable capability within a level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Practice {
    /// Practice identifier, unique across the model.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Pass criteria, all of which must hold consistently.
    #[serde(default)]
    pub criteria: Vec<String>,

    /// AI acceleration metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai: Option<AiAcceleration>,
}

impl Practice {
    /// Returns `true` when the practice is marked as AI-accelerated.
    #[must_use]
    pub fn ai_enabled(&self) -> bool {
        self.ai.as_ref().is_some_and(|ai| ai.enabled)
    }
}

/// Where AI tooling can speed up a practice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AiAcceleration {
    /// Whether AI acceleration applies.
    #[serde(default)]
    pub enabled: bool,

    /// Concrete examples of AI use.
    #[serde(default)]
    pub examples: Vec<String>,
}

// ============================================================================
// Identifier Parsing
// ============================================================================

/// Parses `levelN` into `N`. Returns `None` unless `N` is a positive
/// integer written with ASCII digits only.
#[must_use]
pub fn parse_rank(id: &str) -> Option<u32> {
    let digits = id.strip_prefix(LEVEL_ID_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok().filter(|&n| n > 0)
}

/// Splits `"Level N: Label"` on the first `": "` and returns the remainder.
/// Returns `None` if the separator is absent or the remainder is blank.
#[must_use]
pub fn split_label(name: &str) -> Option<&str> {
    name.split_once(LEVEL_NAME_SEPARATOR)
        .map(|(_, label)| label)
        .filter(|label| !label.trim().is_empty())
}
