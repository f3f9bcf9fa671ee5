//! Guide overlay schema types
//!
//! `guide.yaml` carries the narrative guidance for each level. Records are
//! strictly typed: an unknown field is a parse error rather than content
//! that silently flows into the rendered guide.

use serde::{Deserialize, Serialize};

/// Root of the guide overlay store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuideSource {
    /// One record per model level.
    pub levels: Vec<GuideLevelOverlay>,
}

impl GuideSource {
    /// Number of records that carry an explicit level id.
    #[must_use]
    pub fn keyed_count(&self) -> usize {
        self.levels.iter().filter(|l| l.id.is_some()).count()
    }
}

/// Narrative guidance for one level.
///
/// `id` keys the record to a model level. `name`, `color` and
/// `headerColor` override the level's own display attributes when set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GuideLevelOverlay {
    /// Level this record attaches to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Replacement display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Replacement card body classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Replacement card header classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_color: Option<String>,

    /// Typical time spent at the level (e.g. "6-12 months").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,

    /// Signals that a team is ready for this level.
    pub ready_when: Vec<String>,

    /// Structured first steps.
    pub start_here: StartHere,

    /// Low-effort changes that build momentum.
    pub quick_wins: Vec<String>,

    /// Common mistakes.
    pub pitfalls: Vec<String>,

    /// What success looks like.
    pub success_looks: Vec<String>,

    /// Criteria for moving to the next level.
    pub next_level: Vec<String>,
}

/// The "start here" block of a guide level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartHere {
    /// Block heading.
    pub title: String,

    /// Practices to start with, each with concrete steps.
    #[serde(default)]
    pub items: Vec<StartHereItem>,
}

/// One entry in a [`StartHere`] block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartHereItem {
    /// Practice or activity name.
    pub name: String,

    /// Ordered steps.
    #[serde(default)]
    pub steps: Vec<String>,
}
