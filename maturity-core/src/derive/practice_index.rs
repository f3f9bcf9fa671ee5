//! Flattened practice index (`assessment.json`).

use serde::{Deserialize, Serialize};

use crate::derive::identity;
use crate::error::DeriveError;
use crate::model::MaturityModel;

/// Every practice in the model, flattened in (level, practice) order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlatPracticeIndex {
    /// Practices in pre-order.
    pub practices: Vec<FlatPractice>,
}

impl FlatPracticeIndex {
    /// Distinct level ranks in first-appearance order, each with its label
    /// and practice count.
    #[must_use]
    pub fn level_groups(&self) -> Vec<LevelGroup<'_>> {
        let mut groups: Vec<LevelGroup<'_>> = Vec::new();
        for practice in &self.practices {
            match groups.iter_mut().find(|g| g.level == practice.level) {
                Some(group) => group.practices.push(practice),
                None => groups.push(LevelGroup {
                    level: practice.level,
                    level_name: &practice.level_name,
                    practices: vec![practice],
                }),
            }
        }
        groups
    }
}

/// One practice with the level it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatPractice {
    /// Practice id.
    pub id: String,
    /// Practice name.
    pub name: String,
    /// Level rank, parsed from the level id.
    pub level: u32,
    /// Level label without the `"Level N: "` prefix.
    pub level_name: String,
}

/// Practices sharing one level rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGroup<'a> {
    /// Level rank.
    pub level: u32,
    /// Level label.
    pub level_name: &'a str,
    /// Practices at this rank, in index order.
    pub practices: Vec<&'a FlatPractice>,
}

/// Flatten the model into a practice index.
///
/// For each level in order, and each practice within it in order, emits
/// one record carrying the level's numeric rank and display label. No
/// sorting, filtering or deduplication happens.
///
/// # Errors
///
/// Returns `DeriveError` if any level id or name is malformed, or if
/// level or practice ids repeat.
pub fn derive_flat_practice_index(model: &MaturityModel) -> Result<FlatPracticeIndex, DeriveError> {
    identity::ensure_model(model)?;

    let mut practices = Vec::with_capacity(model.practice_count());
    for (index, level) in model.levels.iter().enumerate() {
        let rank = level.rank(index)?;
        let label = level.label()?;

        practices.extend(level.practices.iter().map(|practice| FlatPractice {
            id: practice.id.clone(),
            name: practice.name.clone(),
            level: rank,
            level_name: label.to_string(),
        }));
    }

    Ok(FlatPracticeIndex { practices })
}
