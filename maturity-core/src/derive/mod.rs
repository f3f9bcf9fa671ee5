//! Derivation engine.
//!
//! Computes the two secondary views from the primary stores:
//! - the flattened practice index behind `assessment.json`
//! - the merged guide view behind `guide.json`
//!
//! Both are pure functions of their inputs and are recomputed in full on
//! every run. [`derive_all`] produces both or neither.

pub mod guide_view;
pub mod identity;
pub mod practice_index;

pub use guide_view::{Alignment, MergedGuideLevel, MergedGuideView, derive_merged_guide_view};
pub use practice_index::{FlatPractice, FlatPracticeIndex, LevelGroup, derive_flat_practice_index};

use crate::error::DeriveError;
use crate::model::MaturityModel;
use crate::model::guide::GuideSource;

/// Both derived views of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedViews {
    /// Flattened practice index.
    pub assessment: FlatPracticeIndex,
    /// Merged guide view.
    pub guide: MergedGuideView,
}

/// Derive both views, or fail before producing either.
///
/// The level-count precondition is checked first so that a mismatch is
/// always reported as such, whatever else is wrong with the sources.
///
/// # Errors
///
/// Returns the first `DeriveError` found by the count check, the model
/// identity checks, or the overlay alignment.
pub fn derive_all(model: &MaturityModel, guide: &GuideSource) -> Result<DerivedViews, DeriveError> {
    guide_view::check_level_counts(model, guide)?;
    let assessment = derive_flat_practice_index(model)?;
    let guide = derive_merged_guide_view(model, guide)?;
    Ok(DerivedViews { assessment, guide })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::guide::{GuideLevelOverlay, StartHere};
    use crate::model::Level;

    fn stores(model_levels: usize, guide_levels: usize) -> (MaturityModel, GuideSource) {
        let model = MaturityModel {
            levels: (1..=model_levels)
                .map(|n| Level {
                    id: format!("level{n}"),
                    name: format!("Level {n}: L{n}"),
                    ..Level::default()
                })
                .collect(),
        };
        let guide = GuideSource {
            levels: (0..guide_levels)
                .map(|_| GuideLevelOverlay {
                    start_here: StartHere::default(),
                    ..GuideLevelOverlay::default()
                })
                .collect(),
        };
        (model, guide)
    }

    #[test]
    fn test_count_mismatch_precedes_identity_errors() {
        let (mut model, guide) = stores(3, 2);
        model.levels[0].id = "broken".to_string();
        let err = derive_all(&model, &guide).unwrap_err();
        assert_eq!(err, DeriveError::LevelCountMismatch { model: 3, guide: 2 });
    }

    #[test]
    fn test_identity_error_aborts_both_views() {
        let (mut model, guide) = stores(2, 2);
        model.levels[1].name = "Level Two".to_string();
        assert!(matches!(
            derive_all(&model, &guide),
            Err(DeriveError::MalformedLevelName { .. })
        ));
    }

    #[test]
    fn test_both_views_produced() {
        let (model, guide) = stores(2, 2);
        let views = derive_all(&model, &guide).unwrap();
        assert!(views.assessment.practices.is_empty());
        assert_eq!(views.guide.levels.len(), 2);
    }
}
