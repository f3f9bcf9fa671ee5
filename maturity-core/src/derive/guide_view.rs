//! Merged guide view (`guide.json`).
//!
//! Each model level contributes `{id, name, color, headerColor}`; the guide
//! record attached to it contributes the narrative fields and may override
//! any of the four. Records attach by `id` when every record has one, and
//! by position when none do.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DeriveError;
use crate::model::guide::{GuideLevelOverlay, GuideSource, StartHere};
use crate::model::{Level, MaturityModel};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// One entry per model level, in model order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MergedGuideView {
    /// Merged levels.
    pub levels: Vec<MergedGuideLevel>,
}

/// A level's display attributes merged with its guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedGuideLevel {
    /// Level id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Card body classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Card header classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_color: Option<String>,
    /// Typical time at this level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    /// Readiness signals.
    pub ready_when: Vec<String>,
    /// First steps.
    pub start_here: StartHere,
    /// Quick wins.
    pub quick_wins: Vec<String>,
    /// Pitfalls.
    pub pitfalls: Vec<String>,
    /// Success indicators.
    pub success_looks: Vec<String>,
    /// Next-level criteria.
    pub next_level: Vec<String>,
}

impl MergedGuideLevel {
    /// Merge a level with its guide record. Fields set on the record win.
    #[must_use]
    pub fn merge(level: &Level, overlay: &GuideLevelOverlay) -> Self {
        Self {
            id: overlay.id.clone().unwrap_or_else(|| level.id.clone()),
            name: overlay.name.clone().unwrap_or_else(|| level.name.clone()),
            color: overlay.color.clone().or_else(|| level.color.clone()),
            header_color: overlay
                .header_color
                .clone()
                .or_else(|| level.header_color.clone()),
            timeline: overlay.timeline.clone(),
            ready_when: overlay.ready_when.clone(),
            start_here: overlay.start_here.clone(),
            quick_wins: overlay.quick_wins.clone(),
            pitfalls: overlay.pitfalls.clone(),
            success_looks: overlay.success_looks.clone(),
            next_level: overlay.next_level.clone(),
        }
    }
}

/// How guide records are matched to model levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Every record names its level by `id`.
    Keyed,
    /// No record carries an `id`; index N attaches to level N.
    Positional,
}

/// Fail unless both stores have the same number of levels.
///
/// # Errors
///
/// Returns `DeriveError::LevelCountMismatch` naming both counts.
pub fn check_level_counts(
    model: &MaturityModel,
    guide: &GuideSource,
) -> Result<(), DeriveError> {
    if model.levels.len() == guide.levels.len() {
        Ok(())
    } else {
        Err(DeriveError::LevelCountMismatch {
            model: model.levels.len(),
            guide: guide.levels.len(),
        })
    }
}

/// Decide how guide records attach to levels.
///
/// # Errors
///
/// Returns `DeriveError::MixedOverlayKeys` if only some records carry an id.
pub fn alignment(guide: &GuideSource) -> Result<Alignment, DeriveError> {
    let keyed = guide.keyed_count();
    let total = guide.levels.len();
    if total > 0 && keyed == total {
        Ok(Alignment::Keyed)
    } else if keyed == 0 {
        Ok(Alignment::Positional)
    } else {
        Err(DeriveError::MixedOverlayKeys { keyed, total })
    }
}

/// Collect every alignment error between the two stores.
///
/// A level-count mismatch is reported alone: nothing else about the
/// pairing is meaningful once the counts differ.
#[must_use]
pub fn check_overlay(model: &MaturityModel, guide: &GuideSource) -> Vec<DeriveError> {
    if let Err(e) = check_level_counts(model, guide) {
        return vec![e];
    }
    match alignment(guide) {
        Err(e) => vec![e],
        Ok(Alignment::Positional) => Vec::new(),
        Ok(Alignment::Keyed) => keyed_overlays(model, guide).1,
    }
}

/// Pair each model level with its guide record.
///
/// # Errors
///
/// Returns the first error [`check_overlay`] would report.
pub fn pair_overlays<'a>(
    model: &'a MaturityModel,
    guide: &'a GuideSource,
) -> Result<Vec<(&'a Level, &'a GuideLevelOverlay)>, DeriveError> {
    check_level_counts(model, guide)?;
    match alignment(guide)? {
        Alignment::Positional => Ok(model.levels.iter().zip(guide.levels.iter()).collect()),
        Alignment::Keyed => {
            let (by_id, errors) = keyed_overlays(model, guide);
            if let Some(e) = errors.into_iter().next() {
                return Err(e);
            }
            model
                .levels
                .iter()
                .map(|level| {
                    by_id
                        .get(level.id.as_str())
                        .map(|overlay| (level, *overlay))
                        .ok_or_else(|| DeriveError::MissingOverlayLevel {
                            id: level.id.clone(),
                        })
                })
                .collect()
        }
    }
}

/// Merge the model with the guide overlay.
///
/// # Errors
///
/// Returns `DeriveError::LevelCountMismatch` when the stores disagree on
/// level count, and the keyed-alignment errors when records name unknown,
/// repeated or missing levels.
pub fn derive_merged_guide_view(
    model: &MaturityModel,
    guide: &GuideSource,
) -> Result<MergedGuideView, DeriveError> {
    let levels = pair_overlays(model, guide)?
        .into_iter()
        .map(|(level, overlay)| MergedGuideLevel::merge(level, overlay))
        .collect();
    Ok(MergedGuideView { levels })
}

/// Index keyed guide records by id, validating them against the model.
fn keyed_overlays<'a>(
    model: &MaturityModel,
    guide: &'a GuideSource,
) -> (IndexMap<&'a str, &'a GuideLevelOverlay>, Vec<DeriveError>) {
    let mut errors = Vec::new();
    let mut by_id: IndexMap<&str, &GuideLevelOverlay> = IndexMap::new();

    for overlay in &guide.levels {
        let Some(id) = overlay.id.as_deref() else {
            continue;
        };
        if model.level(id).is_none() {
            errors.push(DeriveError::UnknownOverlayLevel {
                id: id.to_string(),
                suggestion: suggest_level_id(model, id),
            });
        } else if by_id.insert(id, overlay).is_some() {
            errors.push(DeriveError::DuplicateOverlayLevel { id: id.to_string() });
        }
    }

    for level in &model.levels {
        if !by_id.contains_key(level.id.as_str()) {
            errors.push(DeriveError::MissingOverlayLevel {
                id: level.id.clone(),
            });
        }
    }

    (by_id, errors)
}

/// Closest model level id to an unknown overlay id.
fn suggest_level_id(model: &MaturityModel, id: &str) -> Option<String> {
    model
        .levels
        .iter()
        .map(|level| (strsim::jaro_winkler(id, &level.id), &level.id))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u32) -> Level {
        Level {
            id: format!("level{n}"),
            name: format!("Level {n}: Label {n}"),
            color: Some(format!("bg-{n}")),
            header_color: Some(format!("hd-{n}")),
            ..Level::default()
        }
    }

    fn overlay(id: Option<&str>, marker: &str) -> GuideLevelOverlay {
        GuideLevelOverlay {
            id: id.map(str::to_string),
            ready_when: vec![marker.to_string()],
            start_here: StartHere {
                title: format!("Start {marker}"),
                items: vec![],
            },
            ..GuideLevelOverlay::default()
        }
    }

    fn model(n: u32) -> MaturityModel {
        MaturityModel {
            levels: (1..=n).map(level).collect(),
        }
    }

    #[test]
    fn test_count_mismatch_reports_both_counts() {
        let guide = GuideSource {
            levels: vec![overlay(None, "a"), overlay(None, "b")],
        };
        let err = derive_merged_guide_view(&model(3), &guide).unwrap_err();
        assert_eq!(err, DeriveError::LevelCountMismatch { model: 3, guide: 2 });
        let msg = err.to_string();
        assert!(msg.contains('3') && msg.contains('2'), "{msg}");
    }

    #[test]
    fn test_positional_merge() {
        let guide = GuideSource {
            levels: vec![overlay(None, "first"), overlay(None, "second")],
        };
        let view = derive_merged_guide_view(&model(2), &guide).unwrap();
        assert_eq!(view.levels[0].id, "level1");
        assert_eq!(view.levels[0].ready_when, vec!["first"]);
        assert_eq!(view.levels[1].id, "level2");
        assert_eq!(view.levels[1].color.as_deref(), Some("bg-2"));
    }

    #[test]
    fn test_keyed_merge_follows_ids_not_positions() {
        let guide = GuideSource {
            levels: vec![
                overlay(Some("level2"), "for-two"),
                overlay(Some("level1"), "for-one"),
            ],
        };
        let view = derive_merged_guide_view(&model(2), &guide).unwrap();
        assert_eq!(view.levels[0].id, "level1");
        assert_eq!(view.levels[0].ready_when, vec!["for-one"]);
        assert_eq!(view.levels[1].ready_when, vec!["for-two"]);
    }

    #[test]
    fn test_overlay_fields_take_precedence() {
        let mut o = overlay(None, "x");
        o.name = Some("Level 1: Renamed".to_string());
        o.color = Some("bg-override".to_string());
        let guide = GuideSource { levels: vec![o] };
        let view = derive_merged_guide_view(&model(1), &guide).unwrap();
        assert_eq!(view.levels[0].name, "Level 1: Renamed");
        assert_eq!(view.levels[0].color.as_deref(), Some("bg-override"));
        assert_eq!(view.levels[0].header_color.as_deref(), Some("hd-1"));
    }

    #[test]
    fn test_mixed_keys_rejected() {
        let guide = GuideSource {
            levels: vec![overlay(Some("level1"), "a"), overlay(None, "b")],
        };
        assert_eq!(
            derive_merged_guide_view(&model(2), &guide).unwrap_err(),
            DeriveError::MixedOverlayKeys { keyed: 1, total: 2 }
        );
    }

    #[test]
    fn test_unknown_key_with_suggestion() {
        let guide = GuideSource {
            levels: vec![overlay(Some("level1"), "a"), overlay(Some("levle2"), "b")],
        };
        let errors = check_overlay(&model(2), &guide);
        assert_eq!(
            errors,
            vec![
                DeriveError::UnknownOverlayLevel {
                    id: "levle2".to_string(),
                    suggestion: Some("level2".to_string()),
                },
                DeriveError::MissingOverlayLevel {
                    id: "level2".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let guide = GuideSource {
            levels: vec![overlay(Some("level1"), "a"), overlay(Some("level1"), "b")],
        };
        let errors = check_overlay(&model(2), &guide);
        assert!(errors.contains(&DeriveError::DuplicateOverlayLevel {
            id: "level1".to_string()
        }));
        assert!(errors.contains(&DeriveError::MissingOverlayLevel {
            id: "level2".to_string()
        }));
    }

    #[test]
    fn test_empty_stores_merge_to_empty_view() {
        let view =
            derive_merged_guide_view(&MaturityModel::default(), &GuideSource::default()).unwrap();
        assert!(view.levels.is_empty());
    }

    #[test]
    fn test_absent_colors_are_omitted() {
        let mut m = model(1);
        m.levels[0].color = None;
        m.levels[0].header_color = None;
        let guide = GuideSource {
            levels: vec![overlay(None, "a")],
        };
        let json =
            serde_json::to_value(derive_merged_guide_view(&m, &guide).unwrap()).unwrap();
        let level = json["levels"][0].as_object().unwrap();
        assert!(!level.contains_key("color"));
        assert!(!level.contains_key("headerColor"));
        assert!(!level.contains_key("timeline"));
    }
}
