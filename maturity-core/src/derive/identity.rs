//! Identity checks over the model store.
//!
//! Level ids must be well-formed and unique, level names must carry a
//! label, and practice ids must be unique across the whole model. Checks
//! accumulate so `validate` can report everything at once; derivation
//! stops on the first.

use std::collections::HashMap;

use crate::error::DeriveError;
use crate::model::MaturityModel;

/// Collect every identity error in the model, in document order.
#[must_use]
pub fn check_model(model: &MaturityModel) -> Vec<DeriveError> {
    let mut errors = Vec::new();
    let mut level_seen: HashMap<&str, usize> = HashMap::new();
    let mut practice_seen: HashMap<&str, &str> = HashMap::new();

    for (index, level) in model.levels.iter().enumerate() {
        if let Err(e) = level.rank(index) {
            errors.push(e);
        }
        if let Err(e) = level.label() {
            errors.push(e);
        }

        if let Some(&first) = level_seen.get(level.id.as_str()) {
            errors.push(DeriveError::DuplicateLevelId {
                id: level.id.clone(),
                index,
                first,
            });
        } else {
            level_seen.insert(&level.id, index);
        }

        for practice in &level.practices {
            if let Some(first_level) = practice_seen.get(practice.id.as_str()) {
                errors.push(DeriveError::DuplicatePracticeId {
                    id: practice.id.clone(),
                    level: level.id.clone(),
                    first_level: (*first_level).to_string(),
                });
            } else {
                practice_seen.insert(&practice.id, &level.id);
            }
        }
    }

    errors
}

/// Fail on the first identity error in the model.
///
/// # Errors
///
/// Returns the first error [`check_model`] would report.
pub fn ensure_model(model: &MaturityModel) -> Result<(), DeriveError> {
    check_model(model).into_iter().next().map_or(Ok(()), Err)
}
