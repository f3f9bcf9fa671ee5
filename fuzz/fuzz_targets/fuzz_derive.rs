#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use maturity_core::derive::derive_all;
use maturity_core::model::MaturityModel;
use maturity_core::model::guide::GuideSource;
use maturity_core::source::{SourceFormat, parse_str};
use maturity_core::validate::validate_sources;

/// Model and guide documents are separated by a `---` line.
const SEPARATOR: &str = "\n---\n";

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Some((model_text, guide_text)) = text.split_once(SEPARATOR) else {
        return;
    };

    let path = Path::new("fuzz.yaml");
    let Ok(model) = parse_str::<MaturityModel>(model_text, path, SourceFormat::Yaml) else {
        return;
    };
    let Ok(guide) = parse_str::<GuideSource>(guide_text, path, SourceFormat::Yaml) else {
        return;
    };

    let _ = validate_sources(&model, &guide);

    if let Ok(views) = derive_all(&model, &guide) {
        let practices: usize = model.levels.iter().map(|l| l.practices.len()).sum();
        assert_eq!(views.assessment.practices.len(), practices);
        assert_eq!(views.guide.levels.len(), model.levels.len());
        let _ = serde_json::to_string_pretty(&views.guide);
    }
});
