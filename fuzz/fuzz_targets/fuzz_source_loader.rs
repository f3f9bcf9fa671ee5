#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use maturity_core::convert::{json_to_yaml_text, yaml_text_to_json};
use maturity_core::model::MaturityModel;
use maturity_core::model::guide::GuideSource;
use maturity_core::source::{SourceFormat, parse_str};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let path = Path::new("fuzz.yaml");

    // Typed loading must reject bad input with an error, never a panic
    let _ = parse_str::<MaturityModel>(text, path, SourceFormat::Yaml);
    let _ = parse_str::<GuideSource>(text, path, SourceFormat::Yaml);
    let _ = parse_str::<MaturityModel>(text, path, SourceFormat::Json);

    // Untyped conversion must survive a YAML round trip
    if let Ok(json) = yaml_text_to_json(text, path) {
        if let Ok(yaml) = json_to_yaml_text(&json, path) {
            let _ = yaml_text_to_json(&yaml, path);
        }
    }
});
