mod common;

use common::{Site, stderr};

const EXPECTED_ASSESSMENT: &str = r#"{
  "practices": [
    {
      "id": "discovery-rhythm",
      "name": "Regular Discovery Rhythm",
      "level": 1,
      "levelName": "Foundational Practices"
    },
    {
      "id": "outcome-roadmap",
      "name": "Outcome-Based Roadmap",
      "level": 1,
      "levelName": "Foundational Practices"
    },
    {
      "id": "experimentation",
      "name": "Structured Experimentation",
      "level": 2,
      "levelName": "Scaling Practices"
    },
    {
      "id": "portfolio-bets",
      "name": "Portfolio Bets",
      "level": 3,
      "levelName": "Strategic Practices"
    },
    {
      "id": "ai-synthesis",
      "name": "AI-Assisted Synthesis",
      "level": 3,
      "levelName": "Strategic Practices"
    }
  ]
}
"#;

// ============================================================================
// build
// ============================================================================

#[test]
fn build_writes_every_output() {
    let site = Site::standard();
    let output = site.run(&["build"]);
    assert!(output.status.success(), "build failed: {}", stderr(&output));

    for name in ["model.json", "guide-source.json", "assessment.json", "guide.json"] {
        assert!(site.build_file(name).exists(), "missing build/{name}");
    }
    for name in ["model.html", "assessment.html", "guide.html"] {
        assert!(site.public_file(name).exists(), "missing public/{name}");
    }
}

#[test]
fn build_assessment_is_exact() {
    let site = Site::standard();
    let output = site.run(&["build"]);
    assert!(output.status.success(), "build failed: {}", stderr(&output));
    assert_eq!(site.read_build("assessment.json"), EXPECTED_ASSESSMENT);
}

#[test]
fn build_guide_merges_overlay() {
    let site = Site::standard();
    let output = site.run(&["build"]);
    assert!(output.status.success(), "build failed: {}", stderr(&output));

    let guide: serde_json::Value = serde_json::from_str(&site.read_build("guide.json")).unwrap();
    let levels = guide["levels"].as_array().unwrap();
    assert_eq!(levels.len(), 3);

    assert_eq!(levels[0]["id"], "level1");
    assert_eq!(levels[0]["name"], "Level 1: Foundational Practices");
    assert_eq!(levels[0]["color"], "bg-amber-50 border-amber-200");
    assert_eq!(levels[0]["headerColor"], "bg-amber-100");
    assert_eq!(levels[0]["timeline"], "3-6 months");
    assert_eq!(
        levels[0]["startHere"]["items"][0]["steps"][1],
        "Write up what you heard"
    );

    assert!(levels[1].get("timeline").is_none());
    assert_eq!(levels[2]["name"], "Level 3: Strategic Leadership");
    assert_eq!(levels[2]["color"], "bg-purple-50 border-purple-200");
}

#[test]
fn build_model_json_keeps_source_order() {
    let site = Site::standard();
    let output = site.run(&["build"]);
    assert!(output.status.success(), "build failed: {}", stderr(&output));

    let model = site.read_build("model.json");
    assert!(model.starts_with("{\n  \"levels\": [\n    {\n      \"id\": \"level1\",\n      \"name\""));
}

#[test]
fn build_pages_render_content() {
    let site = Site::standard();
    let output = site.run(&["build"]);
    assert!(output.status.success(), "build failed: {}", stderr(&output));

    let model = site.read_public("model.html");
    assert!(model.contains("Regular Discovery Rhythm"));
    assert!(model.contains("Summarize interview transcripts into themes"));

    let assessment = site.read_public("assessment.html");
    for rank in 1..=3 {
        assert!(assessment.contains(&format!("id=\"level{rank}-progress\"")), "rank {rank}");
    }
    assert!(!assessment.contains("level4-progress"));

    let guide = site.read_public("guide.html");
    assert!(guide.contains("Level 3: Strategic Leadership"));
    assert!(guide.contains("Share one customer quote in every planning meeting"));
}

#[test]
fn build_is_deterministic() {
    let site = Site::standard();
    assert!(site.run(&["build"]).status.success());
    let first_guide = site.read_build("guide.json");
    let first_page = site.read_public("guide.html");

    assert!(site.run(&["build"]).status.success());
    assert_eq!(site.read_build("guide.json"), first_guide);
    assert_eq!(site.read_public("guide.html"), first_page);
}

#[test]
fn build_prints_summary_unless_quiet() {
    let site = Site::standard();
    let output = site.run(&["build"]);
    let err = stderr(&output);
    assert!(err.contains("Build complete"), "{err}");
    assert!(err.contains("guide.html"), "{err}");

    let quiet = site.run(&["--quiet", "build"]);
    assert!(quiet.status.success());
    assert!(stderr(&quiet).is_empty(), "{}", stderr(&quiet));
}

// ============================================================================
// failure contract
// ============================================================================

#[test]
fn level_count_mismatch_stops_before_derived_outputs() {
    let site = Site::new("model.yaml", "mismatched_guide.yaml");
    let output = site.run(&["build"]);

    assert_eq!(output.status.code(), Some(4), "stderr: {}", stderr(&output));
    let err = stderr(&output);
    assert!(err.contains('3') && err.contains('2'), "{err}");
    assert!(err.contains("level count mismatch"), "{err}");

    assert!(site.build_file("model.json").exists());
    assert!(!site.build_file("assessment.json").exists());
    assert!(!site.build_file("guide.json").exists());
    assert!(!site.public_file("model.html").exists());
}

#[test]
fn missing_source_exits_with_source_error() {
    let site = Site::standard();
    std::fs::remove_file(site.path().join("src/guide.yaml")).unwrap();

    let output = site.run(&["build"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("guide.yaml"), "{}", stderr(&output));
}

#[test]
fn unknown_overlay_field_is_rejected() {
    let site = Site::new("model.yaml", "unknown_field_guide.yaml");
    let output = site.run(&["build"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("pitfals"), "{}", stderr(&output));
}

#[test]
fn keyed_guide_aligns_by_id() {
    let site = Site::new("model.yaml", "keyed_guide.yaml");
    let output = site.run(&["build"]);
    assert!(output.status.success(), "build failed: {}", stderr(&output));

    let guide: serde_json::Value = serde_json::from_str(&site.read_build("guide.json")).unwrap();
    assert_eq!(guide["levels"][0]["id"], "level1");
    assert_eq!(guide["levels"][0]["readyWhen"][0], "The team has a product manager");
    assert_eq!(guide["levels"][2]["startHere"]["title"], "Shaping the portfolio");
}

#[test]
fn misspelled_overlay_id_suggests_level() {
    let site = Site::new("model.yaml", "typo_guide.yaml");
    let output = site.run(&["build"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("did you mean \"level2\""), "{}", stderr(&output));
}

// ============================================================================
// individual steps
// ============================================================================

#[test]
fn steps_run_separately() {
    let site = Site::standard();

    let convert = site.run(&["convert"]);
    assert!(convert.status.success(), "convert: {}", stderr(&convert));
    assert!(site.build_file("guide-source.json").exists());
    assert!(!site.build_file("assessment.json").exists());

    let derive = site.run(&["derive"]);
    assert!(derive.status.success(), "derive: {}", stderr(&derive));
    assert_eq!(site.read_build("assessment.json"), EXPECTED_ASSESSMENT);

    let render = site.run(&["render"]);
    assert!(render.status.success(), "render: {}", stderr(&render));
    assert!(site.public_file("assessment.html").exists());
}

#[test]
fn derive_without_convert_fails() {
    let site = Site::standard();
    let output = site.run(&["derive"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("model.json"), "{}", stderr(&output));
}

#[test]
fn render_without_build_dir_is_io_error() {
    let site = Site::standard();
    let output = site.run(&["render"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("build directory not found"), "{}", stderr(&output));
}

#[test]
fn render_reports_each_failed_page() {
    let site = Site::standard();
    assert!(site.run(&["build"]).status.success());
    std::fs::write(site.build_file("guide.json"), r#"{"practices": []}"#).unwrap();
    std::fs::remove_file(site.public_file("guide.html")).unwrap();

    let output = site.run(&["render"]);
    assert_eq!(output.status.code(), Some(5));
    let err = stderr(&output);
    assert!(err.contains("Error generating guide.html"), "{err}");
    assert!(err.contains("1 of 3 page(s) failed"), "{err}");
    assert!(!site.public_file("guide.html").exists());
    assert!(site.public_file("model.html").exists());
}

#[test]
fn directory_flags_and_env_override_layout() {
    let site = Site::standard();
    std::fs::rename(site.path().join("src"), site.path().join("content")).unwrap();

    let output = common::command(&["build", "--source-dir", "content"])
        .current_dir(site.path())
        .env("MATURITY_BUILD_DIR", "out/data")
        .env("MATURITY_PUBLIC_DIR", "out/site")
        .output()
        .unwrap();
    assert!(output.status.success(), "build failed: {}", stderr(&output));
    assert!(site.path().join("out/data/assessment.json").exists());
    assert!(site.path().join("out/site/model.html").exists());
}
