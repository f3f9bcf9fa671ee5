//! Shared integration-test harness: runs the `maturity` binary against a
//! temporary site directory seeded from fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Environment variables that would leak host configuration into a run.
const SCRUBBED_ENV: [&str; 7] = [
    "MATURITY_SOURCE_DIR",
    "MATURITY_BUILD_DIR",
    "MATURITY_PUBLIC_DIR",
    "MATURITY_LOG_LEVEL",
    "MATURITY_LOG_FORMAT",
    "MATURITY_COLOR",
    "MATURITY_MAX_SOURCE_BYTES",
];

/// Path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// A `maturity` command with a clean environment.
pub fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_maturity"));
    cmd.args(args).env("NO_COLOR", "1");
    for var in SCRUBBED_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// Run `maturity` with `args` and wait for it.
pub fn spawn_command(args: &[&str]) -> Output {
    command(args).output().expect("failed to run maturity")
}

/// Lossy stdout.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A temporary site with `src/model.yaml` and `src/guide.yaml` copied from
/// fixtures.
pub struct Site {
    dir: TempDir,
}

impl Site {
    /// Seed a site from the named fixtures.
    pub fn new(model_fixture: &str, guide_fixture: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let src = dir.path().join("src");
        fs::create_dir_all(&src).expect("failed to create src dir");
        fs::copy(fixture_path(model_fixture), src.join("model.yaml")).expect("copy model");
        fs::copy(fixture_path(guide_fixture), src.join("guide.yaml")).expect("copy guide");
        Self { dir }
    }

    /// The default fixture pair.
    pub fn standard() -> Self {
        Self::new("model.yaml", "guide.yaml")
    }

    /// Site root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path under `build/`.
    pub fn build_file(&self, name: &str) -> PathBuf {
        self.path().join("build").join(name)
    }

    /// Path under `public/`.
    pub fn public_file(&self, name: &str) -> PathBuf {
        self.path().join("public").join(name)
    }

    /// Read a file under `build/`.
    pub fn read_build(&self, name: &str) -> String {
        fs::read_to_string(self.build_file(name))
            .unwrap_or_else(|e| panic!("failed to read build/{name}: {e}"))
    }

    /// Read a file under `public/`.
    pub fn read_public(&self, name: &str) -> String {
        fs::read_to_string(self.public_file(name))
            .unwrap_or_else(|e| panic!("failed to read public/{name}: {e}"))
    }

    /// Run `maturity` with the site root as working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        command(args)
            .current_dir(self.path())
            .output()
            .expect("failed to run maturity")
    }
}
