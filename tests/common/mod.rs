#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use media_type_sync::constants::REGISTRIES;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Reference list matching the default fixture registries.
pub const FIXTURE_LIST: &str = "[\n    \"audio/ogg\",\n    \"text/csv\",\n    \"text/plain\"\n]\n";

pub struct TestEnv {
    _tmp: TempDir,
    pub state: PathBuf,
    pub registries: PathBuf,
    pub reference: PathBuf,
}

impl TestEnv {
    /// Fixture registries plus a reference list that matches them.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let state = tmp.path().join("state");
        fs::create_dir_all(&state).expect("create isolated state dir");

        let registries = tmp.path().join("registries");
        make_fixture_registries(&registries);

        let reference = tmp.path().join("media_types.json");
        fs::write(&reference, FIXTURE_LIST).expect("write reference");

        Self { _tmp: tmp, state, registries, reference }
    }

    /// Same environment, with a reference list missing `text/csv`.
    pub fn stale() -> Self {
        let env = Self::new();
        fs::write(&env.reference, "[\n    \"audio/ogg\",\n    \"text/plain\"\n]\n").expect("write reference");
        env
    }

    pub fn reference_text(&self) -> String {
        fs::read_to_string(&self.reference).expect("read reference")
    }

    fn isolate(&self, mut cmd: Command) -> Command {
        cmd.env("XDG_STATE_HOME", &self.state)
            .env("RUST_LOG", "warn")
            .env_remove("CI")
            .env_remove("MEDIA_TYPES_BASE_URL");
        cmd
    }

    pub fn download(&self) -> Command {
        self.isolate(cargo_bin_cmd!("download_media_type_files"))
    }

    pub fn media_types(&self) -> Command {
        self.isolate(cargo_bin_cmd!("media-types"))
    }

    /// `media-types <sub> --reference <ref> --source-dir <fixtures> --no-progress`
    pub fn sync_cmd(&self, sub: &str) -> Command {
        let mut cmd = self.media_types();
        cmd.arg(sub)
            .arg("--reference")
            .arg(&self.reference)
            .arg("--source-dir")
            .arg(&self.registries)
            .arg("--no-progress");
        cmd
    }
}

/// One CSV per registry; only `audio` and `text` have entries.
pub fn make_fixture_registries(dir: &Path) {
    fs::create_dir_all(dir).expect("create registries dir");
    for registry in REGISTRIES {
        fs::write(dir.join(format!("{}.csv", registry)), "Name,Template,Reference\n")
            .expect("write registry");
    }
    fs::write(
        dir.join("audio.csv"),
        "Name,Template,Reference\nogg,audio/ogg,\"[RFC5334][RFC7845]\"\n",
    )
    .expect("write audio registry");
    fs::write(
        dir.join("text.csv"),
        "Name,Template,Reference\n\
         plain,,\"[RFC2046][RFC3676][RFC5147]\"\n\
         csv,text/csv,[RFC4180][RFC7111]\n",
    )
    .expect("write text registry");
}
