#![allow(dead_code)]

use assert_cmd::cargo_bin;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

/// A scratch directory holding the session flag for one test.
pub struct Session {
    dir: TempDir,
}

impl Session {
    pub fn signed_out() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn signed_in() -> Self {
        let session = Self::signed_out();
        std::fs::write(session.path(), "authenticated").unwrap();
        session
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("session")
    }

    /// The binary, isolated from the caller's environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(cargo_bin!("loan-o-meter"));
        cmd.env("LOAN_O_METER_SESSION_PATH", self.path())
            .env_remove("LOAN_O_METER_BOUNDS")
            .env_remove("LOAN_O_METER_LOG_LEVEL")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
