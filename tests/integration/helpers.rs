//! Shared helpers for integration tests

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// A `batcomputer` command isolated from the user's config and cache dirs.
pub fn batcomputer(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("batcomputer").expect("binary should build");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env("NO_COLOR", "1");
    cmd
}

/// Write `content` to `name` inside `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("fixture should be writable");
    path
}

/// A minimal profile document with a recognizable identity.
pub const TEST_PROFILE: &str = r#"
email = "oracle@clocktower.example"
source_url = "github.com/oracle"
response_time = "< 1 hour"

[identity]
name = "BARBARA GORDON"
alias = "Information Broker"
specialization = "Networks"
status = "ONLINE"

[availability]
open_to = ["Consulting"]
location = "Clock Tower"
notice = "Always"

[[skills]]
name = "Rust"
percent = 95

[[projects]]
title = "Oracle Net"
stack = "Rust"

[[experience]]
company = "BIRDS OF PREY"
role = "Coordinator"
duration = "Ongoing"
stack = "Everything"

[[channels]]
label = "EMAIL"
address = "oracle@clocktower.example"
"#;
