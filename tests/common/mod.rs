//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::ROOT_WITH_FILES);
//!     fixture.command().arg("validate").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Root file listing two team files, relative to the working directory.
    pub const ROOT_WITH_FILES: &str = r#"
groups:
  platform:
    alice: owner
users:
  admins: [root]
files:
  - teams/one.yaml
  - teams/two.yaml
"#;

    /// First listed file: sets two groups and one bot.
    pub const TEAM_ONE: &str = r#"
groups:
  team-x:
    bob: developer
    carol: guest
  team-y:
    dave: maintainer
projects:
  team-x/service:
    team-y: reporter
users:
  admins: [root]
  blocked: [mallory]
bots:
  - username: bot1
    email: bot1@example.com
"#;

    /// Second listed file: overrides `team-x` and adds a bot.
    pub const TEAM_TWO: &str = r#"
groups:
  team-x:
    erin: owner
bots:
  - username: bot2
    email: bot2@example.com
"#;

    /// A file with a misspelled top-level key.
    pub const UNKNOWN_KEY: &str = r#"
groups: {}
projetcs: {}
"#;

    /// A bot whose username does not follow `^bot[0-9]+$`.
    pub const BAD_BOT: &str = r#"
bots:
  - username: robot
    email: robot@example.com
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "groups: [unclosed";
}

/// A temporary directory holding configuration files.
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_config(configs::ROOT_WITH_FILES)
///     .with_file("teams/one.yaml", configs::TEAM_ONE)
///     .with_file("teams/two.yaml", configs::TEAM_TWO);
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Name of the root configuration file inside the fixture.
    pub const CONFIG: &'static str = "groupsync.yaml";

    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write the root `groupsync.yaml`.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(Self::CONFIG, content)
    }

    /// The three-file layout from [`configs::ROOT_WITH_FILES`].
    #[allow(dead_code)]
    pub fn with_team_files(self) -> Self {
        self.with_config(configs::ROOT_WITH_FILES)
            .with_file("teams/one.yaml", configs::TEAM_ONE)
            .with_file("teams/two.yaml", configs::TEAM_TWO)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Write `<path>.md5` for a file already in the fixture.
    #[allow(dead_code)]
    pub fn with_sidecar(self, path: &str) -> Self {
        groupsync::checksum::write_sidecar(&self.path().join(path))
            .expect("Failed to write checksum sidecar");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Get the path to the root config file.
    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        self.path().join(Self::CONFIG)
    }

    /// Create a command running in this fixture's directory.
    ///
    /// The `GROUPSYNC_*` and `RUST_LOG` variables are cleared so the host
    /// environment cannot leak into the test.
    #[allow(dead_code)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("groupsync");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("GROUPSYNC_CONFIG")
            .env_remove("GROUPSYNC_CHECKSUM")
            .env_remove("GROUPSYNC_BOT_PATTERN")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
