//! Shared testing utilities for eniscope CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Inventory with two interfaces on one instance, one detached interface,
/// and an empty reservation.
pub const SNAPSHOT: &str = r#"{
    "NetworkInterfaces": [
        {"NetworkInterfaceId": "eni-00000001", "Attachment": {"InstanceId": "i-00000001", "DeviceIndex": 0}},
        {"NetworkInterfaceId": "eni-00000002"},
        {"NetworkInterfaceId": "eni-00000003", "Attachment": {"InstanceId": "i-00000001", "DeviceIndex": 1}}
    ],
    "Reservations": [
        {"ReservationId": "r-1", "Instances": [
            {"InstanceId": "i-00000001", "InstanceType": "t3.micro", "State": {"Code": 16, "Name": "running"}}
        ]},
        {"ReservationId": "r-2", "Instances": []}
    ]
}"#;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `eniscope` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("eniscope").expect("Failed to locate eniscope binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("ENISCOPE_CONFIG")
            .env_remove("ENISCOPE_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `content` as a snapshot file in the work directory and return its path.
    pub fn write_snapshot(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write snapshot");
        path
    }

    /// Write `./eniscope.toml` in the work directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("eniscope.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Write the default snapshot and a config file pointing at it.
    pub fn with_snapshot_config(&self) {
        self.write_snapshot("inventory.json", SNAPSHOT);
        self.write_config("[inventory]\nsnapshot = \"inventory.json\"\n");
    }
}
