//! Temporary workspaces holding order and network files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Two warehouses around hub L1 with the reference rates.
pub(super) const TWO_WAREHOUSE_NETWORK: &str = r#"{
  "hub": "L1",
  "warehouses": { "C1": ["A"], "C2": ["D"] },
  "distances": {
    "C1": { "L1": 10, "C2": 15 },
    "C2": { "L1": 8, "C1": 15 },
    "L1": { "C1": 10, "C2": 8 }
  },
  "rates": { "per_km": 2, "per_km_per_kg": 1, "weight_per_unit": 0.5 }
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
