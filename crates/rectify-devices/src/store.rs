//! Device parameter records and the in-memory device store.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diode::DiodeParams;
use crate::error::{Error, Result};
use crate::kind::DeviceKind;

/// A named device parameter document.
///
/// The `parameters` payload is kept as raw JSON so records for device kinds
/// this build does not model can still be stored and listed. Typed access
/// goes through [`DeviceRecord::diode_params`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Device name, unique within a store (e.g. "1N4148").
    pub name: String,
    /// Device kind tag.
    pub kind: DeviceKind,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Extracted model parameters as stored.
    pub parameters: serde_json::Value,
}

impl DeviceRecord {
    /// Build a record from typed diode parameters.
    pub fn from_diode(name: impl Into<String>, params: &DiodeParams) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            kind: DeviceKind::Diode,
            description: String::new(),
            parameters: serde_json::to_value(params)?,
        })
    }

    /// Load a record from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let record: DeviceRecord = serde_json::from_str(&content)?;
        Ok(record)
    }

    /// Write the record to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Decode the parameter payload as diode parameters.
    ///
    /// Fails with [`Error::KindMismatch`] when the record is not a diode,
    /// and with [`Error::InvalidParameter`] when the stored values violate
    /// the model invariants.
    pub fn diode_params(&self) -> Result<DiodeParams> {
        if self.kind != DeviceKind::Diode {
            return Err(Error::KindMismatch {
                expected: DeviceKind::Diode.to_string(),
                actual: self.kind.to_string(),
            });
        }
        let params: DiodeParams = serde_json::from_value(self.parameters.clone())?;
        params.validate()?;
        Ok(params)
    }
}

/// In-memory store of device records, keyed by name.
#[derive(Debug, Default)]
pub struct DeviceStore {
    records: HashMap<String, DeviceRecord>,
}

impl DeviceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same name.
    ///
    /// Returns `true` when a record was replaced.
    pub fn insert(&mut self, record: DeviceRecord) -> bool {
        self.records.insert(record.name.clone(), record).is_some()
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&DeviceRecord> {
        self.records.get(name)
    }

    /// Device names in the store, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load a single record file into the store.
    ///
    /// Returns the name of the loaded record.
    pub fn load_file(&mut self, path: &Path) -> Result<String> {
        let record = DeviceRecord::load(path)?;
        let name = record.name.clone();
        self.insert(record);
        Ok(name)
    }

    /// Load every `*_params.json` record from a directory.
    ///
    /// Files that fail to parse are skipped with a warning so one bad
    /// document does not block the rest. Returns the number of records
    /// loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut loaded = 0;
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let is_record = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with("_params.json"));
            if !is_record {
                continue;
            }
            match self.load_file(&path) {
                Ok(_) => loaded += 1,
                Err(e) => {
                    log::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
        log::info!("loaded {} device record(s) from {}", loaded, dir.display());
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn diode_record(name: &str) -> DeviceRecord {
        DeviceRecord {
            name: name.to_string(),
            kind: DeviceKind::Diode,
            description: String::new(),
            parameters: json!({
                "IS": 7.62767e-9,
                "RS": 0.0341512,
                "N": 1.80803,
                "BV": 1000.0,
                "IBV": 5e-8,
            }),
        }
    }

    #[test]
    fn test_diode_params_from_record() {
        let record = diode_record("1N4007");
        let params = record.diode_params().unwrap();
        assert_eq!(params.is, 7.62767e-9);
        assert_eq!(params.n, 1.80803);
        // Unstated fields come from the model defaults
        assert_eq!(params.m, 0.5);
    }

    #[test]
    fn test_diode_params_rejects_other_kind() {
        let mut record = diode_record("q1");
        record.kind = DeviceKind::Other("bjt".to_string());
        let err = record.diode_params().unwrap_err();
        assert!(matches!(err, Error::KindMismatch { .. }));
    }

    #[test]
    fn test_diode_params_rejects_invalid_values() {
        let mut record = diode_record("bad");
        record.parameters = json!({ "IS": -1.0 });
        let err = record.diode_params().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "IS", .. }));
    }

    #[test]
    fn test_insert_replaces_by_name() {
        let mut store = DeviceStore::new();
        assert!(!store.insert(diode_record("d1")));

        let mut updated = diode_record("d1");
        updated.description = "refit".to_string();
        assert!(store.insert(updated), "second insert must report a replace");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("d1").unwrap().description, "refit");
    }

    #[test]
    fn test_names_sorted() {
        let mut store = DeviceStore::new();
        store.insert(diode_record("zdiode"));
        store.insert(diode_record("1N4148"));
        store.insert(diode_record("bat54"));
        assert_eq!(store.names(), vec!["1N4148", "bat54", "zdiode"]);
    }

    #[test]
    fn test_load_dir_picks_up_param_files() {
        let dir = tempfile::tempdir().unwrap();

        diode_record("1N4007")
            .save(&dir.path().join("1N4007_params.json"))
            .unwrap();
        diode_record("1N5819")
            .save(&dir.path().join("1N5819_params.json"))
            .unwrap();
        // Not a record file; must be ignored
        std::fs::write(dir.path().join("notes.json"), "{}").unwrap();
        // Malformed record; must be skipped, not fail the load
        std::fs::write(dir.path().join("broken_params.json"), "{").unwrap();

        let mut store = DeviceStore::new();
        let loaded = store.load_dir(dir.path()).unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(store.names(), vec!["1N4007", "1N5819"]);
    }

    #[test]
    fn test_load_file_returns_record_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1N5819_params.json");
        diode_record("1N5819").save(&path).unwrap();

        let mut store = DeviceStore::new();
        let name = store.load_file(&path).unwrap();
        assert_eq!(name, "1N5819");
        assert!(store.get("1N5819").is_some());
    }

    #[test]
    fn test_record_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1N4148_params.json");

        let record = diode_record("1N4148");
        record.save(&path).unwrap();
        let loaded = DeviceRecord::load(&path).unwrap();

        assert_eq!(loaded.name, record.name);
        assert_eq!(loaded.kind, DeviceKind::Diode);
        assert_eq!(
            loaded.diode_params().unwrap(),
            record.diode_params().unwrap()
        );
    }
}
