//! I/O support: JSON and RON serialization helpers for snapshots and
//! reports.
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use ron::ser::PrettyConfig;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn to_json_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(s)?)
}

pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let mut file = File::create(path)?;
    let content = to_json_string(value)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn read_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    from_json_str(&content)
}

pub fn to_ron_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    let mut pretty = PrettyConfig::default();
    pretty.new_line = "\n".into();
    Ok(ron::ser::to_string_pretty(value, pretty)?)
}

pub fn from_ron_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(ron::from_str(s).map_err(ron::Error::from)?)
}

pub fn write_ron<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let mut file = File::create(path)?;
    let content = to_ron_string(value)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn read_ron<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    from_ron_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Percolation;
    use crate::sim::snapshot::GridSnapshot;

    fn sample_snapshot() -> GridSnapshot {
        let mut model = Percolation::new(2).unwrap();
        model.open(1, 1).unwrap();
        model.open(2, 1).unwrap();
        GridSnapshot::capture(&mut model, 2)
    }

    #[test]
    fn snapshot_survives_json() {
        let snapshot = sample_snapshot();
        let json = to_json_string(&snapshot).unwrap();
        let parsed: GridSnapshot = from_json_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn snapshot_survives_ron() {
        let snapshot = sample_snapshot();
        let ron = to_ron_string(&snapshot).unwrap();
        let parsed: GridSnapshot = from_ron_str(&ron).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result: Result<GridSnapshot, _> = from_json_str("{not json");
        assert!(matches!(result, Err(IoError::Json(_))));
    }
}
