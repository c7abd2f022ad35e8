use std::fs;
use std::path::{Path, PathBuf};

use crate::payload::GapFillingPayload;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed payload in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read a persisted question payload from a JSON file
pub fn read_payload(path: &Path) -> Result<GapFillingPayload, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a question payload as pretty-printed JSON
pub fn write_payload(path: &Path, payload: &GapFillingPayload) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(payload).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content)?;
    Ok(())
}

/// Read a raw encoded body from a text file
pub fn read_body(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Write a raw encoded body to a text file
pub fn write_body(path: &Path, body: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Principle;
    use tempfile::TempDir;

    fn sample_payload() -> GapFillingPayload {
        GapFillingPayload {
            title: Some("Complete the sentences below.".into()),
            principle: Principle::NmtTwo,
            body: "The (1) turns.".into(),
            diagram_chart: None,
        }
    }

    #[test]
    fn payload_round_trips_through_a_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("question.json");

        write_payload(&path, &sample_payload()).unwrap();
        let back = read_payload(&path).unwrap();
        assert_eq!(back, sample_payload());
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tests").join("reading").join("q1.json");

        write_payload(&path, &sample_payload()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_payload(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn malformed_json_is_reported_with_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let result = read_payload(&path);
        let err = result.unwrap_err();
        assert!(matches!(err, IoError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn body_files_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("body.txt");

        write_body(&path, "step one\n⬇️\nstep two").unwrap();
        assert_eq!(read_body(&path).unwrap(), "step one\n⬇️\nstep two");
    }
}
