//! Seed and snapshot file I/O
//!
//! Both files hold the full collection as a single JSON array. Snapshot
//! writes go through a temp file in the same directory followed by a
//! rename, so a crash mid-write leaves the previous snapshot intact.

use std::fs;
use std::path::Path;

use crate::error::StoreError;
use crate::schema::Video;

/// Read a collection file (seed or snapshot) into memory
pub fn read_collection(path: impl AsRef<Path>) -> Result<Vec<Video>, StoreError> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Overwrite `path` with the full collection
pub fn write_collection(path: &Path, videos: &[Video]) -> Result<(), StoreError> {
    let json = serde_json::to_vec(videos)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn video(id: i64) -> Video {
        Video {
            id,
            name: format!("clip {}", id),
            duration: 42,
            description: "fixture".to_string(),
            date_created: Utc.with_ymd_and_hms(2019, 3, 21, 10, 30, 0).unwrap(),
            thumbnail: "http://example.com/thumb.jpg".to_string(),
            folder: "A->B".to_string(),
            tags: vec!["x".to_string()],
        }
    }

    #[test]
    fn write_then_read_preserves_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        let videos = vec![video(1), video(2)];
        write_collection(&path, &videos).unwrap();

        assert_eq!(read_collection(&path).unwrap(), videos);
    }

    #[test]
    fn write_replaces_previous_snapshot_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        write_collection(&path, &[video(1), video(2), video(3)]).unwrap();
        write_collection(&path, &[video(7)]).unwrap();

        let reloaded = read_collection(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].id, 7);
    }

    #[test]
    fn read_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, b"{not json").unwrap();

        assert!(matches!(
            read_collection(&path),
            Err(StoreError::Malformed(_))
        ));
    }
}
