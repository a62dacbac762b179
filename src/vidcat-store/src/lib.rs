//! vidcat-store - flat-file storage layer for the video catalog
//!
//! Holds the full collection in memory and rewrites the snapshot file
//! wholesale after every mutation.

mod error;
mod schema;
pub mod snapshot;

pub use error::StoreError;
pub use schema::Video;

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// In-memory video collection with write-through snapshot persistence
pub struct VideoStore {
    videos: Vec<Video>,
    snapshot_path: Option<PathBuf>,
}

impl VideoStore {
    /// Load the collection from a seed file; mutations persist to `snapshot`.
    ///
    /// The seed is never written back to.
    pub fn load(seed: impl AsRef<Path>, snapshot: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let seed = seed.as_ref();
        let videos = snapshot::read_collection(seed)?;
        info!("loaded {} videos from {:?}", videos.len(), seed);

        Ok(Self {
            videos,
            snapshot_path: Some(snapshot.into()),
        })
    }

    /// Build a store with no backing file (for tests and dry runs)
    pub fn in_memory(videos: Vec<Video>) -> Self {
        debug!("opening in-memory store with {} videos", videos.len());
        Self {
            videos,
            snapshot_path: None,
        }
    }

    /// All records, insertion order
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Whether a record with this id is present
    pub fn exists(&self, id: i64) -> bool {
        self.videos.iter().any(|v| v.id == id)
    }

    /// Append a record unless its id is already taken.
    ///
    /// Check and append happen on the same `&mut` borrow, so no caller can
    /// observe the id as free and then lose the race. Returns `Ok(false)`
    /// and leaves the collection untouched on a duplicate id.
    pub fn insert(&mut self, video: Video) -> Result<bool, StoreError> {
        if self.exists(video.id) {
            return Ok(false);
        }

        self.videos.push(video);
        self.persist()?;
        Ok(true)
    }

    /// Overwrite the first record matching `id` with `video`.
    ///
    /// The body is stored as-is; its id may differ from `id`.
    pub fn replace(&mut self, id: i64, video: Video) -> Result<bool, StoreError> {
        match self.videos.iter_mut().find(|v| v.id == id) {
            Some(slot) => {
                *slot = video;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the first record matching `id`
    pub fn remove(&mut self, id: i64) -> Result<bool, StoreError> {
        match self.videos.iter().position(|v| v.id == id) {
            Some(idx) => {
                self.videos.remove(idx);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Records whose folder equals `folder` exactly
    pub fn by_folder(&self, folder: &str) -> Vec<Video> {
        self.videos
            .iter()
            .filter(|v| v.folder == folder)
            .cloned()
            .collect()
    }

    /// Records carrying at least one of the comma-separated `tags`.
    ///
    /// Each record appears at most once however many of its tags match.
    pub fn by_tags(&self, tags: &str) -> Vec<Video> {
        let requested: Vec<&str> = tags.split(',').collect();

        self.videos
            .iter()
            .filter(|v| v.tags.iter().any(|t| requested.contains(&t.as_str())))
            .cloned()
            .collect()
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(path) = &self.snapshot_path {
            snapshot::write_collection(path, &self.videos)?;
            debug!("snapshot rewritten: {} videos -> {:?}", self.videos.len(), path);
        }
        Ok(())
    }
}
