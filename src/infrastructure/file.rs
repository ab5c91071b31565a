use crate::domain::ports::SessionStore;
use crate::error::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Marker written to the session file while signed in.
pub const SESSION_MARKER: &str = "authenticated";

/// A session flag persisted as a small marker file.
///
/// The session counts as active only when the file exists and holds
/// [`SESSION_MARKER`]; any other content is treated as signed out.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn is_active(&self) -> Result<bool> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(contents.trim() == SESSION_MARKER),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn activate(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, SESSION_MARKER).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session"));

        assert!(!store.is_active().await.unwrap());
        store.activate().await.unwrap();
        assert!(store.is_active().await.unwrap());

        // A second handle on the same path sees the persisted flag.
        let reopened = FileSessionStore::new(store.path());
        assert!(reopened.is_active().await.unwrap());

        reopened.clear().await.unwrap();
        assert!(!store.is_active().await.unwrap());
        // Clearing twice is fine.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_unexpected_contents_mean_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");
        std::fs::write(&path, "guest").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(!store.is_active().await.unwrap());
    }
}
