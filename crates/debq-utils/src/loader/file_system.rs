use crate::loader::LoaderTrait;
use crate::loader::error::LoadingError;
use crate::loader::file::{File, FileMetadata};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Clone, Debug)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    #[must_use]
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn sub_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return self.base_path.clone();
        }
        self.base_path.join(path)
    }
}

impl LoaderTrait for FileSystemLoader {
    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "Loading file");
        let data = fs::read(&path).await.map_err(|error| match error.kind() {
            std::io::ErrorKind::NotFound => LoadingError::NotFound(path.clone()),
            _ => error.into(),
        })?;
        let last_modified = get_last_modified(&path).await?;
        let metadata = FileMetadata::new(path.to_string_lossy().into(), Some(last_modified));
        Ok(File::new(metadata, data))
    }

    async fn get_file_metadata<P: AsRef<Path>>(&self, path: P) -> Result<FileMetadata, LoadingError> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "Loading file metadata");
        let last_modified = get_last_modified(&path).await?;
        Ok(FileMetadata::new(path.to_string_lossy().to_string(), Some(last_modified)))
    }
}

async fn get_last_modified<P: AsRef<Path>>(path: P) -> Result<DateTime<Utc>, LoadingError> {
    let modified = fs::metadata(path).await?.modified()?;
    Ok(DateTime::<Utc>::from(modified))
}
