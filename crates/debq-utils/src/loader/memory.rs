use crate::loader::LoaderTrait;
use crate::loader::error::LoadingError;
use crate::loader::file::{File, FileMetadata};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Serves files from memory, e.g. bundled defaults or test fixtures.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    files: Arc<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryLoader {
    #[must_use]
    pub fn new<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<PathBuf>,
        C: Into<Vec<u8>>,
    {
        let files = files
            .into_iter()
            .map(|(path, content)| (path.into(), content.into()))
            .collect();
        Self { files: Arc::new(files) }
    }
}

impl LoaderTrait for MemoryLoader {
    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        let path = path.as_ref();
        let content = self
            .files
            .get(path)
            .ok_or_else(|| LoadingError::NotFound(path.to_path_buf()))?;
        Ok(File::new(
            FileMetadata::new(path.to_string_lossy().into(), None),
            content.clone(),
        ))
    }

    async fn get_file_metadata<P: AsRef<Path>>(&self, path: P) -> Result<FileMetadata, LoadingError> {
        let path = path.as_ref();
        if !self.files.contains_key(path) {
            return Err(LoadingError::NotFound(path.to_path_buf()));
        }
        Ok(FileMetadata::new(path.to_string_lossy().into(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_memory_loader() {
        let loader = MemoryLoader::new([("a.yaml", "version: '0.1'")]);
        let file = loader.load_file("a.yaml").await.unwrap();
        assert_eq!(file.content, b"version: '0.1'");
        assert!(loader.get_file_metadata("b.yaml").await.is_err());
    }
}
