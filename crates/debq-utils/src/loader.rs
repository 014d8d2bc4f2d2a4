use crate::loader::error::LoadingError;
use crate::loader::file::{File, FileMetadata};
use crate::loader::file_system::FileSystemLoader;
use crate::loader::memory::MemoryLoader;
use std::path::Path;
use url::Url;

pub mod error;
pub mod file;
pub mod file_system;
pub mod memory;

#[derive(Debug, Clone, Copy, Default)]
pub enum Filter {
    Yaml,
    Json,
    #[default]
    Any,
}

impl Filter {
    pub fn apply<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());
        let Some(extension) = extension else {
            return false;
        };
        let allowed_extensions: &[&str] = match self {
            Filter::Yaml => &["yaml", "yml"],
            Filter::Json => &["json"],
            Filter::Any => return true,
        };
        allowed_extensions.contains(&extension)
    }
}

/// Turns a location given on the command line into a loader.
///
/// Locations are either `file://` urls or plain paths. Relative paths are resolved against the
/// current working directory.
pub fn loader_for(location: &str) -> Result<(Loader, String), LoadingError> {
    let url = match Url::parse(location) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = std::path::absolute(location)?;
            Url::from_file_path(&path).map_err(|()| LoadingError::InvalidPath(path))?
        }
        Err(error) => return Err(error.into()),
    };
    match url.scheme() {
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| LoadingError::InvalidURL(url.to_string()))?;
            let parent = path
                .parent()
                .ok_or_else(|| LoadingError::InvalidPath(path.clone()))?
                .to_path_buf();
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| LoadingError::InvalidPath(path.clone()))?
                .to_owned();
            Ok((Loader::FileSystem(FileSystemLoader::new(parent)), file_name))
        }
        scheme => Err(LoadingError::UnsupportedScheme(scheme.to_owned())),
    }
}

#[derive(Clone, Debug)]
pub enum Loader {
    FileSystem(FileSystemLoader),
    Memory(MemoryLoader),
}

impl LoaderTrait for Loader {
    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        match self {
            Loader::FileSystem(loader) => loader.load_file(path).await,
            Loader::Memory(loader) => loader.load_file(path).await,
        }
    }

    async fn get_file_metadata<P: AsRef<Path>>(&self, path: P) -> Result<FileMetadata, LoadingError> {
        match self {
            Loader::FileSystem(loader) => loader.get_file_metadata(path).await,
            Loader::Memory(loader) => loader.get_file_metadata(path).await,
        }
    }
}

pub trait LoaderTrait {
    fn load_file<P: AsRef<Path>>(&self, path: P) -> impl Future<Output = Result<File, LoadingError>>;

    fn get_file_metadata<P: AsRef<Path>>(&self, path: P) -> impl Future<Output = Result<FileMetadata, LoadingError>>;
}
