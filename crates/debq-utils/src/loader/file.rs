use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub key: String,
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub metadata: FileMetadata,
    pub content: Vec<u8>,
}

impl File {
    pub(crate) fn new(metadata: FileMetadata, content: Vec<u8>) -> Self {
        File { metadata, content }
    }
}

impl FileMetadata {
    #[must_use]
    pub fn new(key: String, last_modified: Option<DateTime<Utc>>) -> Self {
        Self { key, last_modified }
    }
}
