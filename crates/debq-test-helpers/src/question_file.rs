use debq_config::questionnaire::question::Question;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use thiserror::Error;

/// A question file in its own temporary directory, removed on drop.
pub struct QuestionFile {
    // Kept so the directory outlives the file
    #[allow(dead_code)]
    temp_dir: TempDir,
    path: PathBuf,
}

#[derive(Error, Debug)]
pub enum QuestionFileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl QuestionFile {
    /// Writes `content` verbatim to a file called `name`.
    pub fn with_content(name: &str, content: impl AsRef<[u8]>) -> Result<Self, QuestionFileError> {
        let temp_dir = TempDir::with_prefix("test-questions")?;
        let path = temp_dir.path().join(name);
        std::fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "wrote question file");
        Ok(Self { temp_dir, path })
    }

    /// Writes `questions` as a plain JSON array.
    pub fn json(questions: &[Question]) -> Result<Self, QuestionFileError> {
        let content = serde_json::to_vec_pretty(questions)?;
        Self::with_content("questions.json", content)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file as a location string accepted by the loader.
    #[must_use]
    pub fn location(&self) -> String {
        self.path.display().to_string()
    }
}
