use crate::cli::opt::Validate;
use anyhow::{Error, anyhow};
use debq_config::questionnaire::{Questionnaire, load};
use debq_utils::loader::file::FileMetadata;
use debq_utils::loader::{LoaderTrait, loader_for};

async fn validate_one(location: &str) -> Result<(Questionnaire, FileMetadata), Error> {
    let (loader, file) = loader_for(location)?;
    let metadata = loader.get_file_metadata(&file).await?;
    let questionnaire = load(&loader, &file).await?;
    Ok((questionnaire, metadata))
}

pub(crate) async fn validate(opt: Validate) -> Result<(), Error> {
    let mut failed = Vec::new();
    for path in &opt.paths {
        match validate_one(path).await {
            Ok((questionnaire, metadata)) => {
                let modified = metadata
                    .last_modified
                    .map_or_else(String::new, |modified| format!(", modified {}", modified.to_rfc3339()));
                println!(
                    "{path}: questionnaire '{}' with {} questions{modified} is ok 👌",
                    questionnaire.questionnaire_id,
                    questionnaire.questions.len()
                );
            }
            Err(error) => {
                eprintln!("{path}: {error:#}");
                failed.push(path.as_str());
            }
        }
    }
    if !failed.is_empty() {
        return Err(anyhow!("Invalid question files: {failed:?}"));
    }
    Ok(())
}
