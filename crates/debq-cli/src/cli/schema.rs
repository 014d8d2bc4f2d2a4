use crate::cli::opt;
use debq_config::questionnaire::VersionConfig;
use schemars::{JsonSchema, schema_for};
use std::path::Path;

pub(crate) fn exec(schema: opt::Schema) -> Result<(), anyhow::Error> {
    let opt::Schema { output_folder } = schema;
    let output_folder = Path::new(&output_folder);

    if !output_folder.exists() {
        std::fs::create_dir_all(output_folder)?;
    }

    let output_path = output_folder.join("questionnaire.json");
    write_schema::<VersionConfig>("DEBQ Questionnaire", &output_path)?;

    println!("Generated schema in {}", output_path.display());
    Ok(())
}

fn with_title(schema: serde_json::Value, title: &str) -> serde_json::Value {
    if let serde_json::Value::Object(mut object) = schema {
        object.insert("title".to_owned(), serde_json::Value::String(title.to_owned()));
        serde_json::Value::Object(object)
    } else {
        schema
    }
}

fn write_schema<T: JsonSchema>(title: &str, output_path: &Path) -> Result<(), anyhow::Error> {
    let schema = schema_for!(T).to_value();
    let schema = with_title(schema, title);
    std::fs::write(output_path, serde_json::to_string_pretty(&schema)?)?;
    Ok(())
}
