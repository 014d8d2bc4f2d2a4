pub(crate) mod opt;
mod run;
mod schema;
mod validate;

use crate::cli::opt::Commands;
use anyhow::Error;

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Run(o) => run::run(o).await,
        Commands::Validate(o) => validate::validate(o).await,
        Commands::Schema(o) => schema::exec(o),
    }
}
