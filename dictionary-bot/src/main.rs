//! Binary for the inline dictionary bot.

use anyhow::Result;
use clap::Parser;
use dbot_core::init_tracing;
use dictionary_bot::{import_lexicon, load_config, run_bot, BaseConfig, Cli, Commands, LookupConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::ImportLexicon { file, db } => {
            init_tracing(&BaseConfig::log_file_from_env())?;
            let db_path = db.unwrap_or_else(|| LookupConfig::from_env().lexical_db_path);
            let count = import_lexicon(&file, &db_path).await?;
            println!("Imported {} synsets into {}", count, db_path);
            Ok(())
        }
    }
}
