use std::path::PathBuf;

use anyhow::Result;
use safealert::api::{self, AppState};
use safealert::config::Config;
use safealert::logger;
use safealert::storage::Storage;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next() {
        Some(flag) if flag == "--generate-config" => {
            let path = match args.next() {
                Some(path) => PathBuf::from(path),
                None => Config::get_default_config_path()?,
            };
            logger::init(&Config::default().logging)?;
            Config::generate_default_config(path)
        }
        config_path => {
            let config = Config::load(config_path.map(PathBuf::from).as_deref())?;
            logger::init(&config.logging)?;

            let storage = Storage::new(&config.database).await?;
            api::serve(&config.server, AppState::new(storage)).await
        }
    }
}
