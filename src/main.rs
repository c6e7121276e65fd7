mod config;
mod logging;
mod models;
mod period;
mod run;
mod storage;
mod store;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env()?;
    config.ensure_data_dir()?;
    logging::init(&config.log_path())?;

    let storage = storage::SqliteStore::open(&config.db_path())?;
    let mut store = store::ExpenseStore::open(Box::new(storage));

    match args.len() {
        1 => run::as_tui(&mut store),
        2.. => run::as_cli(&args, &mut store),
        _ => {
            eprintln!("Usage: spendtui [command]");
            Ok(())
        }
    }
}
