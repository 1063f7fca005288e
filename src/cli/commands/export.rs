use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::DevotionalStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = DevotionalStore::open_path(&cfg.database, cfg.seed_defaults)?;
        ExportLogic::export(&store, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
