use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::app::AppState;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::DateKey;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Read { date } = cmd {
        let key = DateKey::parse(date)?;
        let mut app = AppState::from_config(cfg)?;

        let id = app
            .store
            .find_by_date(&key)
            .map(|d| d.id.clone())
            .ok_or_else(|| AppError::NotFound(key.to_string()))?;

        let record = app.mark_read(&id)?;
        success(format!("Marked \"{}\" ({}) as read.", record.title, record.date));
    }
    Ok(())
}
