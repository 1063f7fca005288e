use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::app::AppState;
use crate::core::navigator::Action;
use crate::errors::{AppError, AppResult};
use crate::utils::date::DateKey;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date, id } = cmd {
        let mut app = AppState::from_config(cfg)?;

        let id = match (id, date) {
            (Some(id), _) => id.clone(),
            (None, Some(d)) => {
                let key = DateKey::parse(d)?;
                app.store
                    .find_by_date(&key)
                    .map(|r| r.id.clone())
                    .ok_or_else(|| AppError::NotFound(key.to_string()))?
            }
            (None, None) => return Err(AppError::Other("a date or --id is required".into())),
        };

        app.dispatch(Action::OpenRecord(id))?;
        print!("{}", app.render());
    }
    Ok(())
}
