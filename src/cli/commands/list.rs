use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::app::AppState;
use crate::core::navigator::Action;
use crate::errors::AppResult;
use crate::models::view::View;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let mut app = AppState::from_config(cfg)?;
        app.dispatch(Action::Navigate(View::DevotionalList))?;
        print!("{}", app.render());
    }
    Ok(())
}
