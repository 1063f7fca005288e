use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::app::AppState;
use crate::core::navigator::{Action, Outcome, PROMPT_CREATE};
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info, warning};
use crate::utils::date::DateKey;

/// Calendar click from the command line: shows the devotional, or tells
/// the user there is none (admins are offered the create form).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Select {
        date,
        as_email,
        yes,
    } = cmd
    {
        let key = DateKey::parse(date)?;
        let mut app = AppState::from_config(cfg)?;

        if let Some(email) = as_email {
            app.dispatch(Action::Login {
                email: email.clone(),
                password: String::new(),
            })?;
        }

        match app.dispatch(Action::SelectDate(key))? {
            Outcome::Moved(_) | Outcome::Stayed => print!("{}", app.render()),
            Outcome::Notice(msg) => warning(msg),
            Outcome::ConfirmCreate(date) => {
                let prompt = format!("{} ({})", PROMPT_CREATE, date);
                if *yes || ask_confirmation(&prompt) {
                    app.dispatch(Action::ConfirmCreate(date))?;
                    print!("{}", app.render());
                    info(format!(
                        "Use `save --as <admin> --date {}` to store it.",
                        date
                    ));
                } else {
                    app.dispatch(Action::DeclineCreate)?;
                    info("Operation cancelled.");
                }
            }
        }
    }
    Ok(())
}
