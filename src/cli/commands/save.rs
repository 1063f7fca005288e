use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::app::AppState;
use crate::core::navigator::Action;
use crate::errors::AppResult;
use crate::models::devotional::EditableField;
use crate::models::view::View;
use crate::ui::messages::success;
use crate::utils::date::DateKey;

/// Admin form submission in one go: sign in, open the admin view on the
/// date, fill in the given fields, submit.
///
/// Fields left out keep the values already stored for that date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save {
        as_email,
        password,
        date,
        title,
        content,
        category,
        image,
    } = cmd
    {
        let mut app = AppState::from_config(cfg)?;
        app.dispatch(Action::Login {
            email: as_email.clone(),
            password: password.clone(),
        })?;
        app.dispatch(Action::Navigate(View::Admin))?;

        let key = match date {
            Some(d) => DateKey::parse(d)?,
            None => DateKey::today(),
        };
        app.select_admin_date(key)?;

        let fields = [
            (EditableField::Title, title),
            (EditableField::Content, content),
            (EditableField::Category, category),
            (EditableField::ImageUrl, image),
        ];
        for (field, value) in fields {
            if !value.is_empty() {
                app.edit_draft(field, value)?;
            }
        }

        let saved = app.submit_draft()?;
        success(format!(
            "Devotional saved successfully! {} · {} [{}]",
            saved.date, saved.title, saved.id
        ));
    }
    Ok(())
}
