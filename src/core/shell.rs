//! Interactive front end: one line per user action, view re-rendered after each.
//!
//! Session and view state live only as long as the shell does.

use crate::core::app::AppState;
use crate::core::navigator::{Action, Outcome, PROMPT_CREATE};
use crate::errors::{AppError, AppResult};
use crate::models::devotional::EditableField;
use crate::models::view::View;
use crate::utils::date::DateKey;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  home | list | admin | login       go to a view
  login <email> [password]          sign in (password is not checked)
  cancel                            leave the login form
  logout                            sign out and return home
  select <YYYY-MM-DD>               pick a calendar day
  yes | no                          answer the create prompt
  open <id>                         show a devotional
  read [id]                         mark the shown (or given) devotional as read
  prev | next                       change calendar month
  date <YYYY-MM-DD>                 admin: load a date into the form
  set <title|category|content|image> <text>
                                    admin: fill a form field
  submit                            admin: save the form
  view                              render the current view again
  help                              this text
  quit | exit                       leave the shell";

/// What the loop should do after a command.
enum Step {
    Render,
    Print(String),
    Quit,
}

/// Drive `app` from `input` until EOF or `quit`, writing to `output`.
pub fn run_shell<R: BufRead, W: Write>(app: &mut AppState, input: R, output: &mut W) -> AppResult<()> {
    writeln!(output, "{}", app.render())?;
    writeln!(output, "Type `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match execute(app, line) {
            Ok(Step::Quit) => break,
            Ok(Step::Print(msg)) => writeln!(output, "{}", msg)?,
            Ok(Step::Render) => writeln!(output, "{}", app.render())?,
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }

    writeln!(output, "Goodbye.")?;
    Ok(())
}

/// Notices keep the current screen; everything else redraws it.
fn outcome_step(outcome: Outcome) -> Step {
    match outcome {
        Outcome::Moved(_) | Outcome::Stayed => Step::Render,
        Outcome::Notice(msg) => Step::Print(msg),
        Outcome::ConfirmCreate(date) => Step::Print(format!("{} ({}) [yes/no]", PROMPT_CREATE, date)),
    }
}

fn execute(app: &mut AppState, line: &str) -> AppResult<Step> {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    let action = match cmd.to_ascii_lowercase().as_str() {
        "quit" | "exit" => return Ok(Step::Quit),
        "help" | "?" => return Ok(Step::Print(HELP.to_string())),
        "view" => return Ok(Step::Render),
        "home" => Action::Navigate(View::Home),
        "list" => Action::Navigate(View::DevotionalList),
        "admin" => Action::Navigate(View::Admin),
        "login" if rest.is_empty() => Action::Navigate(View::Login),
        "login" => {
            let mut parts = rest.splitn(2, char::is_whitespace);
            let email = parts.next().unwrap_or_default().to_string();
            let password = parts.next().unwrap_or_default().trim().to_string();
            Action::Login { email, password }
        }
        "cancel" => Action::CancelLogin,
        "logout" => Action::Logout,
        "prev" => Action::PreviousMonth,
        "next" => Action::NextMonth,
        "select" => Action::SelectDate(DateKey::parse(rest)?),
        "open" if rest.is_empty() => Action::Navigate(View::DevotionalDetail),
        "open" => Action::OpenRecord(rest.to_string()),
        "yes" | "y" => match app.navigator.pending_create() {
            Some(date) => Action::ConfirmCreate(date),
            None => return Ok(Step::Print("Nothing to confirm.".into())),
        },
        "no" | "n" => Action::DeclineCreate,
        "read" => return mark_read(app, rest),
        "date" => {
            let date = DateKey::parse(rest)?;
            app.select_admin_date(date)?;
            return Ok(Step::Render);
        }
        "set" => return set_field(app, rest),
        "submit" => {
            let saved = app.submit_draft()?;
            return Ok(Step::Print(format!(
                "Devotional saved successfully! ({} · {})",
                saved.date, saved.title
            )));
        }
        other => {
            return Ok(Step::Print(format!(
                "Unknown command '{}'. Type `help` for commands.",
                other
            )));
        }
    };

    let outcome = app.dispatch(action)?;
    Ok(outcome_step(outcome))
}

fn mark_read(app: &mut AppState, rest: &str) -> AppResult<Step> {
    let id = if rest.is_empty() {
        app.navigator
            .selected_id()
            .map(str::to_string)
            .ok_or_else(|| AppError::NotFound("no devotional selected".into()))?
    } else {
        rest.to_string()
    };
    let record = app.mark_read(&id)?;
    Ok(Step::Print(format!("Marked \"{}\" as read.", record.title)))
}

fn set_field(app: &mut AppState, rest: &str) -> AppResult<Step> {
    let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let field = EditableField::from_name(name)
        .ok_or_else(|| AppError::Other(format!("unknown field '{}'", name)))?;
    app.edit_draft(field, value.trim())?;
    Ok(Step::Render)
}
