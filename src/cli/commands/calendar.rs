use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::app::AppState;
use crate::core::calendar::{CalendarCell, MonthCursor, render_month};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let mut app = AppState::from_config(cfg)?;
        if let Some(m) = month {
            app.cursor = MonthCursor::parse(m)?;
        }

        let cells = app.calendar_cells();
        print!("{}", render_month(app.cursor, &cells, app.render_options.color));

        let with_content = cells
            .iter()
            .filter(|c| matches!(c, CalendarCell::Day(d) if d.has_record))
            .count();
        println!("\n♥ {} day(s) with a devotional this month", with_content);
    }
    Ok(())
}
