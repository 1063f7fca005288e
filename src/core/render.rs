//! Plain-text rendering of each view.

use crate::config::Config;
use crate::core::app::AppState;
use crate::core::calendar::render_month;
use crate::models::devotional::{Devotional, DevotionalDraft};
use crate::models::view::View;
use crate::utils::colors::{BOLD, GREY, RESET, ROSE, colorize_optional, colorize_read};
use crate::utils::formatting::{center, pad_right, truncate_chars};
use std::io::IsTerminal;

pub const APP_TITLE: &str = "Grace & Daily Bread";
pub const ACCESS_DENIED: &str = "Access Denied";
pub const NOT_FOUND: &str = "Not found";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub color: bool,
    /// Characters kept in the list-view content preview.
    pub preview_chars: usize,
    /// Column at which the detail view wraps content.
    pub wrap_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: false,
            preview_chars: 120,
            wrap_width: 72,
        }
    }
}

impl RenderOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            color: cfg.color && std::io::stdout().is_terminal(),
            preview_chars: cfg.preview_chars,
            wrap_width: cfg.wrap_width.max(20),
        }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

pub fn render_view(app: &AppState) -> String {
    let mut out = render_navbar(app);
    out.push('\n');

    let body = match app.view() {
        View::Home => render_home(app),
        View::Login => render_login(app),
        View::DevotionalList => render_list(app.store.sorted_newest_first(), &app.render_options),
        View::DevotionalDetail => match app.selected_record() {
            Some(d) => render_detail(d, &app.render_options),
            None => format!("{}\n", NOT_FOUND),
        },
        View::Admin if !app.is_admin() => format!("{}\n", ACCESS_DENIED),
        View::Admin => render_admin(app.draft(), &app.render_options),
    };

    out.push_str(&body);
    out
}

fn render_navbar(app: &AppState) -> String {
    let opts = &app.render_options;
    let mut links = vec!["Home".to_string(), "Daily Readings".to_string()];
    if app.is_admin() {
        links.push(opts.paint(ROSE, "Admin"));
    }
    match app.identity() {
        Some(i) => links.push(format!("Hello, {} (logout)", i.name)),
        None => links.push("Sign In".to_string()),
    }

    format!(
        "{}  |  {}  [{}]\n",
        opts.paint(BOLD, APP_TITLE),
        links.join(" · "),
        app.view()
    )
}

fn render_home(app: &AppState) -> String {
    let opts = &app.render_options;
    let mut out = String::new();

    out.push_str(&center(&opts.paint(BOLD, "Daily Grace & Bread"), 60));
    out.push('\n');
    out.push_str(
        "A quiet space for your daily walk. Find peace, purpose, and community\nin the reading of the word.\n\n",
    );

    out.push_str(&opts.paint(BOLD, "Daily Devotionals"));
    out.push_str("\nEach day brings a new message. Select a date to reveal the devotional prepared for you.\n\n");

    let cells = app.calendar_cells();
    out.push_str(&render_month(app.cursor, &cells, opts.color));
    out.push_str(&opts.paint(GREY, "♥ = devotional available"));
    out.push_str("\n\n");

    match app.identity() {
        Some(_) => out.push_str("Welcome Back!\n"),
        None => out.push_str("Join Us: sign in to track your reading progress.\n"),
    }
    out
}

fn render_login(app: &AppState) -> String {
    format!(
        "{}\nPlease sign in to continue\n\nFor Demo: Use {} to access Admin features.\n",
        app.render_options.paint(BOLD, "Welcome Back"),
        app.session.admin_email()
    )
}

/// "Daily Readings": newest first, one card per record.
pub fn render_list(records: Vec<&Devotional>, opts: &RenderOptions) -> String {
    let mut out = format!("{}\n\n", opts.paint(BOLD, "Daily Readings"));

    if records.is_empty() {
        out.push_str("No devotionals yet.\n");
        return out;
    }

    for d in records {
        let category = format!("[{}]", d.category.to_uppercase());
        out.push_str(&format!(
            "{} {}  {}\n",
            opts.paint(ROSE, &pad_right(&category, 16)),
            d.date,
            if opts.color {
                colorize_read(d.is_read())
            } else if d.is_read() {
                "read".to_string()
            } else {
                String::new()
            }
        ));
        out.push_str(&format!("  {}\n", opts.paint(BOLD, &d.title)));
        out.push_str(&format!(
            "  {}\n",
            truncate_chars(&d.content, opts.preview_chars)
        ));
        out.push_str(&format!("  Read Devotional → open {}\n\n", d.id));
    }
    out
}

pub fn render_detail(d: &Devotional, opts: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", opts.paint(ROSE, &d.category.to_uppercase())));
    out.push_str(&format!("{}\n", opts.paint(BOLD, &d.title)));
    if let Some(url) = &d.image_url {
        out.push_str(&format!("{}\n", opts.paint(GREY, &format!("Image: {}", url))));
    }
    out.push_str(&format!("{}\n\n", d.long_date()));

    for line in textwrap::wrap(&d.content, opts.wrap_width) {
        out.push_str(&line);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(if d.is_read() {
        "← Back to List    ♥ Read\n"
    } else {
        "← Back to List    ♥ Mark as Read\n"
    });
    out
}

/// The admin form, or a hint when nothing is loaded.
pub fn render_admin(draft: Option<&DevotionalDraft>, opts: &RenderOptions) -> String {
    let mut out = format!(
        "{}\nManage Daily Devotionals\n\n",
        opts.paint(BOLD, "Admin Dashboard")
    );

    let Some(draft) = draft else {
        out.push_str("Select a date to start editing.\n");
        return out;
    };

    let date = draft.date.map(|d| d.to_string()).unwrap_or_default();
    let fields = [
        ("Date", date.as_str()),
        ("Title", draft.title.as_str()),
        ("Category", draft.category.as_str()),
        ("Image URL", draft.image_url.as_str()),
    ];
    for (label, value) in fields {
        let shown = if value.is_empty() { "--" } else { value };
        let shown = if opts.color {
            colorize_optional(shown)
        } else {
            shown.to_string()
        };
        out.push_str(&format!("{} {}\n", pad_right(&format!("{label}:"), 11), shown));
    }

    out.push_str("Content:\n");
    if draft.content.trim().is_empty() {
        out.push_str("  --\n");
    } else {
        for line in textwrap::wrap(&draft.content, opts.wrap_width.saturating_sub(2).max(20)) {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out.push_str(match draft.id {
        Some(_) => "\nEditing existing devotional.\n",
        None => "\nNew devotional.\n",
    });

    let missing = draft.missing_fields();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
        out.push_str(&format!("Required before saving: {}\n", names.join(", ")));
    }
    out
}
