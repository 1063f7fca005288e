//! Application state: everything the front ends act on, in one struct.

use crate::config::Config;
use crate::core::calendar::{CalendarCell, MonthCursor, build_month};
use crate::core::navigator::{Action, Navigator, Outcome};
use crate::core::render::{self, RenderOptions};
use crate::core::session::Session;
use crate::core::store::DevotionalStore;
use crate::db::log::ttlog_or_warn;
use crate::errors::{AppError, AppResult};
use crate::models::devotional::{Devotional, DevotionalDraft, EditableField};
use crate::models::identity::Identity;
use crate::models::view::View;
use crate::utils::date::DateKey;

pub struct AppState {
    pub store: DevotionalStore,
    pub session: Session,
    pub navigator: Navigator,
    pub cursor: MonthCursor,
    draft: Option<DevotionalDraft>,
    pub render_options: RenderOptions,
}

impl AppState {
    pub fn new(store: DevotionalStore, admin_email: &str) -> Self {
        Self {
            store,
            session: Session::new(admin_email),
            navigator: Navigator::new(),
            cursor: MonthCursor::current(),
            draft: None,
            render_options: RenderOptions::default(),
        }
    }

    /// Open the configured database and build a fresh state on it.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let store = DevotionalStore::open_path(&cfg.database, cfg.seed_defaults)?;
        let mut app = Self::new(store, &cfg.admin_email);
        app.render_options = RenderOptions::from_config(cfg);
        Ok(app)
    }

    pub fn view(&self) -> View {
        self.navigator.view()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    /// Apply one user action.
    pub fn dispatch(&mut self, action: Action) -> AppResult<Outcome> {
        let outcome = match action {
            Action::Navigate(view) => {
                let out = self.navigator.navigate(view);
                if view == View::Admin {
                    self.draft = Some(self.draft_for(DateKey::today()));
                }
                out
            }
            Action::SelectDate(date) => {
                let id = self.store.find_by_date(&date).map(|d| d.id.clone());
                self.navigator
                    .select_date(date, id.as_deref(), self.session.is_admin())
            }
            Action::ConfirmCreate(date) => {
                let out = self.navigator.confirm_create(date, self.session.is_admin());
                if out == Outcome::Moved(View::Admin) {
                    self.draft = Some(self.draft_for(date));
                }
                out
            }
            Action::DeclineCreate => self.navigator.decline_create(),
            Action::OpenRecord(id) => self.navigator.open_record(&id),
            Action::Login { email, password } => {
                self.session.login(&email, &password)?;
                self.navigator.after_login()
            }
            Action::CancelLogin => self.navigator.cancel_login(),
            Action::Logout => {
                self.session.logout();
                self.draft = None;
                self.navigator.reset()
            }
            Action::PreviousMonth => {
                self.cursor = self.cursor.previous();
                Outcome::Stayed
            }
            Action::NextMonth => {
                self.cursor = self.cursor.next();
                Outcome::Stayed
            }
        };
        Ok(outcome)
    }

    fn draft_for(&self, date: DateKey) -> DevotionalDraft {
        match self.store.find_by_date(&date) {
            Some(existing) => DevotionalDraft::from_record(existing),
            None => DevotionalDraft::blank(date),
        }
    }

    fn require_admin(&self) -> AppResult<()> {
        if self.session.is_admin() {
            Ok(())
        } else {
            Err(AppError::AccessDenied)
        }
    }

    pub fn draft(&self) -> Option<&DevotionalDraft> {
        self.draft.as_ref()
    }

    /// Point the admin form at another date, loading whatever is stored there.
    pub fn select_admin_date(&mut self, date: DateKey) -> AppResult<&DevotionalDraft> {
        self.require_admin()?;
        let draft = self.draft_for(date);
        Ok(&*self.draft.insert(draft))
    }

    pub fn edit_draft(&mut self, field: EditableField, value: &str) -> AppResult<&DevotionalDraft> {
        self.require_admin()?;
        let date = self.navigator.admin_target().unwrap_or_else(DateKey::today);
        let fallback = self.draft_for(date);
        let draft = self.draft.get_or_insert(fallback);
        draft.set(field, value);
        Ok(&*draft)
    }

    /// Validate the admin form and upsert it into the store.
    ///
    /// The stored id for that date always wins so ids never change, and an
    /// existing read flag survives the edit.
    pub fn submit_draft(&mut self) -> AppResult<Devotional> {
        self.require_admin()?;
        let draft = self
            .draft
            .clone()
            .ok_or_else(|| AppError::Other("no devotional is being edited".into()))?;

        let mut record = draft.validate()?;
        if let Some(existing) = self.store.find_by_date(&record.date) {
            record.id = existing.id.clone();
            record.is_read = existing.is_read;
        }

        let replaced = self.store.contains_date(&record.date);
        self.store.upsert(record.clone())?;

        let by = self.identity().map(|i| i.email.clone()).unwrap_or_default();
        ttlog_or_warn(
            self.store.conn(),
            "save",
            &record.date_str(),
            &format!(
                "{} \"{}\" by {}",
                if replaced { "Updated" } else { "Created" },
                record.title,
                by
            ),
        );

        self.draft = Some(DevotionalDraft::from_record(&record));
        Ok(record)
    }

    /// Replace the admin form with `draft` and submit it.
    pub fn save_draft(&mut self, draft: DevotionalDraft) -> AppResult<Devotional> {
        self.require_admin()?;
        self.draft = Some(draft);
        self.submit_draft()
    }

    /// "Mark as Read" on the detail view.
    pub fn mark_read(&mut self, id: &str) -> AppResult<Devotional> {
        let record = self.store.mark_read(id)?.clone();
        ttlog_or_warn(
            self.store.conn(),
            "mark_read",
            &record.date_str(),
            &format!("Marked \"{}\" as read", record.title),
        );
        Ok(record)
    }

    /// Record bound to the detail view, if it still exists.
    pub fn selected_record(&self) -> Option<&Devotional> {
        self.navigator
            .selected_id()
            .and_then(|id| self.store.find_by_id(id))
    }

    pub fn calendar_cells(&self) -> Vec<CalendarCell> {
        build_month(self.cursor, &self.store, DateKey::today())
    }

    /// Text for the current view.
    pub fn render(&self) -> String {
        render::render_view(self)
    }
}
