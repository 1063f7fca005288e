//! View state machine.
//!
//! The navigator only knows views and the ids/dates bound to them. Store
//! lookups and the session are resolved by the caller (`AppState`) and
//! passed in, so every transition here is a plain function of its inputs.

use crate::models::view::View;
use crate::utils::date::DateKey;

pub const NOTICE_NO_CONTENT: &str = "No devotional prepared for this date yet.";
pub const PROMPT_CREATE: &str = "No devotional found for this date. Create one?";

/// User intents the front ends can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(View),
    SelectDate(DateKey),
    /// Answer "yes" to the create prompt raised by `SelectDate`.
    ConfirmCreate(DateKey),
    /// Answer "no" to the create prompt.
    DeclineCreate,
    OpenRecord(String),
    Login { email: String, password: String },
    CancelLogin,
    Logout,
    PreviousMonth,
    NextMonth,
}

/// What an action did to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Moved(View),
    Stayed,
    /// Stayed, with a message for the user.
    Notice(String),
    /// Stayed; the admin must confirm creating a devotional for this date.
    ConfirmCreate(DateKey),
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    view: View,
    selected_id: Option<String>,
    admin_target: Option<DateKey>,
    pending_create: Option<DateKey>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Date carried into the admin form by a confirmed create.
    pub fn admin_target(&self) -> Option<DateKey> {
        self.admin_target
    }

    pub fn pending_create(&self) -> Option<DateKey> {
        self.pending_create
    }

    fn move_to(&mut self, view: View) -> Outcome {
        self.pending_create = None;
        if view != View::Admin {
            self.admin_target = None;
        }
        self.view = view;
        Outcome::Moved(view)
    }

    /// Plain navigation (menu links, back buttons).
    ///
    /// Admin is reachable by anyone; rendering turns it into an access-denied
    /// page for non-admins.
    pub fn navigate(&mut self, view: View) -> Outcome {
        if view == View::Admin {
            self.admin_target = None;
        }
        self.move_to(view)
    }

    pub fn open_record(&mut self, id: &str) -> Outcome {
        self.selected_id = Some(id.to_string());
        self.move_to(View::DevotionalDetail)
    }

    /// A calendar day was clicked.
    ///
    /// - record exists: show it
    /// - no record, admin: ask before moving to the admin form
    /// - no record, anyone else: stay and say so
    pub fn select_date(&mut self, date: DateKey, record_id: Option<&str>, is_admin: bool) -> Outcome {
        match record_id {
            Some(id) => self.open_record(id),
            None if is_admin => {
                self.pending_create = Some(date);
                Outcome::ConfirmCreate(date)
            }
            None => {
                self.pending_create = None;
                Outcome::Notice(NOTICE_NO_CONTENT.to_string())
            }
        }
    }

    /// The admin said yes to the create prompt.
    ///
    /// Only the date of the open prompt can be confirmed.
    pub fn confirm_create(&mut self, date: DateKey, is_admin: bool) -> Outcome {
        if !is_admin || self.pending_create != Some(date) {
            self.pending_create = None;
            return Outcome::Stayed;
        }
        self.move_to(View::Admin);
        self.admin_target = Some(date);
        Outcome::Moved(View::Admin)
    }

    pub fn decline_create(&mut self) -> Outcome {
        self.pending_create = None;
        Outcome::Stayed
    }

    pub fn after_login(&mut self) -> Outcome {
        self.move_to(View::Home)
    }

    pub fn cancel_login(&mut self) -> Outcome {
        self.move_to(View::Home)
    }

    /// Back to a clean home page.
    pub fn reset(&mut self) -> Outcome {
        self.selected_id = None;
        self.move_to(View::Home)
    }
}
