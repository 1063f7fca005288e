use std::fmt;

/// Closed set of screens the navigator can be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Login,
    DevotionalList,
    DevotionalDetail,
    Admin,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Login => "login",
            View::DevotionalList => "devotional-list",
            View::DevotionalDetail => "devotional-detail",
            View::Admin => "admin",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Some(View::Home),
            "login" => Some(View::Login),
            "devotional-list" | "list" => Some(View::DevotionalList),
            "devotional-detail" | "detail" => Some(View::DevotionalDetail),
            "admin" => Some(View::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
