pub mod devotional;
pub mod identity;
pub mod view;
