pub mod footer;
pub mod hero;
pub mod navbar;
pub mod notification_bell;
pub mod sidebar;
