pub mod error;
pub mod fetch_hook;
pub mod loading;
pub mod toast;

pub use fetch_hook::use_fetch_with_refetch;
