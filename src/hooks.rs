use yew::prelude::*;
use yew_router::prelude::*;

use crate::session;
use crate::Route;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Session guard for gated pages.
///
/// Returns the authentication state synchronously so the page can render
/// nothing while unauthenticated, and redirects to the login route as an
/// effect. Callers must not issue gated requests when this returns false.
#[hook]
pub fn use_require_session() -> bool {
    let navigator = use_navigator().unwrap();
    let authenticated = session::is_authenticated();

    use_effect_with(authenticated, move |authenticated| {
        if !*authenticated {
            log::warn!("Unauthenticated access to a gated page; redirecting to login");
            navigator.push(&Route::Login);
        }
        || ()
    });

    authenticated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_state_accessors() {
        let state: FetchState<u32> = FetchState::Success(7);
        assert!(state.is_success());
        assert_eq!(state.data(), Some(&7));
        assert_eq!(state.error(), None);

        let failed: FetchState<u32> = FetchState::Error("boom".into());
        assert!(!failed.is_success());
        assert_eq!(failed.error().map(String::as_str), Some("boom"));
        assert!(FetchState::<u32>::Loading.is_loading());
    }
}
