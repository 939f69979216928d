use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::hooks::FetchState;

/// Tracks whether the automatic mount fetch has been issued.
///
/// A gated page renders once with the session guard unsatisfied before
/// the login redirect lands; the gate keeps that render from making a
/// request without a token.
#[derive(Debug, Default)]
pub(crate) struct FetchGate {
    issued: bool,
}

impl FetchGate {
    /// True exactly once, on the first call with `enabled` set.
    pub(crate) fn should_issue(&mut self, enabled: bool) -> bool {
        if !enabled || self.issued {
            return false;
        }
        self.issued = true;
        true
    }
}

/// Fetch-on-mount with a manual refetch callback.
///
/// While `enabled` is false no request is made and the state stays
/// `NotStarted`. Errors land in both the returned state and a toast.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(
    enabled: bool,
    fetch_fn: F,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(FetchState::default);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let refetch = {
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn = fetch_fn.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match fetch_fn().await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        fetch_state.set(FetchState::Error(err.clone()));
                        toast_ctx.show_error(err);
                    }
                }
            });
        })
    };

    {
        let refetch = refetch.clone();
        let gate = use_mut_ref(FetchGate::default);
        use_effect_with(enabled, move |enabled| {
            if gate.borrow_mut().should_issue(*enabled) {
                refetch.emit(());
            }
            || ()
        });
    }

    (fetch_state, refetch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_stays_closed_while_disabled() {
        let mut gate = FetchGate::default();
        assert!(!gate.should_issue(false));
        assert!(!gate.should_issue(false));
    }

    #[test]
    fn gate_opens_exactly_once_when_enabled() {
        let mut gate = FetchGate::default();
        assert!(gate.should_issue(true));
        assert!(!gate.should_issue(true));
    }

    #[test]
    fn guard_failing_render_never_fetches() {
        // Mount without a session, then the guard flips after login.
        let mut gate = FetchGate::default();
        assert!(!gate.should_issue(false));
        assert!(gate.should_issue(true));
        assert!(!gate.should_issue(true));
    }
}
