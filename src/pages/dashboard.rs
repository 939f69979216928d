use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::dashboard::{fetch_dashboard, DashboardData};
use crate::common::loading::Loading;
use crate::common::toast::ToastContext;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::hooks::{use_require_session, FetchState};
use crate::settings;
use crate::Route;

/// Race between the aggregate request and the give-up window. Whichever
/// side loses is ignored: a late response is discarded, and a deadline
/// firing after the data arrived does nothing.
#[derive(Debug, Default)]
struct LoadWindow {
    settled: bool,
    gave_up: bool,
}

impl LoadWindow {
    /// The request finished, with data or an error. False when the
    /// window already expired and the result must be discarded.
    fn settle(&mut self) -> bool {
        if self.gave_up {
            return false;
        }
        self.settled = true;
        true
    }

    /// The window expired. True when the page must give up and redirect.
    fn expire(&mut self) -> bool {
        if self.settled {
            return false;
        }
        self.gave_up = true;
        true
    }
}

/// Authenticated dashboard. Issues exactly one aggregate request per
/// mount and enforces a hard give-up window: if no valid response has
/// arrived in time it redirects home. The window does not cancel the
/// request itself.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let authenticated = use_require_session();
    let navigator = use_navigator().unwrap();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let data = use_state(|| FetchState::<DashboardData>::Loading);
    let load_window = use_mut_ref(LoadWindow::default);

    {
        let navigator = navigator.clone();
        let toast_ctx = toast_ctx.clone();
        let data = data.clone();
        let load_window = load_window.clone();
        use_effect_with(authenticated, move |authenticated| {
            let mut give_up_timer = None;

            if *authenticated {
                {
                    let navigator = navigator.clone();
                    let toast_ctx = toast_ctx.clone();
                    let data = data.clone();
                    let load_window = load_window.clone();
                    spawn_local(async move {
                        match fetch_dashboard().await {
                            Ok(payload) => {
                                if !load_window.borrow_mut().settle() {
                                    log::warn!("Discarding dashboard response received after giving up");
                                    return;
                                }
                                data.set(FetchState::Success(payload));
                            }
                            Err(err) => {
                                if !load_window.borrow_mut().settle() {
                                    return;
                                }
                                log::error!("Failed to load dashboard data: {}", err);
                                toast_ctx.show_error(format!("Could not load your dashboard: {err}"));
                                navigator.push(&Route::Login);
                            }
                        }
                    });
                }

                let window_ms = settings::get_settings().dashboard_give_up_ms;
                let navigator = navigator.clone();
                let toast_ctx = toast_ctx.clone();
                let load_window = load_window.clone();
                give_up_timer = Some(Timeout::new(window_ms, move || {
                    if load_window.borrow_mut().expire() {
                        log::warn!("Dashboard timed out after {}ms; redirecting home", window_ms);
                        toast_ctx.show_warning(
                            "The dashboard took too long to load. Please try again.".to_string(),
                        );
                        navigator.push(&Route::Home);
                    }
                }));
            }

            move || drop(give_up_timer)
        });
    }

    if !authenticated {
        return html! {};
    }

    let body = match &*data {
        FetchState::Success(payload) => render_dashboard(payload),
        _ => html! { <Loading text="Loading dashboard..." /> },
    };

    html! {
        <div class="flex flex-col min-h-screen bg-gray-900 text-white">
            <Navbar />
            <div class="flex flex-col md:flex-row flex-1">
                <Sidebar />
                <main class="p-4 sm:p-6 space-y-6 overflow-y-auto flex-1">
                    {body}
                </main>
            </div>
            <Footer />
        </div>
    }
}

fn render_dashboard(data: &DashboardData) -> Html {
    html! {
        <>
            <section class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 sm:gap-6">
                {if data.stats.is_empty() {
                    html! { <p>{"No stats available."}</p> }
                } else {
                    html! {
                        <>
                            {for data.stats.iter().map(|stat| html! {
                                <div key={stat.label.clone()} class="p-4 bg-black/30 rounded-xl border border-white/20 shadow-md">
                                    <p class="text-sm text-gray-300">{&stat.label}</p>
                                    <h3 class="text-2xl font-bold mt-1">{stat.display_value()}</h3>
                                </div>
                            })}
                        </>
                    }
                }}
            </section>

            <section class="bg-black/30 rounded-xl p-4 sm:p-6 border border-white/20 shadow">
                <h2 class="text-xl font-semibold mb-4">{"Case Progress"}</h2>
                {if data.progress.steps.is_empty() {
                    html! { <p>{"No progress data available."}</p> }
                } else {
                    html! {
                        <>
                            <div class="flex flex-wrap justify-between text-sm font-semibold gap-4">
                                {for data.progress.steps.iter().enumerate().map(|(idx, step)| {
                                    let reached = idx <= data.progress.current_step_index;
                                    html! {
                                        <div key={idx} class="flex flex-col items-center">
                                            <div class={classes!(
                                                "w-6", "h-6", "rounded-full",
                                                if reached { "bg-blue-500" } else { "bg-gray-500" }
                                            )} />
                                            <span class="mt-2 text-center">{step}</span>
                                        </div>
                                    }
                                })}
                            </div>
                            <div class="h-2 w-full bg-gray-700 rounded-full mt-4 overflow-hidden">
                                <div
                                    class="h-full bg-blue-500 transition-all duration-500"
                                    style={format!("width: {}%", data.progress.percent_complete())}
                                />
                            </div>
                        </>
                    }
                }}
            </section>

            <section class="bg-black/30 rounded-xl p-4 sm:p-6 border border-white/20 shadow">
                <h2 class="text-xl font-semibold mb-4">{"Recent Activity"}</h2>
                {if data.activity.is_empty() {
                    html! { <p>{"No recent activity."}</p> }
                } else {
                    html! {
                        <ul class="space-y-3 text-sm">
                            {for data.activity.iter().enumerate().map(|(i, item)| html! {
                                <li key={i}>
                                    {&item.icon} {" "} {&item.message}
                                    {if let Some(detail) = &item.detail {
                                        html! { <b>{" "}{detail}</b> }
                                    } else {
                                        html! {}
                                    }}
                                    {" "}
                                    <span class="text-xs text-gray-400">{format!("({})", item.time)}</span>
                                </li>
                            })}
                        </ul>
                    }
                }}
            </section>

            <section class="bg-black/30 rounded-xl p-4 sm:p-6 border border-white/20 shadow">
                <h2 class="text-xl font-semibold mb-4">{"Upload Documents"}</h2>
                <Link<Route>
                    to={Route::SubmitCase}
                    classes="block border-2 border-dashed border-gray-500 p-6 sm:p-10 rounded-lg text-center hover:border-blue-400 transition cursor-pointer"
                >
                    <p class="mb-2">{"Attach files to a new case"}</p>
                    <p class="text-sm text-gray-400">{"Allowed formats: PDF, JPG, PNG"}</p>
                </Link<Route>>
            </section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_before_data_gives_up_and_discards_the_late_response() {
        let mut window = LoadWindow::default();
        assert!(window.expire());
        // The still-outstanding request resolving afterwards is dropped.
        assert!(!window.settle());
    }

    #[test]
    fn data_before_deadline_disarms_the_window() {
        let mut window = LoadWindow::default();
        assert!(window.settle());
        assert!(!window.expire());
    }

    #[test]
    fn expiry_fires_at_most_once() {
        let mut window = LoadWindow::default();
        assert!(window.expire());
        assert!(!window.expire());
    }
}
