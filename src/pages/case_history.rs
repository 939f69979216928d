use chrono::NaiveDate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::cases::{filter_cases, list_cases, CaseSummary};
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::common::use_fetch_with_refetch;
use crate::components::navbar::Navbar;
use crate::hooks::{use_require_session, FetchState};

fn status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "resolved" | "closed" => "bg-green-500/20 text-green-300",
        "rejected" => "bg-red-500/20 text-red-300",
        "in progress" | "under review" => "bg-yellow-500/20 text-yellow-300",
        _ => "bg-gray-500/20 text-gray-300",
    }
}

/// Case history with client-side search and date filtering.
#[function_component(CaseHistory)]
pub fn case_history() -> Html {
    let authenticated = use_require_session();
    let search = use_state(String::new);
    let date_filter = use_state(|| None::<NaiveDate>);

    let (cases_state, refetch) = use_fetch_with_refetch(authenticated, || async {
        list_cases().await.map_err(|err| err.to_string())
    });

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_date = {
        let date_filter = date_filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date_filter.set(NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok());
        })
    };

    if !authenticated {
        return html! {};
    }

    let body = match &*cases_state {
        FetchState::NotStarted | FetchState::Loading => html! { <Loading /> },
        FetchState::Error(message) => html! {
            <ErrorDisplay
                message={message.clone()}
                on_retry={Some(refetch.clone())}
            />
        },
        FetchState::Success(cases) => {
            let visible = filter_cases(cases, &search, *date_filter);
            if visible.is_empty() {
                html! {
                    <p class="text-center text-gray-300 py-12">
                        {"No cases match your filters."}
                    </p>
                }
            } else {
                html! {
                    <ul class="space-y-4">
                        {for visible.iter().map(|case| render_case(case))}
                    </ul>
                }
            }
        }
    };

    html! {
        <>
            <Navbar />
            <div class="min-h-screen bg-gray-900 text-white p-6">
                <div class="max-w-3xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-8">{"Your Cases"}</h2>

                    <div class="flex flex-col sm:flex-row gap-4 mb-8">
                        <input
                            type="text"
                            value={(*search).clone()}
                            oninput={on_search}
                            placeholder="Search by title or case ID"
                            class="flex-1 p-3 bg-white/10 border border-white/20 rounded-xl placeholder-gray-300"
                        />
                        <input
                            type="date"
                            oninput={on_date}
                            class="p-3 bg-white/10 border border-white/20 rounded-xl"
                        />
                    </div>

                    {body}
                </div>
            </div>
        </>
    }
}

fn render_case(case: &CaseSummary) -> Html {
    html! {
        <li key={case.id.clone()} class="border border-white/20 bg-white/10 rounded-2xl p-5 flex items-center justify-between">
            <div>
                <p class="font-semibold">{&case.title}</p>
                <p class="text-sm text-gray-300">{format!("#{} · {}", case.id, case.date)}</p>
            </div>
            <span class={classes!("px-3", "py-1", "rounded-full", "text-sm", status_class(&case.status))}>
                {&case.status}
            </span>
        </li>
    }
}
