use yew::prelude::*;

use crate::api_client::notifications::{list_notifications, Notification};
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::common::use_fetch_with_refetch;
use crate::components::navbar::Navbar;
use crate::hooks::{use_require_session, FetchState};

#[function_component(Notifications)]
pub fn notifications() -> Html {
    let authenticated = use_require_session();

    let (state, refetch) = use_fetch_with_refetch(authenticated, || async {
        list_notifications().await.map_err(|err| err.to_string())
    });

    if !authenticated {
        return html! {};
    }

    let body = match &*state {
        FetchState::NotStarted | FetchState::Loading => html! { <Loading /> },
        FetchState::Error(message) => html! {
            <ErrorDisplay message={message.clone()} on_retry={Some(refetch.clone())} />
        },
        FetchState::Success(items) if items.is_empty() => html! {
            <p class="text-center text-gray-300 py-12">{"No notifications yet."}</p>
        },
        FetchState::Success(items) => html! {
            <ul class="space-y-4">
                {for items.iter().map(render_notification)}
            </ul>
        },
    };

    html! {
        <>
            <Navbar />
            <div class="min-h-screen bg-gray-900 text-white p-6">
                <div class="max-w-2xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-8">{"Notifications"}</h2>
                    {body}
                </div>
            </div>
        </>
    }
}

fn render_notification(item: &Notification) -> Html {
    let card_class = if item.read {
        "border border-white/10 bg-white/5 rounded-2xl p-5"
    } else {
        "border border-blue-400/40 bg-blue-500/10 rounded-2xl p-5"
    };

    html! {
        <li key={item.id} class={card_class}>
            <div class="flex items-center justify-between">
                <p class="font-semibold">{&item.title}</p>
                if !item.read {
                    <span class="text-xs px-2 py-0.5 rounded-full bg-blue-600 text-white">{"New"}</span>
                }
            </div>
            <p class="text-sm text-gray-300 mt-1">{&item.message}</p>
            <p class="text-xs text-gray-400 mt-2">{&item.created_at}</p>
        </li>
    }
}
