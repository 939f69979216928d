use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::common::toast::ToastContext;
use crate::Route;

#[derive(Properties, PartialEq)]
struct PrivacyModalProps {
    pub open: bool,
    pub busy: bool,
    pub on_close: Callback<()>,
    pub on_confirm: Callback<()>,
}

#[function_component(PrivacyModal)]
fn privacy_modal(props: &PrivacyModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black/70 flex items-center justify-center z-50">
            <div class="bg-gray-800 border border-gray-700 rounded-lg shadow-xl p-6 max-w-md w-full text-center">
                <h3 class="text-xl font-bold text-white mb-4">{"Join Our Waitlist"}</h3>
                <div class="my-4 text-gray-300 text-left">
                    <p class="mb-2">{"By proceeding, you agree to:"}</p>
                    <ul class="list-disc pl-5 space-y-1">
                        <li>{"Be added to our recovery service waitlist"}</li>
                        <li>{"Receive updates about your case status"}</li>
                        <li>{"Allow us to contact you regarding your recovery request"}</li>
                    </ul>
                    <p class="mt-4">{"We value your privacy and will never share your information with third parties."}</p>
                </div>
                <div class="flex justify-between mt-6">
                    <button
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-700 text-white rounded-lg"
                        onclick={on_close}
                        disabled={props.busy}
                    >
                        {"Cancel"}
                    </button>
                    <button
                        class="px-4 py-2 bg-gradient-to-r from-blue-500 to-blue-700 text-white rounded-lg hover:opacity-90"
                        onclick={on_confirm}
                        disabled={props.busy}
                    >
                        {if props.busy { "Submitting..." } else { "Confirm & Proceed" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Landing hero: headline plus waitlist email capture. The email is only
/// sent after the privacy modal is confirmed.
#[function_component(Hero)]
pub fn hero() -> Html {
    let navigator = use_navigator().unwrap();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let email = use_state(String::new);
    let modal_open = use_state(|| false);
    let busy = use_state(|| false);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let modal_open = modal_open.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            modal_open.set(true);
        })
    };

    let on_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    let on_confirm = {
        let navigator = navigator.clone();
        let toast_ctx = toast_ctx.clone();
        let email = email.clone();
        let modal_open = modal_open.clone();
        let busy = busy.clone();
        Callback::from(move |_| {
            let navigator = navigator.clone();
            let toast_ctx = toast_ctx.clone();
            let email = (*email).clone();
            let modal_open = modal_open.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match api_client::auth::create_email_lead(&email).await {
                    Ok(_) => {
                        modal_open.set(false);
                        navigator.push(&Route::StartRecovery);
                    }
                    Err(err) => {
                        log::error!("Waitlist submission failed: {}", err);
                        toast_ctx.show_error(format!("Could not join the waitlist: {err}"));
                        modal_open.set(false);
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="px-6 py-16 text-left max-w-full mx-auto">
            <div class="w-full md:w-2/3">
                <p class="text-white text-lg mb-2">
                    {"Get expert assistance in retrieving lost funds from scam, fraud and unauthorized transactions. \
                      Our secure, fast, and effective recovery process ensures you get the justice deserved."}
                </p>
                <h1 class="text-4xl md:text-5xl font-bold text-white mt-4">
                    {"Recover Your Lost Money with Confidence"}
                </h1>
                <form class="mt-8 flex flex-col sm:flex-row gap-3 max-w-lg" onsubmit={on_submit}>
                    <input
                        type="email"
                        required=true
                        placeholder="Your email address"
                        value={(*email).clone()}
                        oninput={on_email_input}
                        class="flex-1 p-3 bg-white/10 border border-white/20 text-white rounded-xl placeholder-gray-300"
                    />
                    <button
                        type="submit"
                        class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-xl"
                    >
                        {"Start Recovery"}
                    </button>
                </form>
            </div>
            <PrivacyModal
                open={*modal_open}
                busy={*busy}
                on_close={on_close}
                on_confirm={on_confirm}
            />
        </div>
    }
}
