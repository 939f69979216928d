use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::cases::{submit_crypto_case, CryptoLossForm, CRYPTO_TYPES};
use crate::api_client::ApiError;
use crate::common::toast::ToastContext;
use crate::components::navbar::Navbar;
use crate::hooks::use_require_session;
use crate::Route;

struct TextField {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    required: bool,
    step: Option<&'static str>,
    placeholder: &'static str,
}

const AMOUNT_FIELDS: &[TextField] = &[
    TextField {
        name: "amount_lost",
        label: "Amount Lost (in cryptocurrency)",
        input_type: "number",
        required: true,
        step: Some("0.00000001"),
        placeholder: "e.g., 1500.00000000",
    },
    TextField {
        name: "usdt_value",
        label: "Value in USDT",
        input_type: "number",
        required: true,
        step: Some("0.00000001"),
        placeholder: "e.g., 1500.00000000",
    },
];

const TRANSACTION_FIELDS: &[TextField] = &[
    TextField {
        name: "txid",
        label: "Transaction ID / Hash",
        input_type: "text",
        required: true,
        step: None,
        placeholder: "e.g., 0x123456abcdef7890",
    },
    TextField {
        name: "sender_wallet",
        label: "Sender Wallet Address",
        input_type: "text",
        required: true,
        step: None,
        placeholder: "e.g., 0xSenderWalletAddress123",
    },
    TextField {
        name: "receiver_wallet",
        label: "Receiver Wallet Address",
        input_type: "text",
        required: true,
        step: None,
        placeholder: "e.g., 0xReceiverWalletAddress456",
    },
    TextField {
        name: "platform_used",
        label: "Platform/Exchange Used",
        input_type: "text",
        required: true,
        step: None,
        placeholder: "e.g., FakeTradingPro",
    },
    TextField {
        name: "blockchain_hash",
        label: "Blockchain Hash (if different from txid)",
        input_type: "text",
        required: false,
        step: None,
        placeholder: "e.g., 0xblockhashabc123",
    },
    TextField {
        name: "payment_method",
        label: "Payment Method",
        input_type: "text",
        required: false,
        step: None,
        placeholder: "e.g., Crypto transfer",
    },
];

const INPUT_CLASS: &str =
    "w-full p-3 bg-white/10 border border-white/20 text-white rounded-xl placeholder-gray-300";

/// Crypto-loss intake form. Gated; one multipart submission per user
/// action.
#[function_component(CryptoLoss)]
pub fn crypto_loss() -> Html {
    let authenticated = use_require_session();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let form = use_state(CryptoLossForm::default);
    let submitting = use_state(|| false);
    let navigator = use_navigator().unwrap();

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(&input.name(), input.value());
            form.set(next);
        })
    };

    let on_textarea = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(&area.name(), area.value());
            form.set(next);
        })
    };

    let on_select = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(&select.name(), select.value());
            form.set(next);
        })
    };

    let on_files = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut files = Vec::new();
            if let Some(list) = input.files() {
                for i in 0..list.length() {
                    if let Some(file) = list.get(i) {
                        files.push(file);
                    }
                }
            }
            let mut next = (*form).clone();
            next.supporting_documents = files;
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let toast_ctx = toast_ctx.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = (*form).clone();
            let submitting = submitting.clone();
            let toast_ctx = toast_ctx.clone();
            let navigator = navigator.clone();
            submitting.set(true);
            spawn_local(async move {
                match submit_crypto_case(&form).await {
                    Ok(_) => toast_ctx.show_success("Report submitted successfully.".to_string()),
                    Err(err) if err.is_session_invalid() => navigator.push(&Route::Login),
                    Err(ApiError::Timeout) => {
                        log::warn!("Crypto case submission timed out");
                        toast_ctx.show_error(
                            "The submission timed out. Please try again.".to_string(),
                        );
                    }
                    Err(err) => {
                        log::error!("Crypto case submission failed: {}", err);
                        toast_ctx.show_error(format!(
                            "There was an error submitting the report: {err}"
                        ));
                    }
                }
                submitting.set(false);
            });
        })
    };

    if !authenticated {
        return html! {};
    }

    let text_field = |field: &TextField| {
        html! {
            <div key={field.name}>
                <label for={field.name} class="block mb-1 font-medium">{field.label}</label>
                <input
                    id={field.name}
                    name={field.name}
                    type={field.input_type}
                    step={field.step.unwrap_or_default()}
                    required={field.required}
                    oninput={on_input.clone()}
                    placeholder={field.placeholder}
                    class={INPUT_CLASS}
                />
            </div>
        }
    };

    html! {
        <>
            <Navbar />
            <div class="flex justify-center items-center min-h-screen bg-gray-900 p-6 text-white">
                <div class="w-full max-w-2xl border border-white/20 bg-white/10 rounded-2xl shadow-xl p-8">
                    <h2 class="text-3xl font-bold text-center mb-8">{"Report Crypto Loss"}</h2>

                    <form class="space-y-6" onsubmit={on_submit}>
                        <div>
                            <label for="title" class="block mb-1 font-medium">{"Case Title"}</label>
                            <input
                                id="title" name="title" type="text" required=true
                                oninput={on_input.clone()}
                                placeholder="Brief title describing your crypto loss"
                                class={INPUT_CLASS}
                            />
                        </div>

                        <div>
                            <label for="description" class="block mb-1 font-medium">{"Case Description"}</label>
                            <textarea
                                id="description" name="description" rows="3" required=true
                                oninput={on_textarea.clone()}
                                placeholder="Brief overview of the incident"
                                class={INPUT_CLASS}
                            />
                        </div>

                        <div>
                            <label for="crypto_type" class="block mb-1 font-medium">{"Cryptocurrency Type"}</label>
                            <select
                                id="crypto_type" name="crypto_type" required=true
                                onchange={on_select.clone()}
                                class={INPUT_CLASS}
                            >
                                {for CRYPTO_TYPES.iter().map(|option| html! {
                                    <option key={*option} value={*option} selected={form.crypto_type == *option}>
                                        {option}
                                    </option>
                                })}
                            </select>
                        </div>

                        {for AMOUNT_FIELDS.iter().map(&text_field)}
                        {for TRANSACTION_FIELDS.iter().map(&text_field)}

                        <div>
                            <label for="exchange_info" class="block mb-1 font-medium">{"Exchange Information (optional)"}</label>
                            <textarea
                                id="exchange_info" name="exchange_info" rows="2"
                                oninput={on_textarea.clone()}
                                placeholder="Additional information about the exchange or platform"
                                class={INPUT_CLASS}
                            />
                        </div>

                        <div>
                            <label for="wallet_backup" class="block mb-1 font-medium">{"Wallet Backup Information"}</label>
                            <select
                                id="wallet_backup" name="wallet_backup" required=true
                                onchange={on_select}
                                class={INPUT_CLASS}
                            >
                                <option value="" selected={form.wallet_backup.is_empty()}>{"Select wallet backup status"}</option>
                                <option value="True">{"Yes, I have wallet backup"}</option>
                                <option value="False">{"No, I don't have wallet backup"}</option>
                            </select>
                        </div>

                        <div>
                            <label for="transaction_datetime" class="block mb-1 font-medium">{"Date & Time of Transaction"}</label>
                            <input
                                id="transaction_datetime" name="transaction_datetime"
                                type="datetime-local" required=true
                                oninput={on_input.clone()}
                                class={INPUT_CLASS}
                            />
                        </div>

                        <div>
                            <label for="loss_description" class="block mb-1 font-medium">{"Detailed Description of Loss/Incident"}</label>
                            <textarea
                                id="loss_description" name="loss_description" rows="4" required=true
                                oninput={on_textarea}
                                placeholder="Provide a detailed explanation of how the loss occurred"
                                class={INPUT_CLASS}
                            />
                        </div>

                        <div>
                            <label for="supporting_documents" class="block mb-1 font-medium">{"Supporting Documents (optional)"}</label>
                            <input
                                id="supporting_documents" name="supporting_documents"
                                type="file" multiple=true
                                accept=".png,.jpg,.jpeg,.pdf,.doc,.docx"
                                onchange={on_files}
                                class="w-full p-3 bg-white/10 text-gray-200 border border-white/20 rounded-xl cursor-pointer"
                            />
                            <p class="text-sm text-gray-300 mt-1">{"Upload screenshots, transaction confirmations, communications, etc."}</p>
                        </div>

                        <button
                            type="submit"
                            disabled={*submitting}
                            class="w-full py-3 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-2xl shadow-lg"
                        >
                            {if *submitting { "Submitting..." } else { "Submit Report" }}
                        </button>
                    </form>
                </div>
            </div>
        </>
    }
}
