use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::cases::{submit_money_recovery_case, MoneyRecoveryForm};
use crate::api_client::ApiError;
use crate::common::toast::ToastContext;
use crate::components::navbar::Navbar;
use crate::hooks::use_require_session;
use crate::Route;

const INPUT_CLASS: &str =
    "w-full p-3 bg-white/10 border border-white/20 text-white rounded-xl placeholder-gray-300";

struct TextField {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

const IDENTITY_FIELDS: &[TextField] = &[
    TextField {
        name: "first_name",
        label: "First Name",
        input_type: "text",
        placeholder: "e.g., Jane",
    },
    TextField {
        name: "last_name",
        label: "Last Name",
        input_type: "text",
        placeholder: "e.g., Doe",
    },
    TextField {
        name: "phone",
        label: "Phone Number",
        input_type: "tel",
        placeholder: "e.g., +1 555 000 1234",
    },
    TextField {
        name: "email",
        label: "Email Address",
        input_type: "email",
        placeholder: "e.g., jane@example.com",
    },
    TextField {
        name: "identification",
        label: "Identification Number",
        input_type: "text",
        placeholder: "National ID or passport number",
    },
];

const TRANSFER_FIELDS: &[TextField] = &[
    TextField {
        name: "amount",
        label: "Amount Lost",
        input_type: "number",
        placeholder: "e.g., 2500.00",
    },
    TextField {
        name: "ref_number",
        label: "Transfer Reference Number",
        input_type: "text",
        placeholder: "Reference from your bank statement",
    },
    TextField {
        name: "bank",
        label: "Bank Name",
        input_type: "text",
        placeholder: "e.g., First National Bank",
    },
    TextField {
        name: "iban",
        label: "IBAN / Account Number",
        input_type: "text",
        placeholder: "e.g., DE89370400440532013000",
    },
    TextField {
        name: "datetime",
        label: "Date & Time of Transfer",
        input_type: "datetime-local",
        placeholder: "",
    },
];

/// Lost-money intake form for bank and wire transfer fraud.
#[function_component(MoneyRecovery)]
pub fn money_recovery() -> Html {
    let authenticated = use_require_session();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let form = use_state(MoneyRecoveryForm::default);
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
                match submit_money_recovery_case(&form).await {
                    Ok(_) => {
                        toast_ctx.show_success("Recovery request submitted.".to_string())
                    }
                    Err(err) if err.is_session_invalid() => navigator.push(&Route::Login),
                    Err(ApiError::Timeout) => {
                        log::warn!("Money recovery submission timed out");
                        toast_ctx.show_error(
                            "The submission timed out. Please try again.".to_string(),
                        );
                    }
                    Err(err) => {
                        log::error!("Money recovery submission failed: {}", err);
                        toast_ctx.show_error(format!(
                            "There was an error submitting the request: {err}"
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
                    required=true
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
                    <h2 class="text-3xl font-bold text-center mb-8">{"Recover Lost Money"}</h2>

                    <form class="space-y-6" onsubmit={on_submit}>
                        <div>
                            <label for="title" class="block mb-1 font-medium">{"Case Title"}</label>
                            <input
                                id="title" name="title" type="text" required=true
                                oninput={on_input.clone()}
                                placeholder="Brief title describing your case"
                                class={INPUT_CLASS}
                            />
                        </div>

                        <div>
                            <label for="description" class="block mb-1 font-medium">{"Case Description"}</label>
                            <textarea
                                id="description" name="description" rows="4" required=true
                                oninput={on_textarea}
                                placeholder="Describe how the money was lost"
                                class={INPUT_CLASS}
                            />
                        </div>

                        {for IDENTITY_FIELDS.iter().map(&text_field)}
                        {for TRANSFER_FIELDS.iter().map(&text_field)}

                        <div>
                            <label for="supporting_documents" class="block mb-1 font-medium">{"Supporting Documents (optional)"}</label>
                            <input
                                id="supporting_documents" name="supporting_documents"
                                type="file" multiple=true
                                accept=".png,.jpg,.jpeg,.pdf,.doc,.docx"
                                onchange={on_files}
                                class="w-full p-3 bg-white/10 text-gray-200 border border-white/20 rounded-xl cursor-pointer"
                            />
                            <p class="text-sm text-gray-300 mt-1">{"Upload receipts, bank statements, or any relevant communications."}</p>
                        </div>

                        <button
                            type="submit"
                            disabled={*submitting}
                            class="w-full py-3 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-2xl shadow-lg"
                        >
                            {if *submitting { "Submitting..." } else { "Submit Request" }}
                        </button>
                    </form>
                </div>
            </div>
        </>
    }
}
