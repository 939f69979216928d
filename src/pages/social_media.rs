use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::cases::{
    submit_social_media_case, SocialMediaRecoveryForm, SOCIAL_PLATFORMS,
};
use crate::api_client::ApiError;
use crate::common::toast::ToastContext;
use crate::components::navbar::Navbar;
use crate::hooks::use_require_session;
use crate::Route;

const INPUT_CLASS: &str =
    "w-full p-3 bg-white/10 border border-white/20 text-white rounded-xl placeholder-gray-300";

/// Hijacked social-media account recovery form. Only filled-in fields
/// are sent; the backend treats the rest as unknown.
#[function_component(SocialMedia)]
pub fn social_media() -> Html {
    let authenticated = use_require_session();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let form = use_state(SocialMediaRecoveryForm::default);
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

    let on_select = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(&select.name(), select.value());
            form.set(next);
        })
    };

    let on_profile_pic = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.profile_pic = input.files().and_then(|list| list.get(0));
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
                match submit_social_media_case(&form).await {
                    Ok(_) => toast_ctx.show_success("Recovery request submitted.".to_string()),
                    Err(err) if err.is_session_invalid() => navigator.push(&Route::Login),
                    Err(ApiError::Timeout) => {
                        log::warn!("Social media recovery submission timed out");
                        toast_ctx.show_error(
                            "The submission timed out. Please try again.".to_string(),
                        );
                    }
                    Err(err) => {
                        log::error!("Social media recovery submission failed: {}", err);
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

    let text_input = |name: &'static str,
                      label: &'static str,
                      input_type: &'static str,
                      required: bool,
                      placeholder: &'static str| {
        html! {
            <div key={name}>
                <label for={name} class="block mb-1 font-medium">{label}</label>
                <input
                    id={name}
                    name={name}
                    type={input_type}
                    required={required}
                    oninput={on_input.clone()}
                    placeholder={placeholder}
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
                    <h2 class="text-3xl font-bold text-center mb-8">{"Recover Social Media Account"}</h2>

                    <form class="space-y-6" onsubmit={on_submit}>
                        {text_input("title", "Case Title", "text", true, "Brief title describing your case")}

                        <div>
                            <label for="platform" class="block mb-1 font-medium">{"Platform"}</label>
                            <select
                                id="platform" name="platform" required=true
                                onchange={on_select}
                                class={INPUT_CLASS}
                            >
                                <option value="" selected={form.platform.is_empty()}>{"Select a platform"}</option>
                                {for SOCIAL_PLATFORMS.iter().map(|option| html! {
                                    <option key={*option} value={*option} selected={form.platform == *option}>
                                        {option}
                                    </option>
                                })}
                            </select>
                        </div>

                        {text_input("full_name", "Full Name", "text", true, "Name on the account")}
                        {text_input("email", "Email Linked to the Account", "email", true, "e.g., jane@example.com")}
                        {text_input("phone", "Phone Linked to the Account", "tel", false, "e.g., +1 555 000 1234")}
                        {text_input("username", "Username / Handle", "text", true, "e.g., @janedoe")}
                        {text_input("profile_url", "Profile URL", "url", false, "Link to the hijacked profile")}
                        {text_input("account_creation_date", "Account Creation Date (approximate)", "date", false, "")}
                        {text_input("last_access_date", "Last Date You Had Access", "date", false, "")}

                        <div>
                            <label for="profile_pic" class="block mb-1 font-medium">{"Profile Picture (optional)"}</label>
                            <input
                                id="profile_pic" name="profile_pic"
                                type="file"
                                accept=".png,.jpg,.jpeg"
                                onchange={on_profile_pic}
                                class="w-full p-3 bg-white/10 text-gray-200 border border-white/20 rounded-xl cursor-pointer"
                            />
                            <p class="text-sm text-gray-300 mt-1">{"A screenshot or copy of the account's profile picture helps verification."}</p>
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
