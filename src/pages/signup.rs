use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::common::toast::ToastContext;
use crate::components::navbar::Navbar;
use crate::Route;

#[function_component(Signup)]
pub fn signup() -> Html {
    let navigator = use_navigator().unwrap();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let busy = use_state(|| false);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_submit = {
        let navigator = navigator.clone();
        let toast_ctx = toast_ctx.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *password != *confirm {
                toast_ctx.show_warning("Passwords do not match.".to_string());
                return;
            }
            let navigator = navigator.clone();
            let toast_ctx = toast_ctx.clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match api_client::auth::signup(&email, &password).await {
                    Ok(()) => navigator.push(&Route::Dashboard),
                    Err(err) => toast_ctx.show_error(format!("Signup failed: {err}")),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <>
            <Navbar />
            <div class="flex justify-center items-center min-h-screen bg-gray-900 p-6 text-white">
                <div class="w-full max-w-md border border-white/20 bg-white/10 rounded-2xl shadow-xl p-8">
                    <h2 class="text-3xl font-bold text-center mb-8">{"Create an Account"}</h2>
                    <form class="space-y-6" onsubmit={on_submit}>
                        <div>
                            <label for="email" class="block mb-1 font-medium">{"Email"}</label>
                            <input
                                id="email"
                                type="email"
                                required=true
                                value={(*email).clone()}
                                oninput={bind(&email)}
                                class="w-full p-3 bg-white/10 border border-white/20 text-white rounded-xl"
                            />
                        </div>
                        <div>
                            <label for="password" class="block mb-1 font-medium">{"Password"}</label>
                            <input
                                id="password"
                                type="password"
                                required=true
                                minlength="8"
                                value={(*password).clone()}
                                oninput={bind(&password)}
                                class="w-full p-3 bg-white/10 border border-white/20 text-white rounded-xl"
                            />
                        </div>
                        <div>
                            <label for="confirm" class="block mb-1 font-medium">{"Confirm Password"}</label>
                            <input
                                id="confirm"
                                type="password"
                                required=true
                                value={(*confirm).clone()}
                                oninput={bind(&confirm)}
                                class="w-full p-3 bg-white/10 border border-white/20 text-white rounded-xl"
                            />
                        </div>
                        <button
                            type="submit"
                            disabled={*busy}
                            class="w-full py-3 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-2xl"
                        >
                            {if *busy { "Creating account..." } else { "Sign Up" }}
                        </button>
                    </form>
                    <p class="text-sm text-gray-300 text-center mt-4">
                        {"Already registered? "}
                        <Link<Route> to={Route::Login} classes="text-blue-400 hover:underline">{"Login"}</Link<Route>>
                    </p>
                </div>
            </div>
        </>
    }
}
