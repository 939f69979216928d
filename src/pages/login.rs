use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::common::toast::ToastContext;
use crate::components::navbar::Navbar;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let navigator = use_navigator().unwrap();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let navigator = navigator.clone();
        let toast_ctx = toast_ctx.clone();
        let email = email.clone();
        let password = password.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let navigator = navigator.clone();
            let toast_ctx = toast_ctx.clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match api_client::auth::login(&email, &password).await {
                    Ok(()) => navigator.push(&Route::Dashboard),
                    Err(err) => toast_ctx.show_error(format!("Login failed: {err}")),
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
                    <h2 class="text-3xl font-bold text-center mb-8">{"Login"}</h2>
                    <form class="space-y-6" onsubmit={on_submit}>
                        <div>
                            <label for="email" class="block mb-1 font-medium">{"Email"}</label>
                            <input
                                id="email"
                                type="email"
                                required=true
                                value={(*email).clone()}
                                oninput={on_email}
                                class="w-full p-3 bg-white/10 border border-white/20 text-white rounded-xl"
                            />
                        </div>
                        <div>
                            <label for="password" class="block mb-1 font-medium">{"Password"}</label>
                            <input
                                id="password"
                                type="password"
                                required=true
                                value={(*password).clone()}
                                oninput={on_password}
                                class="w-full p-3 bg-white/10 border border-white/20 text-white rounded-xl"
                            />
                        </div>
                        <button
                            type="submit"
                            disabled={*busy}
                            class="w-full py-3 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-2xl"
                        >
                            {if *busy { "Signing in..." } else { "Login" }}
                        </button>
                    </form>
                    <p class="text-sm text-gray-300 text-center mt-4">
                        {"No account yet? "}
                        <Link<Route> to={Route::Signup} classes="text-blue-400 hover:underline">{"Sign up"}</Link<Route>>
                    </p>
                </div>
            </div>
        </>
    }
}
