use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navbar::Navbar;
use crate::locale::{apply_locale, save_language, saved_language, LANGUAGES};
use crate::Route;

/// Full-page language picker. Selection takes effect immediately and is
/// remembered in a cookie; Save just returns the user home.
#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let selected = use_state(|| saved_language().unwrap_or_else(|| "en".to_string()));
    let navigator = use_navigator().unwrap();

    let on_pick = {
        let selected = selected.clone();
        Callback::from(move |code: &'static str| {
            save_language(code);
            apply_locale(code);
            selected.set(code.to_string());
        })
    };

    let on_save = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Home))
    };

    html! {
        <>
            <Navbar />
            <div class="min-h-screen flex items-center justify-center bg-gray-900 p-6">
                <div class="w-full max-w-md bg-white/10 border border-white/20 backdrop-blur-md p-8 rounded-2xl shadow-xl">
                    <h1 class="text-2xl font-bold text-white mb-6 text-center">
                        {"Select Your Language"}
                    </h1>
                    <div class="space-y-4">
                        {for LANGUAGES.iter().map(|lang| {
                            let on_pick = on_pick.clone();
                            let code = lang.code;
                            let button_class = if *selected == code {
                                "w-full py-3 px-4 rounded-lg text-white font-medium bg-blue-600 border-2 border-white"
                            } else {
                                "w-full py-3 px-4 rounded-lg text-white font-medium bg-gray-800 hover:bg-blue-600"
                            };
                            html! {
                                <button
                                    key={code}
                                    class={button_class}
                                    onclick={Callback::from(move |_| on_pick.emit(code))}
                                >
                                    {lang.name}
                                </button>
                            }
                        })}
                    </div>
                    <button
                        class="w-full mt-6 py-3 px-4 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium"
                        onclick={on_save}
                    >
                        {"Save"}
                    </button>
                </div>
            </div>
        </>
    }
}
