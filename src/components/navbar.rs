use yew::prelude::*;
use yew_router::prelude::*;

use super::notification_bell::NotificationBell;
use crate::locale::{self, LANGUAGES};
use crate::session;
use crate::Route;

struct NavItem {
    label: &'static str,
    route: Route,
}

const AUTH_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", route: Route::Dashboard },
    NavItem { label: "Submit Case", route: Route::SubmitCase },
    NavItem { label: "My Cases", route: Route::Cases },
];

const GUEST_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", route: Route::Home },
    NavItem { label: "Login", route: Route::Login },
    NavItem { label: "SignUp", route: Route::Signup },
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigator = use_navigator().unwrap();
    let menu_open = use_state(|| false);
    let language = use_state(|| locale::saved_language().unwrap_or_else(|| "en".to_string()));

    // Re-apply the saved preference once per navbar mount so a reload
    // keeps the translated page.
    {
        let language = language.clone();
        use_effect_with((), move |_| {
            if *language != "en" {
                locale::apply_locale(&language);
            }
            || ()
        });
    }

    let authenticated = session::is_authenticated();

    let on_language_change = {
        let language = language.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let code = select.value();
            log::info!("User selected language: {}", code);
            locale::save_language(&code);
            locale::apply_locale(&code);
            language.set(code);
        })
    };

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session::logout();
            navigator.push(&Route::Login);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let items = if authenticated { AUTH_ITEMS } else { GUEST_ITEMS };

    let nav_button = |item: &NavItem| {
        let navigator = navigator.clone();
        let route = item.route.clone();
        let menu_open = menu_open.clone();
        html! {
            <button
                key={item.label}
                class="px-4 py-2 bg-gray-800 text-white rounded-lg hover:bg-blue-600 transition"
                onclick={Callback::from(move |_| {
                    navigator.push(&route);
                    menu_open.set(false);
                })}
            >
                {item.label}
            </button>
        }
    };

    let language_select = html! {
        <select
            class="bg-gray-800 text-white text-sm rounded-lg px-2 py-2 border border-gray-600 cursor-pointer"
            onchange={on_language_change.clone()}
        >
            {for LANGUAGES.iter().map(|lang| html! {
                <option
                    key={lang.code}
                    value={lang.code}
                    selected={*language == lang.code}
                >
                    {lang.name}
                </option>
            })}
        </select>
    };

    html! {
        <nav class="bg-black/70 backdrop-blur-md text-white p-4 flex justify-between items-center border-black border-2 shadow-md relative z-40">
            <h1
                class="text-xl font-bold cursor-pointer mr-4"
                onclick={{
                    let navigator = navigator.clone();
                    Callback::from(move |_| navigator.push(&Route::Home))
                }}
            >
                {"Safe Trust Recovery"}
            </h1>

            // Desktop menu
            <div class="hidden md:flex items-center space-x-4">
                {for items.iter().map(&nav_button)}
                if authenticated {
                    <button
                        class="px-4 py-2 bg-gray-800 text-white rounded-lg hover:bg-blue-600 transition"
                        onclick={on_logout.clone()}
                    >
                        {"Logout"}
                    </button>
                }
                {language_select.clone()}
                if authenticated {
                    <NotificationBell />
                }
            </div>

            // Mobile menu button
            <button class="md:hidden" onclick={toggle_menu}>
                {if *menu_open { "✕" } else { "☰" }}
            </button>

            if *menu_open {
                <div class="absolute top-16 right-4 w-48 bg-gray-800 text-white shadow-lg rounded-lg md:hidden border border-gray-600 z-50">
                    <ul class="flex flex-col space-y-2 px-2 py-2">
                        {for items.iter().map(|item| html!{ <li key={item.label}>{nav_button(item)}</li> })}
                        if authenticated {
                            <li>
                                <button
                                    class="px-4 py-2 bg-gray-800 text-white rounded-lg hover:bg-blue-600 transition w-full text-left"
                                    onclick={on_logout}
                                >
                                    {"Logout"}
                                </button>
                            </li>
                        }
                        <li>{language_select}</li>
                        if authenticated {
                            <li class="flex justify-center pt-2"><NotificationBell /></li>
                        }
                    </ul>
                </div>
            }
        </nav>
    }
}
