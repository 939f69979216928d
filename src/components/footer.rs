use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-black/80 text-gray-300 px-6 py-8 mt-auto border-t border-white/10">
            <div class="flex flex-col md:flex-row justify-between gap-6 max-w-5xl mx-auto">
                <div>
                    <h3 class="text-white font-bold mb-2">{"Safe Trust Recovery"}</h3>
                    <p class="text-sm max-w-xs">
                        {"Helping fraud victims recover lost funds and accounts, securely and quickly."}
                    </p>
                </div>
                <ul class="text-sm space-y-1">
                    <li><Link<Route> to={Route::StartRecovery} classes="hover:text-blue-400">{"Start Recovery"}</Link<Route>></li>
                    <li><Link<Route> to={Route::CaseHistory} classes="hover:text-blue-400">{"Case History"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Language} classes="hover:text-blue-400">{"Language"}</Link<Route>></li>
                </ul>
            </div>
            <p class="text-xs text-center mt-6 text-gray-500">
                {"© 2025 Safe Trust Recovery. All rights reserved."}
            </p>
        </footer>
    }
}
