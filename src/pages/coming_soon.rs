use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Placeholder for features that are not live yet.
#[function_component(ComingSoon)]
pub fn coming_soon() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-black/90 p-4">
            <div class="bg-white/5 border border-white rounded-2xl shadow-lg p-10 max-w-md w-full text-center backdrop-blur-md">
                <div class="flex justify-center mb-6 text-4xl animate-pulse">{"⏳"}</div>
                <h1 class="text-5xl font-extrabold text-white">{"Coming Soon"}</h1>
                <p class="mt-6 text-lg text-gray-300">{"We are working hard to bring you this feature."}</p>
                <p class="mt-2 text-lg text-gray-300">{"Stay tuned!"}</p>
                <div class="mt-8 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <Link<Route>
                        to={Route::Home}
                        classes="px-6 py-3 rounded-2xl bg-blue-500 hover:bg-blue-600 text-white font-semibold shadow-md transition-all"
                    >
                        {"Go Back Home"}
                    </Link<Route>>
                    <Link<Route>
                        to={Route::Socials}
                        classes="px-6 py-3 rounded-2xl bg-gray-700 hover:bg-gray-600 text-white font-semibold shadow-md transition-all"
                    >
                        {"Connect With Us"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
