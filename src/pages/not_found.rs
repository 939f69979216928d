use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-900 text-white gap-4">
            <h1 class="text-5xl font-bold">{"404"}</h1>
            <p class="text-gray-300">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="px-5 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg">
                {"Back to Home"}
            </Link<Route>>
        </div>
    }
}
