use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navbar::Navbar;
use crate::Route;

struct RecoveryOption {
    title: &'static str,
    description: &'static str,
    route: Route,
}

const OPTIONS: &[RecoveryOption] = &[
    RecoveryOption {
        title: "Crypto Loss",
        description: "Report stolen or scammed cryptocurrency.",
        route: Route::CryptoRecovery,
    },
    RecoveryOption {
        title: "Money Recovery",
        description: "Report bank fraud or an unauthorized transfer.",
        route: Route::MoneyRecovery,
    },
    RecoveryOption {
        title: "Social Media Recovery",
        description: "Recover a hacked or locked account.",
        route: Route::SocialsRecovery,
    },
];

/// Chooser between the three intake forms.
#[function_component(RecoveryOptions)]
pub fn recovery_options() -> Html {
    html! {
        <>
            <Navbar />
            <div class="min-h-screen bg-gray-900 text-white p-6">
                <h2 class="text-3xl font-bold text-center my-8">{"What do you need to recover?"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-4xl mx-auto">
                    {for OPTIONS.iter().map(|option| html! {
                        <Link<Route>
                            to={option.route.clone()}
                            classes="block p-6 bg-black/30 rounded-xl border border-white/20 hover:border-blue-400 hover:scale-[1.02] transition"
                        >
                            <h3 class="font-bold mb-2">{option.title}</h3>
                            <p class="text-sm text-gray-300">{option.description}</p>
                        </Link<Route>>
                    })}
                </div>
            </div>
        </>
    }
}
