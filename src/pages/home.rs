use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-gray-900">
            <Navbar />
            <Hero />
            <div class="px-6 py-10 grid grid-cols-1 md:grid-cols-3 gap-6 text-white max-w-5xl mx-auto">
                <div class="bg-black/30 rounded-xl border border-white/20 p-6">
                    <h3 class="font-bold mb-2">{"Crypto Loss"}</h3>
                    <p class="text-sm text-gray-300">{"Trace and report stolen cryptocurrency transactions."}</p>
                </div>
                <div class="bg-black/30 rounded-xl border border-white/20 p-6">
                    <h3 class="font-bold mb-2">{"Money Recovery"}</h3>
                    <p class="text-sm text-gray-300">{"Recover funds lost to scams and unauthorized transfers."}</p>
                </div>
                <div class="bg-black/30 rounded-xl border border-white/20 p-6">
                    <h3 class="font-bold mb-2">{"Account Recovery"}</h3>
                    <p class="text-sm text-gray-300">{"Regain access to compromised social-media accounts."}</p>
                </div>
            </div>
            <Footer />
        </div>
    }
}
