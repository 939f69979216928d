use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
pub mod common;
pub mod components;
pub mod hooks;
pub mod locale;
pub mod pages;
pub mod poller;
pub mod session;
pub mod settings;

use common::toast::ToastProvider;
use pages::case_history::CaseHistory;
use pages::coming_soon::ComingSoon;
use pages::crypto_loss::CryptoLoss;
use pages::dashboard::Dashboard;
use pages::home::Home;
use pages::language::LanguageSelector;
use pages::login::Login;
use pages::money_recovery::MoneyRecovery;
use pages::not_found::NotFound;
use pages::notifications::Notifications;
use pages::recovery_options::RecoveryOptions;
use pages::signup::Signup;
use pages::social_media::SocialMedia;
use pages::socials::Socials;

#[derive(Debug, Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/start-recovery")]
    StartRecovery,
    #[at("/submit-case")]
    SubmitCase,
    #[at("/money-recovery")]
    MoneyRecovery,
    #[at("/crypto-recovery")]
    CryptoRecovery,
    #[at("/socials-recovery")]
    SocialsRecovery,
    #[at("/socials")]
    Socials,
    #[at("/coming-soon")]
    ComingSoon,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    Dashboard,
    #[at("/notifications")]
    Notifications,
    #[at("/cases")]
    Cases,
    #[at("/case-history")]
    CaseHistory,
    #[at("/language")]
    Language,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match route {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Home /> }
        }
        // Both entry points land on the recovery options grid.
        Route::StartRecovery | Route::SubmitCase => {
            log::trace!("Rendering RecoveryOptions page");
            html! { <RecoveryOptions /> }
        }
        Route::MoneyRecovery => {
            log::trace!("Rendering MoneyRecovery page");
            html! { <MoneyRecovery /> }
        }
        Route::CryptoRecovery => {
            log::trace!("Rendering CryptoLoss page");
            html! { <CryptoLoss /> }
        }
        Route::SocialsRecovery => {
            log::trace!("Rendering SocialMedia page");
            html! { <SocialMedia /> }
        }
        Route::Socials => {
            log::trace!("Rendering Socials page");
            html! { <Socials /> }
        }
        Route::ComingSoon => {
            log::trace!("Rendering ComingSoon page");
            html! { <ComingSoon /> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <Login /> }
        }
        Route::Signup => {
            log::trace!("Rendering Signup page");
            html! { <Signup /> }
        }
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Dashboard /> }
        }
        Route::Notifications => {
            log::trace!("Rendering Notifications page");
            html! { <Notifications /> }
        }
        Route::Cases | Route::CaseHistory => {
            log::trace!("Rendering CaseHistory page");
            html! { <CaseHistory /> }
        }
        Route::Language => {
            log::trace!("Rendering LanguageSelector page");
            html! { <LanguageSelector /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Settings must exist before the logger reads its level from them.
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== SafeTrust Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
