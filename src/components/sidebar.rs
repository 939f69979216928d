use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub struct SidebarItem {
    pub label: &'static str,
    pub route: Route,
}

pub const SIDEBAR_ITEMS: &[SidebarItem] = &[
    SidebarItem { label: "Submit New Case", route: Route::StartRecovery },
    SidebarItem { label: "My Case History", route: Route::CaseHistory },
    SidebarItem { label: "Support", route: Route::Socials },
];

/// Dashboard quick-nav. Static column on large screens, slide-in panel
/// behind a floating toggle on small ones.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let open = use_state(|| false);
    let navigator = use_navigator().unwrap();
    let current = use_route::<Route>();

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let panel_class = if *open {
        "fixed inset-y-0 left-0 w-64 p-4 h-screen bg-black/60 backdrop-blur-md text-white border-r border-white/20 shadow-2xl z-50 translate-x-0 lg:static lg:block"
    } else {
        "fixed inset-y-0 left-0 w-64 p-4 h-screen bg-black/60 backdrop-blur-md text-white border-r border-white/20 shadow-2xl z-50 -translate-x-full lg:static lg:translate-x-0 lg:block"
    };

    html! {
        <div class="relative z-50">
            if *open {
                <div
                    class="fixed inset-0 bg-black/60 backdrop-blur-sm z-40 lg:hidden"
                    onclick={toggle.clone()}
                />
            } else {
                <button
                    class="lg:hidden fixed top-20 left-4 z-50 p-3 bg-blue-600 text-white rounded-full shadow-lg"
                    onclick={toggle.clone()}
                    aria-label="Open Sidebar"
                >
                    {"☰"}
                </button>
            }

            <div class={panel_class}>
                <div class="lg:hidden flex justify-end mb-4">
                    <button onclick={toggle} aria-label="Close Sidebar" class="p-2">
                        {"✕"}
                    </button>
                </div>

                <h2 class="text-2xl font-bold mb-6">{"Dashboard"}</h2>
                <ul>
                    {for SIDEBAR_ITEMS.iter().map(|item| {
                        let active = current == Some(item.route);
                        let navigator = navigator.clone();
                        let open = open.clone();
                        let route = item.route;
                        let item_class = if active {
                            "flex items-center px-4 py-2 w-full text-left rounded-lg bg-blue-700 border border-white/20"
                        } else {
                            "flex items-center px-4 py-2 w-full text-left rounded-lg border border-transparent hover:bg-blue-600 hover:border-white/10"
                        };
                        html! {
                            <li key={item.label} class="mb-4">
                                <button
                                    class={item_class}
                                    onclick={Callback::from(move |_| {
                                        navigator.push(&route);
                                        open.set(false);
                                    })}
                                >
                                    {item.label}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_nav_covers_intake_history_and_support() {
        let labels: Vec<_> = SIDEBAR_ITEMS.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Submit New Case", "My Case History", "Support"]);
        assert_eq!(SIDEBAR_ITEMS[0].route, Route::StartRecovery);
        assert_eq!(SIDEBAR_ITEMS[2].route, Route::Socials);
    }
}
