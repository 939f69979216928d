use yew::prelude::*;

struct SocialLink {
    label: &'static str,
    url: &'static str,
    hover: &'static str,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", url: "https://facebook.com", hover: "hover:text-blue-500" },
    SocialLink { label: "Twitter", url: "https://twitter.com", hover: "hover:text-blue-400" },
    SocialLink { label: "Instagram", url: "https://instagram.com", hover: "hover:text-pink-500" },
    SocialLink { label: "LinkedIn", url: "https://linkedin.com", hover: "hover:text-blue-600" },
    SocialLink { label: "GitHub", url: "https://github.com", hover: "hover:text-gray-400" },
];

/// Support / contact page: external social profiles only.
#[function_component(Socials)]
pub fn socials() -> Html {
    html! {
        <div class="flex items-center justify-center min-h-screen bg-black/90 p-4">
            <div class="bg-white/5 border border-white rounded-2xl shadow-lg p-10 max-w-lg w-full text-center backdrop-blur-md">
                <h1 class="text-4xl font-extrabold text-white mb-8">{"Connect With Us"}</h1>
                <div class="flex justify-center gap-6 flex-wrap">
                    {for SOCIAL_LINKS.iter().map(|link| html! {
                        <a
                            key={link.label}
                            href={link.url}
                            target="_blank"
                            rel="noopener noreferrer"
                            class={classes!("text-white", "font-semibold", "transition-all", link.hover)}
                        >
                            {link.label}
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}
