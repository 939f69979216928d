use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4 text-white">
            <div class="max-w-lg w-full bg-red-900/40 border border-red-500/50 rounded-xl p-4">
                <p class="font-semibold">{"Something went wrong"}</p>
                <p class="text-sm text-gray-300 mt-1">{&props.message}</p>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        {"Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
