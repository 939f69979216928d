use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4 text-white">
            <div class="w-8 h-8 border-4 border-blue-400 border-t-transparent rounded-full animate-spin"></div>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm text-gray-300 animate-pulse">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
