use yew::prelude::*;

mod config;
mod pages {
    pub mod landing;
    pub mod studio;
}
mod utils {
    pub mod api;
}

use pages::landing::{Footer, Hero};
use pages::studio::Studio;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo(|_| config::studio_config(), ());

    html! {
        <div class="page">
            <Hero />
            <Studio config={(*config).clone()} />
            <Footer />
            <style>
                {r#"
        body {
            margin: 0;
            font-family: 'Inter', system-ui, sans-serif;
            background: #0b0f24;
        }
        .page {
            min-height: 100vh;
            width: 100%;
            background: #0b0f24;
        }
                "#}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
