use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::property_detail::PropertyDetail;
use config::AppConfig;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load());

    html! {
        <main class="container">
            <PropertyDetail
                property={config.property.clone()}
                reversed_range={config.reversed_range}
            />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
