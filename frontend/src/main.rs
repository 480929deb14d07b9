mod api;
mod dashboard;
mod env_variable_utils;
mod models;
mod router;
mod utils;

use crate::env_variable_utils::{get_api_base_url, get_app_name, is_debug_mode};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", API: \"{}\", DEBUG: \"{}\"",
        get_app_name(),
        get_api_base_url().as_deref().unwrap_or("not configured"),
        is_debug_mode()
    );
}
