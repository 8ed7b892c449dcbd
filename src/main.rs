use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod hooks;
mod menu;
mod scroll;
mod components {
    pub mod dashboard_preview;
    pub mod feature_card;
    pub mod icons;
    pub mod mobile_menu;
    pub mod nav;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    not_found::NotFound,
};
use scroll::ScrollHandle;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, scroll: &ScrollHandle) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing scroll={scroll.clone()} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Where the header reads the page scroll from.
    pub scroll: ScrollHandle,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let render = {
        let scroll = props.scroll.clone();
        Callback::from(move |route: Route| switch(route, &scroll))
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        scroll: ScrollHandle::browser(),
    })
    .render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_lives_at_root() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::NotFound.to_path(), "/404");
    }
}
