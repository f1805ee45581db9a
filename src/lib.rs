use log::info;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod styles;

pub mod hooks {
    pub mod media_query;
}

pub mod components {
    pub mod about;
    pub mod footer;
    pub mod hero;
    pub mod mascot;
    pub mod navbar;
}

pub mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global css={styles::GLOBAL_CSS} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
