pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::GradientBackground;
use crate::pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <GradientBackground>
                <Switch<Route> render={switch} />
            </GradientBackground>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Home => html! { <Home /> },
       // The page has a single view; anything else lands on it.
       Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
   }
}
