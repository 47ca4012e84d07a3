use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::KioskVariant;
use crate::pages::kiosk::KioskPage;
use crate::pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Showcase,
    #[at("/buzzwire")]
    Buzzwire,
    #[at("/greentel")]
    Greentel,
    #[at("/aerophone/wheel")]
    Aerophone,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    let variant = match route {
        Route::Showcase => KioskVariant::Showcase,
        Route::Buzzwire => KioskVariant::Buzzwire,
        Route::Greentel => KioskVariant::Greentel,
        Route::Aerophone => KioskVariant::Aerophone,
        Route::NotFound => return html! { <NotFound /> },
    };
    // Keyed so switching routes remounts the scene with fresh timers.
    html! { <KioskPage key={format!("{:?}", variant)} {variant} /> }
}
