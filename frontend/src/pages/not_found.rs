use yew::prelude::*;
use yew_router::prelude::Link;

use crate::app::Route;
use crate::styles;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class={styles::SCENE}>
            <h1 class={styles::SCENE_TITLE}>{"Nothing here"}</h1>
            <Link<Route> to={Route::Showcase} classes={classes!(styles::LINK)}>
                {"Back to the showcase"}
            </Link<Route>>
        </div>
    }
}
