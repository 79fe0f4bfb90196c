use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; font-family: sans-serif;">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>
                {"Back to the home page"}
            </Link<Route>>
        </div>
    }
}
