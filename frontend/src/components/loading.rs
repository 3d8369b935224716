use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::LOADING_FADE_MS;
use crate::context::use_app;

/// Full-screen splash that fades once the page reports loaded and is
/// unmounted after the fade finishes.
#[function_component(Loading)]
pub fn loading() -> Html {
    let app = use_app();
    let hidden = use_state_eq(|| false);
    let loaded = app.page_loaded;

    {
        let hidden = hidden.clone();
        use_effect_with_deps(
            move |loaded| {
                let timeout = loaded.then(|| Timeout::new(LOADING_FADE_MS, move || hidden.set(true)));
                move || drop(timeout)
            },
            loaded,
        );
    }

    if *hidden {
        return html! {};
    }

    html! {
        <div class={classes!("loading-screen", loaded.then_some("fading"))}>
            <div class="loading-dots">
                { for [0, 150, 300, 450].iter().map(|delay| html! {
                    <div class="loading-dot" style={format!("animation-delay: {}ms;", delay)}></div>
                }) }
            </div>
            <div class="loading-text">{"Loading your experience..."}</div>
        </div>
    }
}
