use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{site, FLOATING_SIGNUP_PX};

#[function_component(FloatingSignupButton)]
pub fn floating_signup_button() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let visible = scroll_y > FLOATING_SIGNUP_PX;

    html! {
        <div class={classes!("floating-signup", visible.then_some("visible"))}>
            <a href={site().cta.signup.clone()} target="_blank" rel="noopener noreferrer" class="floating-signup-link">
                <span>{"今すぐお申し込み！"}</span>
                <span class="cta-arrow">{"→"}</span>
            </a>
        </div>
    }
}
