use yew::prelude::*;

use crate::reveal::{use_reveal, InViewOptions, StaggerPlan};
use crate::utils::parallax::{use_mouse_parallax, use_parallax, DEFAULT_MOUSE_SPEED, DEFAULT_SCROLL_SPEED};

pub const PLAN: &[(&str, u32)] = &[("heading", 0), ("title", 300)];

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), StaggerPlan::new(PLAN), InViewOptions::default());
    let background = use_parallax(DEFAULT_SCROLL_SPEED);
    let logo = use_mouse_parallax(DEFAULT_MOUSE_SPEED);

    html! {
        <section ref={node} id="hero" class="hero">
            <div class="hero-background parallax-bg" style={background}></div>
            <div class="hero-content">
                <img class="hero-logo" style={logo} src="/images/mainlogo.jpeg" alt="レリモバ" />
                <h2 class={classes!("hero-heading", reveal.fade("heading"))}>
                    {"「トークン」がもらえる格安モバイル"}
                </h2>
                <p class={classes!("hero-subtitle", reveal.fade("title"))}>
                    {"毎月の利用料金に応じて、RELiCトークンを還元します。"}
                </p>
                <a href="#content" class="hero-scroll">{"↓"}</a>
            </div>
        </section>
    }
}
