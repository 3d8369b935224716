use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::cta_button::{CtaButton, Size, Variant};
use crate::components::header::NavLinks;
use crate::config::site;
use crate::context::{use_app, AppAction};

/// Clicks on the burger button toggle the menu themselves.
fn is_menu_toggle(e: &Event) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(".menu-toggle").ok().flatten())
        .is_some()
}

#[function_component(MobileMenu)]
pub fn mobile_menu() -> Html {
    let app = use_app();
    let panel = use_node_ref();

    {
        let app = app.clone();
        use_click_away(panel.clone(), move |e: Event| {
            if !is_menu_toggle(&e) {
                app.dispatch(AppAction::CloseMenu);
            }
        });
    }

    {
        let app = app.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                app.dispatch(AppAction::CloseMenu);
            }
        });
    }

    let close = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| app.dispatch(AppAction::CloseMenu))
    };

    let open = app.menu_open;

    html! {
        <>
            if open {
                <div class="menu-overlay"></div>
            }
            <div ref={panel} class={classes!("mobile-menu", open.then_some("open"))}>
                <div class="mobile-menu-header">
                    <button class="mobile-menu-close" onclick={close.clone()} aria-label="Close menu">
                        {"✕"}
                    </button>
                </div>
                <nav class="mobile-menu-nav">
                    <NavLinks mobile=true />
                    <div class="mobile-menu-cta">
                        <CtaButton
                            href={site().cta.signup.clone()}
                            external=true
                            full_width=true
                            variant={Variant::Cta}
                            size={Size::Md}
                            onclick={close}
                        >
                            {"今すぐお申し込み！"}
                        </CtaButton>
                    </div>
                    <div class="mobile-menu-character">
                        <img src="/images/alien.png" alt="Character" width="150" height="200" />
                    </div>
                </nav>
            </div>
        </>
    }
}
