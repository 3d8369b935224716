use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::cta_button::{Animation, CtaButton, Size, Variant};
use crate::components::mobile_menu::MobileMenu;
use crate::config::{site, HEADER_SCROLLED_PX};
use crate::context::{scroll_to_section, use_app, AppAction};

/// Label and anchor id of every in-page jump, top to bottom.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("トップ", "hero"),
    ("レリモバについて", "feature"),
    ("特典・キャンペーン", "token"),
    ("プランと料金", "plans"),
    ("よくある質問", "faq"),
    ("RELiCについて", "about"),
];

#[derive(Properties, PartialEq)]
pub struct NavLinksProps {
    #[prop_or_default]
    pub mobile: bool,
}

#[function_component(NavLinks)]
pub fn nav_links(props: &NavLinksProps) -> Html {
    let app = use_app();
    let class = if props.mobile { "mobile-nav-link" } else { "nav-link" };

    html! {
        <>
            { for NAV_ITEMS.iter().map(|&(label, section)| {
                let app = app.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    scroll_to_section(&app, section);
                });
                html! {
                    <a key={section} href={format!("#{}", section)} {class} {onclick}>
                        {label}
                    </a>
                }
            }) }
        </>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let app = use_app();
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > HEADER_SCROLLED_PX;

    let toggle_menu = {
        let app = app.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            app.dispatch(AppAction::ToggleMenu);
        })
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a href="/" class="nav-logo">
                    <img src="/images/logomv.png" alt="Logo" width="180" height="40" />
                </a>
                <nav class="nav-desktop">
                    <NavLinks />
                </nav>
                <div class="nav-cta">
                    <CtaButton
                        href={site().cta.signup.clone()}
                        external=true
                        variant={Variant::Cta}
                        size={Size::Md}
                        animation={Animation::Bounce}
                    >
                        {"今すぐお申し込み！"}
                    </CtaButton>
                </div>
                <button class="menu-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <MobileMenu />
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unique() {
        let mut ids: Vec<_> = NAV_ITEMS.iter().map(|(_, id)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }
}
