use yew::prelude::*;

use crate::config::site;
use crate::reveal::{use_reveal, InViewOptions, StaggerPlan};

pub const PLAN: &[(&str, u32)] = &[("title", 0), ("links", 200)];


#[function_component(ProjectSection)]
pub fn project_section() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), StaggerPlan::new(PLAN), InViewOptions::default());
    let links = &site().links;
    // Label, URL, modifier class.
    let entries = [
        ("RELiC 公式サイト", &links.website, "official"),
        ("RELiCコミュニティ ＠FiNANCiE", &links.community, "community"),
        ("お問い合わせ", &links.contact, "contact"),
    ];

    html! {
        <section ref={node} id="about" class="project-section">
            <div class="container">
                <h2 class={classes!("section-title", reveal.fade("title"))}>
                    {"RELiC "}<span class="accent">{"について"}</span>
                </h2>
                <div class={classes!("project-links", reveal.class("links", "reveal revealed", "reveal from-below"))}>
                    { for entries.iter().map(|&(label, href, kind)| html! {
                        <a href={href.clone()} target="_blank" rel="noopener noreferrer" class={classes!("project-link", kind)}>
                            <span>{label}</span>
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}
