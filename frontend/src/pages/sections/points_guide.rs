use yew::prelude::*;

use crate::config::site;
use crate::reveal::{use_reveal, InViewOptions, StaggerPlan};

pub const PLAN: &[(&str, u32)] = &[("title", 0), ("intro", 100), ("steps", 300)];

const SUPPORT_URL: &str = "https://support.financie.jp/hc/ja/requests/new";

const STEPS: &[(&str, &[&str])] = &[
    ("ポイント付与条件", &["レリモバのご利用料金のお支払いが確認できたお客様が対象です。"]),
    ("ポイント付与日程", &["ご利用料金のお支払い確認後、定期的に付与いたします。"]),
    ("ポイント受取方法", &["FiNANCiEアカウントでRELiCコミュニティに参加してお受け取りください。"]),
    ("ポイントの受け取り期限", &["期限を過ぎたポイントは失効します。お早めにお受け取りください。"]),
];

#[function_component(PointsGuideSection)]
pub fn points_guide_section() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), StaggerPlan::new(PLAN), InViewOptions::default());

    html! {
        <section ref={node} class="points-section">
            <div class="container">
                <h2 class={classes!("section-title", reveal.fade("title"))}>
                    {"FiNANCiE "}<span class="accent">{"限定ポイント"}</span>
                </h2>
                <p class={classes!("section-lead", reveal.fade("intro"))}>
                    <a href={site().external.token_guide.clone()} target="_blank" rel="noopener noreferrer">{"こちらの記事"}</a>
                    {"で詳しく解説をしております。ご参照いただければ幸いです。"}
                </p>
                <div class={classes!("points-steps", reveal.class("steps", "reveal revealed", "reveal from-below"))}>
                    { for STEPS.iter().map(|&(title, lines)| html! {
                        <div class="points-step">
                            <h3>{title}</h3>
                            { for lines.iter().map(|l| html! { <p>{*l}</p> }) }
                        </div>
                    }) }
                    <div class="points-step">
                        <h3>{"お問い合わせ"}</h3>
                        <p>
                            <a href={SUPPORT_URL} target="_blank" rel="noopener noreferrer">{"FiNANCiEサポート"}</a>
                        </p>
                        <p>{"受付時間: 営業日 10:00～17:00"}</p>
                        <p>{"回答までの期間: 数日間かかる場合があります。"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
