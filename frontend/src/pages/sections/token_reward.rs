use yew::prelude::*;

use crate::components::cta_button::{Animation, CtaButton, Size, Variant};
use crate::config::site;
use crate::reveal::{use_reveal, InViewOptions, StaggerPlan};

pub const PLAN: &[(&str, u32)] = &[
    ("title", 100),
    ("subtitle", 300),
    ("card1", 500),
    ("card2", 700),
    ("tokenButton", 900),
    ("platform", 1000),
    ("cta", 1300),
];

const MARKET_URL: &str = "https://financie.jp/communities/RELiC/market";

#[function_component(TokenReward)]
pub fn token_reward() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), StaggerPlan::new(PLAN), InViewOptions::default());
    let site = site();

    html! {
        <section ref={node} class="token-section">
            <div class="container">
                <h2 class={classes!("section-title", reveal.fade("title"))}>{"トークン還元"}</h2>
                <p class={classes!("section-lead", reveal.class("subtitle", "reveal revealed", "reveal from-left"))}>
                    {"レリモバは、利用料金に対して「トークン」を毎月還元する新時代の通信サービスです。"}
                </p>
                <div class="card-grid two">
                    <div class={classes!("token-card", reveal.class("card1", "reveal revealed", "reveal from-below"))}>
                        <img src="/images/token.jpg" alt="トークン" loading="lazy" />
                        <h3>{"トークンの特徴"}</h3>
                        <p>{"トークンには価格があり、毎日価格は変動します！"}</p>
                        <p>{"「トークン」は、株のような「値動き」があるのが特徴ですね！"}</p>
                        <a href={MARKET_URL} target="_blank" rel="noopener noreferrer"
                            class={classes!("token-button", reveal.class("tokenButton", "reveal revealed", "reveal from-below"))}>
                            {"レリックトークンをチェック！"}
                        </a>
                    </div>
                    <div class={classes!("token-card", reveal.class("card2", "reveal revealed", "reveal from-below"))}>
                        <img src="/images/reward.jpg" alt="トークンの使い方" loading="lazy" />
                        <h3>{"トークンの使い方"}</h3>
                        <ol>
                            <li>{"日本円に換金できる！"}</li>
                            <li>{"保有してさまざまな特典を楽しみながら応援できる！"}</li>
                            <li>{"友達や家族へプレゼントすることもできる！"}</li>
                        </ol>
                    </div>
                </div>
                <div class={classes!("platform-card", reveal.fade("platform"))}>
                    <img src="/images/financie2-01.png" alt="FiNANCiE" loading="lazy" />
                    <p>
                        {"トークンの購入・売却は"}
                        <a href={site.external.financie.clone()} target="_blank" rel="noopener">{"「FiNANCiE」"}</a>
                        {"で行えます。詳しくは"}
                        <a href={site.external.token_guide.clone()} target="_blank" rel="noopener">{"こちらの記事"}</a>
                        {"をご覧ください。"}
                    </p>
                </div>
                <div class="section-cta">
                    <CtaButton
                        href={site.cta.signup.clone()}
                        external=true
                        variant={Variant::Primary}
                        size={Size::Lg}
                        animation={Animation::Bounce}
                        class={classes!(reveal.class("cta", "animate-fade-in-up", "reveal from-below"))}
                    >
                        {"今すぐお申し込み！"}
                    </CtaButton>
                </div>
            </div>
        </section>
    }
}
