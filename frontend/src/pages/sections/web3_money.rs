use yew::prelude::*;

use crate::components::cta_button::{Animation, CtaButton, Size, Variant};
use crate::config::site;
use crate::reveal::{use_reveal, InViewOptions, StaggerPlan};

pub const PLAN: &[(&str, u32)] = &[
    ("title", 100),
    ("image1", 300),
    ("subtitle", 500),
    ("googleFormButton", 700),
    ("image2", 900),
    ("benefits", 1100),
    ("cta", 1300),
];

const YOUTUBE_URL: &str = "https://youtube.com/@web3money_relic?si=WcPZNytZP8jv4_FP";
const FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSfgnHpMoYGsVBTMgHP-ln6ruy5LpKuFpKFDFOmUxy0tk4kKug/viewform?usp=header";
const MYPAGE_URL: &str = "https://onlinestore.xmobile.ne.jp/c/login";

const BENEFITS: &[(&str, &str)] = &[
    ("毎月NFTアートが届きます！", "毎月アートクリエイターから特別な一枚を描き下ろして頂きます。"),
    ("限定ステッカープレゼント", "(全8種＋シークレット1種のうち3枚)"),
    ("支援先選定の投票権", ""),
    ("YouTube企画『 WEB3 MONEY 』への出演権", "希望者多数の場合、抽選となります。"),
    ("支援先からの特典", "時期や詳細は未定となります！みんなで応援しよう！"),
];

#[function_component(Web3MoneySection)]
pub fn web3_money_section() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), StaggerPlan::new(PLAN), InViewOptions::default());
    let zoom = |key: &str| reveal.class(key, "reveal-zoom revealed", "reveal-zoom");

    html! {
        <section ref={node} class="web3money-section">
            <div class="container">
                <h2 class={classes!("section-title", reveal.fade("title"))}>{"WEB3 MONEY"}</h2>
                <div class={classes!("media-frame", zoom("image1"))}>
                    <a href={YOUTUBE_URL} target="_blank" rel="noopener noreferrer">
                        <video src="/images/img/web3money.mov" autoplay=true muted=true loop=true playsinline=true></video>
                    </a>
                </div>
                <p class={classes!("section-lead", reveal.class("subtitle", "reveal revealed", "reveal from-below"))}>
                    {"レリモバ契約者限定のコミュニティ特典です。"}
                </p>
                <div class={classes!("section-cta", zoom("googleFormButton"))}>
                    <a href={FORM_URL} target="_blank" rel="noopener noreferrer" class="form-button">
                        {"特典のお申し込みはこちら"}
                    </a>
                </div>
                <div class={classes!("media-frame", zoom("image2"))}>
                    <img src="/images/img/web3money1.jpeg" alt="WEB3 MONEY" loading="lazy" />
                </div>
                <div class={classes!("benefits-card", reveal.class("benefits", "reveal revealed", "reveal from-below"))}>
                    <h3>{"【 特典 】"}</h3>
                    { for BENEFITS.iter().map(|&(title, note)| html! {
                        <div class="benefit">
                            <h4>{title}</h4>
                            if !note.is_empty() {
                                <p>{note}</p>
                            }
                        </div>
                    }) }
                    <p class="benefits-note">
                        {"ご契約後、"}
                        <a href={MYPAGE_URL} target="_blank" rel="noopener noreferrer">{"Xmobileマイページ"}</a>
                        {"をご確認下さい。"}
                    </p>
                </div>
                <div class="section-cta">
                    <CtaButton
                        href={site().cta.signup.clone()}
                        external=true
                        variant={Variant::Primary}
                        size={Size::Lg}
                        animation={Animation::Bounce}
                        class={classes!(reveal.class("cta", "reveal revealed", "reveal from-below"))}
                    >
                        {"今すぐお申し込み！"}
                    </CtaButton>
                </div>
            </div>
        </section>
    }
}
