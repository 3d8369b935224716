use yew::prelude::*;

use crate::components::cta_button::{Animation, CtaButton, Size, Variant};
use crate::config::site;
use crate::reveal::{use_reveal, InViewOptions, StaggerPlan};

pub const PLAN: &[(&str, u32)] = &[
    ("button1", 100),
    ("button0", 300),
    ("button2", 500),
    ("button3", 700),
    ("card2", 900),
    ("web3money", 1100),
    ("xCard", 1300),
    ("storeCard", 1400),
    ("referral", 1500),
    ("campaign", 1700),
    ("sticker", 1900),
    ("additionalCard", 2100),
    ("cta", 2300),
];

/// Quick links at the top of the campaign section: label, anchor, flag key.
const JUMP_BUTTONS: &[(&str, &str, &str)] = &[
    ("レリモバってなに？", "#aboutcn", "button1"),
    ("トークン還元", "#token_return", "button0"),
    ("WEB3 MONEY", "#web3money", "button2"),
    ("プランと料金", "#bonus", "button3"),
];

/// Campaign cards: flag key, heading, body.
const CARDS: &[(&str, &str, &str)] = &[
    ("card2", "毎月トークン還元", "利用料金に応じてFiNANCiEの限定ポイントを毎月付与します。"),
    ("web3money", "WEB3 MONEY 会員特典", "NFTアートや限定ステッカーなど、会員だけの特典をお届けします。"),
    ("xCard", "X抽選会", "公式Xアカウントで定期的に抽選会を開催しています。"),
    ("storeCard", "店舗でのお申し込み", "提携店舗でもお申し込み・ご相談を受け付けています。"),
    ("referral", "お友達紹介", "ご紹介いただいた方とお友達の両方に特典をご用意しています。"),
    ("campaign", "期間限定キャンペーン", "お申し込み時期に応じたキャンペーンを実施中です。"),
    ("sticker", "限定ステッカー", "全8種＋シークレット1種のうち3枚をプレゼント。"),
    ("additionalCard", "支援の輪", "事業収益の一部はクリエイターや新規事業者の支援に充てられます。"),
];

#[function_component(Feature)]
pub fn feature() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), StaggerPlan::new(PLAN), InViewOptions::default());

    html! {
        <section ref={node} id="token" class="feature-section">
            <div class="container">
                <div class="jump-buttons">
                    { for JUMP_BUTTONS.iter().map(|&(label, href, key)| html! {
                        <a {href} class={classes!("jump-button", reveal.fade(key))}>{label}</a>
                    }) }
                </div>
                <h2 class="section-title">{"特典・キャンペーン"}</h2>
                <div class="card-grid">
                    { for CARDS.iter().map(|&(key, title, body)| html! {
                        <div class={classes!("feature-card", reveal.class(key, "reveal revealed", "reveal from-below"))}>
                            <h3>{title}</h3>
                            <p>{body}</p>
                        </div>
                    }) }
                </div>
                <div class="section-cta">
                    <CtaButton
                        href={site().cta.signup.clone()}
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
