use yew::prelude::*;

use crate::components::cta_button::{Animation, CtaButton, Size, Variant};
use crate::config::site;
use crate::reveal::{use_reveal, InViewOptions, StaggerPlan};

// `platform` and `learnMore` share 1300 ms; plan order decides which goes first.
pub const PLAN: &[(&str, u32)] = &[
    ("title", 100),
    ("subtitle", 300),
    ("image1", 500),
    ("text1", 700),
    ("image2", 900),
    ("text2", 1100),
    ("platform", 1300),
    ("learnMore", 1300),
    ("cta", 1500),
];

const VOICY_URL: &str = "https://r.voicy.jp/LMKxJe4z9yo";

const INTRO: &[&str] = &[
    "レリモバは、RELiCが運営するモバイルサービスです。利用料金に応じて『トークン』を還元致します！",
    "RELiCでは皆様から頂戴する事業収益の一部を、個人のクリエイター様や挑戦する新規事業者様への支援に充てております。",
    "皆様にレリモバを使用して頂くことで、ただそれだけで支援の輪が広がります。",
    "私たちは新しい時代の道しるべとなり、皆様に分かりやすいかたちでこれからもサービスを提供し続けます！",
];

/// Flag key, accent line, headline, body paragraphs.
const CARDS: &[(&str, &str, &str, &[&str])] = &[
    (
        "image1",
        "トークン獲得の",
        "仕組み",
        &[
            "レリモバでは、お支払いしていただいた料金に対してFiNANCiE上の「限定ポイント」を定期的に付与します。",
            "付与された限定ポイントは「RELiCトークン」の購入にのみご利用いただけます。",
            "限定ポイントを貯めて、お好きなタイミングでトークンをご購入ください！",
        ],
    ),
    (
        "text1",
        "安くても",
        "つながる",
        &[
            "レリモバの通信回線は「エックスモバイル」が提供しています。格安SIMはdocomo回線（通信エリア）に対応。",
            "Wi-Fiはdocomo、au、Softbank、楽天のマルチキャリア対応。",
            "安心してモバイル通信をご利用いただけます。",
        ],
    ),
    (
        "text2",
        "今すぐカンタン",
        "乗り換え",
        &[
            "お申し込み後、郵送で届く「SIMカード」を差し替えるだけ！",
            "新規の電話番号取得はもちろん、現在の電話番号を引き継いで乗り換えることも可能です。",
            "eSIMプランの乗り換えにも対応！",
        ],
    ),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), StaggerPlan::new(PLAN), InViewOptions::default());

    html! {
        <section ref={node} id="feature" class="about-section">
            <div class="container">
                <h2 class={classes!("section-title", reveal.fade("title"))}>{"レリモバってなに？"}</h2>
                <div class={classes!("about-intro", reveal.class("image1", "reveal revealed", "reveal from-left"))}>
                    { for INTRO.iter().map(|line| html! { <p>{*line}</p> }) }
                    <div class="about-learn-more">
                        <CtaButton
                            href={VOICY_URL}
                            external=true
                            variant={Variant::Outline}
                            size={Size::Md}
                            animation={Animation::Scale}
                            class={classes!(reveal.class("learnMore", "reveal revealed", "reveal from-below"))}
                        >
                            {"もっと詳しく！"}
                        </CtaButton>
                    </div>
                </div>
                <div class="card-grid three">
                    { for CARDS.iter().map(|&(key, accent, headline, body)| html! {
                        <div class={classes!("about-card", reveal.class(key, "reveal revealed", "reveal from-below"))}>
                            <h3>
                                <em>{accent}</em><br />
                                <span>{headline}</span>
                            </h3>
                            { for body.iter().map(|p| html! { <p>{*p}</p> }) }
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
