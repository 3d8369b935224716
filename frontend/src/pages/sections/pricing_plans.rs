use yew::prelude::*;

use crate::components::cta_button::{Animation, CtaButton, Size, Variant};
use crate::config::site;
use crate::reveal::{use_reveal, InViewOptions, StaggerPlan};

pub const PLAN: &[(&str, u32)] = &[("title", 50), ("subtitle", 100), ("plans", 300), ("cta", 500)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimPlan {
    pub gigabytes: u32,
    /// Monthly price in yen before consumption tax.
    pub price_yen: u32,
}

impl SimPlan {
    /// 10% consumption tax, truncated to the yen.
    pub fn price_with_tax(&self) -> u32 {
        self.price_yen * 11 / 10
    }
}

pub const SIM_PLANS: &[SimPlan] = &[
    SimPlan { gigabytes: 3, price_yen: 980 },
    SimPlan { gigabytes: 5, price_yen: 1_180 },
    SimPlan { gigabytes: 10, price_yen: 1_580 },
    SimPlan { gigabytes: 20, price_yen: 1_980 },
    SimPlan { gigabytes: 50, price_yen: 3_480 },
];

pub const WIFI_PRICE_YEN: u32 = 3_800;

const CALL_OPTIONS: &[&str] = &[
    "かけ放題ミニ：5分間/何度でもかけ放題（税込550円/月）",
    "かけ放題ライト：10分間/何度でもかけ放題（税込935円/月）",
    "かけ放題フル：無制限/何度でもかけ放題（税込1,650円/月）",
];

/// `1580` → `1,580`.
pub fn format_yen(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[function_component(PricingPlans)]
pub fn pricing_plans() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), StaggerPlan::new(PLAN), InViewOptions::default());
    let wifi = SimPlan { gigabytes: 0, price_yen: WIFI_PRICE_YEN };

    html! {
        <section ref={node} id="plans" class="pricing-section">
            <div class="container">
                <h2 class={classes!("section-title", reveal.fade("title"))}>{"プランと料金"}</h2>
                <p class={classes!("section-lead", reveal.fade("subtitle"))}>{"シンプルな料金プランをご用意しました。"}</p>
                <div class={classes!("plan-grid", reveal.class("plans", "reveal revealed", "reveal from-below"))}>
                    <div class="plan-card">
                        <h3>{"レリモバSIM"}</h3>
                        <div class="plan-area">
                            <span>{"対応通信エリア"}</span>
                            <img src="/images/image2.gif" alt="NTT docomo" />
                        </div>
                        { for SIM_PLANS.iter().map(|plan| html! {
                            <div class="plan-row" key={plan.gigabytes}>
                                <span class="plan-data">{plan.gigabytes}<small>{"GB"}</small></span>
                                <span class="plan-price">{format_yen(plan.price_yen)}<small>{"円"}</small></span>
                                <span class="plan-tax">{format!("税込{}円", format_yen(plan.price_with_tax()))}</span>
                            </div>
                        }) }
                    </div>
                    <div class="plan-card">
                        <h3>{"レリモバWi-Fi"}</h3>
                        <p class="plan-price big">{format_yen(wifi.price_yen)}<small>{"円/月"}</small></p>
                        <p class="plan-tax">{format!("税込{}円", format_yen(wifi.price_with_tax()))}</p>
                        <h4>{"Wi-Fi端末レンタル料 0円"}</h4>
                        <p class="plan-note">{"※1日33GB以上利用すると速度が128kbpsに制限されます。"}</p>
                    </div>
                </div>
                <div class="plan-notes">
                    <h4>{"[通話料金・オプション]"}</h4>
                    <p>{"国内通話料金は30秒19.9円（税込21.89円）の通話料金が発生いたします。"}</p>
                    <ul>
                        { for CALL_OPTIONS.iter().map(|o| html! { <li>{*o}</li> }) }
                    </ul>
                    <p>{"※24ヵ月以内にご解約の場合、解約事務手数料3,800円（税込4,180円）が発生いたします。"}</p>
                    <p>{"※FiNANCiEでのトークン購入・売却、日本円の出金時には、所定の手数料が発生します。"}</p>
                </div>
                <div class="section-cta">
                    <CtaButton
                        href={site().cta.signup.clone()}
                        external=true
                        variant={Variant::Cta}
                        size={Size::Xl}
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
