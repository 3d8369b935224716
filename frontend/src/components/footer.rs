use chrono::Datelike;
use yew::prelude::*;

use crate::config::site;

#[function_component(Footer)]
pub fn footer() -> Html {
    let site = site();
    let year = chrono::Local::now().year();
    let legal = [
        ("動作確認端末一覧", &site.legal.devices),
        ("プライバシーポリシー", &site.legal.privacy_policy),
        ("利用規約", &site.legal.terms),
        ("特定商取引法に基づく表記", &site.legal.transactions),
    ];

    html! {
        <footer class="site-footer">
            <div class="footer-partners">
                <a href={site.external.xmobile.clone()} target="_blank" rel="noopener noreferrer">
                    <img src="/images/xmobile.png" alt="X-mobile" loading="lazy" />
                </a>
                <a href={site.external.financie.clone()} target="_blank" rel="noopener noreferrer">
                    <img src="/images/financie.png" alt="FiNANCiE" loading="lazy" />
                </a>
            </div>
            <a href={site.cta.portal.clone()} target="_blank" rel="noopener noreferrer" class="footer-portal">
                {"マイページ"}
            </a>
            <nav class="footer-legal">
                { for legal.iter().map(|(label, href)| html! {
                    <a href={(*href).clone()} target="_blank" rel="noopener noreferrer">{*label}</a>
                }) }
            </nav>
            <div class="footer-divider"></div>
            <p class="footer-copyright">{format!("Copyright © {}, RELiC©", year)}</p>
        </footer>
    }
}
