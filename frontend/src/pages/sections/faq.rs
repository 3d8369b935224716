use yew::prelude::*;

use crate::reveal::{use_reveal, InViewOptions, StaggerPlan};

pub const PLAN: &[(&str, u32)] = &[("title", 0), ("subtitle", 100), ("list", 200)];

const CANCELLATION_URL: &str = "https://support.xmobile.ne.jp/hc/ja/articles/900003482426-%E5%88%9D%E6%9C%9F%E5%A5%91%E7%B4%84%E8%A7%A3%E9%99%A4%E5%88%B6%E5%BA%A6%E3%81%A8%E3%81%8A%E6%89%8B%E7%B6%9A%E3%81%8D%E3%81%AB%E3%81%A4%E3%81%84%E3%81%A6";

pub const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "いま使っている電話番号はそのまま使えますか？",
        "ご利用可能です。\n現在ご契約中の携帯電話会社でMNP予約番号を取得後、有効期限が10日以上残っている状態で、レリモバへお申し込み下さい。",
    ),
    (
        "通話料金について教えてください",
        "国内通話料金は30秒19.9円（税込21.89円）の通話料金が発生いたします。\nかけ放題オプションはミニ（5分）、ライト（10分）、フル（無制限）の3種類をご用意しております。",
    ),
    (
        "利用できるクレジットカードは何がありますか？",
        "VISA、Master Card、JCB、Diners、AmericanExpressがご利用いただけます。\n海外発行のクレジットカード、デビットカード・プリペイドカードはご利用いただけません。",
    ),
    ("データ容量を追加で購入できますか？", "1GBを550円（税込）〈税別500円〉で購入可能です。"),
    ("データ容量の確認がしたい", "お客様マイページ内の「データご利用状況」よりご確認いただけます。"),
    (
        "5G通信は使えますか？",
        "ご利用可能です。\nお客様マイページ内の「データご利用状況」から5G通信をONにしてください。",
    ),
    ("格安SIMの余ったデータは繰越されますか？", "繰り越しされます。お客様マイページよりご確認ください。"),
    (
        "初月の利用料は日割りされますか？",
        "はい。レリモバSIM、レリモバWi-Fiともに、基本利用料は日割りにてご請求いたします。",
    ),
    ("解約事務手数料はかかりますか？", "ご解約事務手数料は発生しません"),
    ("解約方法について教えてください。", "ご解約、MNP予約番号発行はマイページよりお手続き可能です。"),
];

/// Accordion with at most one answer open.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question.as_str()}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

fn answer_lines(answer: &str) -> Html {
    html! {
        <>{ for answer.split('\n').map(|line| html! { <p>{line.to_string()}</p> }) }</>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), StaggerPlan::new(PLAN), InViewOptions::default());
    let open = use_state(|| None::<usize>);

    let item = |index: usize, question: &'static str, body: Html| {
        let open_handle = open.clone();
        let on_toggle = Callback::from(move |_: ()| open_handle.set(toggle_open(*open_handle, index)));
        html! {
            <FaqItem key={index} question={question} open={*open == Some(index)} {on_toggle}>
                { body }
            </FaqItem>
        }
    };

    html! {
        <section ref={node} id="faq" class="faq-section">
            <div class="faq-vertical">{"Q&A"}</div>
            <div class="container">
                <h2 class={classes!("section-title", reveal.fade("title"))}>{"よくあるご質問"}</h2>
                <p class={classes!("section-kicker", reveal.fade("subtitle"))}>{"Q & A"}</p>
                <div class={classes!("faq-list", reveal.fade("list"))}>
                    { for FAQ_ITEMS.iter().enumerate().map(|(i, &(q, a))| item(i, q, answer_lines(a))) }
                    { item(
                        FAQ_ITEMS.len(),
                        "初期契約解除制度について",
                        html! {
                            <p>
                                {"詳しくは"}
                                <a href={CANCELLATION_URL} target="_blank" rel="noopener">{"こちら"}</a>
                                {"をご確認ください。"}
                            </p>
                        },
                    ) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_closes_the_first() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_open(open, 4), Some(4));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle_open(Some(3), 3), None);
    }
}
