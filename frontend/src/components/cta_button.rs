use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Accent,
    Cta,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    #[default]
    None,
    Bounce,
    Pulse,
    Scale,
}

impl Variant {
    fn class(self) -> &'static str {
        match self {
            Variant::Primary => "cta-primary",
            Variant::Secondary => "cta-secondary",
            Variant::Accent => "cta-accent",
            Variant::Cta => "cta-signup",
            Variant::Outline => "cta-outline",
            Variant::Ghost => "cta-ghost",
        }
    }
}

impl Size {
    fn class(self) -> &'static str {
        match self {
            Size::Sm => "cta-sm",
            Size::Md => "cta-md",
            Size::Lg => "cta-lg",
            Size::Xl => "cta-xl",
        }
    }
}

impl Animation {
    fn class(self) -> Option<&'static str> {
        match self {
            Animation::None => None,
            Animation::Bounce => Some("animate-bounce-slow"),
            Animation::Pulse => Some("animate-pulse"),
            Animation::Scale => Some("animate-scale"),
        }
    }
}

pub fn button_classes(variant: Variant, size: Size, animation: Animation, full_width: bool) -> Classes {
    classes!(
        "cta-button",
        size.class(),
        variant.class(),
        animation.class(),
        full_width.then_some("cta-full")
    )
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub animation: Animation,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    /// Opens in a new tab without handing over `window.opener`.
    #[prop_or_default]
    pub external: bool,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let class = classes!(
        button_classes(props.variant, props.size, props.animation, props.full_width),
        props.class.clone()
    );
    let content = html! {
        <>
            <span>{ for props.children.iter() }</span>
            <span class="cta-arrow">{"→"}</span>
        </>
    };

    match &props.href {
        Some(href) => {
            let (target, rel) = if props.external {
                (Some("_blank"), Some("noopener noreferrer"))
            } else {
                (None, None)
            };
            html! {
                <a href={href.clone()} {class} {target} {rel} onclick={props.onclick.clone()}>
                    { content }
                </a>
            }
        }
        None => html! {
            <button type="button" {class} onclick={props.onclick.clone()}>
                { content }
            </button>
        },
    }
}
