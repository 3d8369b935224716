use log::info;
use yew::prelude::*;

use crate::components::animated_characters::AnimatedCharacters;
use crate::pages::sections::{
    about::AboutSection, faq::Faq, feature::Feature, hero::Hero, points_guide::PointsGuideSection,
    pricing_plans::PricingPlans, project::ProjectSection, token_reward::TokenReward,
    web3_money::Web3MoneySection,
};

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        |_| {
            info!("home page mounted");
            || ()
        },
        (),
    );

    // The empty anchors are jump targets for the in-page nav and CTA links.
    html! {
        <main class="landing-page">
            <Hero />
            <AnimatedCharacters />
            <div id="content" class="anchor"></div>
            <Feature />
            <div id="token_return" class="anchor"></div>
            <TokenReward />
            <div id="aboutcn" class="anchor"></div>
            <AboutSection />
            <div id="web3money" class="anchor"></div>
            <Web3MoneySection />
            <div id="bonus" class="anchor"></div>
            <PricingPlans />
            <Faq />
            <div id="message" class="anchor"></div>
            <ProjectSection />
            <div id="points-guide" class="anchor"></div>
            <PointsGuideSection />
        </main>
    }
}
