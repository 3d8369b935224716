pub mod about;
pub mod faq;
pub mod feature;
pub mod hero;
pub mod points_guide;
pub mod pricing_plans;
pub mod project;
pub mod token_reward;
pub mod web3_money;

#[cfg(test)]
mod tests {
    use crate::reveal::StaggerPlan;

    const PLANS: &[(&str, &[(&str, u32)])] = &[
        ("hero", super::hero::PLAN),
        ("feature", super::feature::PLAN),
        ("token_reward", super::token_reward::PLAN),
        ("about", super::about::PLAN),
        ("web3_money", super::web3_money::PLAN),
        ("pricing_plans", super::pricing_plans::PLAN),
        ("faq", super::faq::PLAN),
        ("project", super::project::PLAN),
        ("points_guide", super::points_guide::PLAN),
    ];

    #[test]
    fn plan_keys_are_unique_per_section() {
        for (section, steps) in PLANS {
            let plan = StaggerPlan::new(steps);
            assert_eq!(plan.initial_state().len(), steps.len(), "duplicate key in {}", section);
        }
    }

    #[test]
    fn sections_finish_within_two_and_a_half_seconds() {
        for (section, steps) in PLANS {
            assert!(StaggerPlan::new(steps).duration_ms() <= 2_500, "{} is too slow", section);
        }
    }
}
