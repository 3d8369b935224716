use yew::prelude::*;

use crate::reveal::{use_reveal, InViewOptions, StaggerPlan};
use crate::utils::shuffle::{browser_random, shuffle};

const FIRST_DELAY_MS: u32 = 100;
const STEP_MS: u32 = 150;
const THRESHOLD: f64 = 0.2;

struct Character {
    id: &'static str,
    image: &'static str,
    rotate: i32,
    /// `top/bottom left/right` placement within the grid.
    position: &'static str,
}

const CHARACTERS: [Character; 8] = [
    Character { id: "c1", image: "/images/1.png", rotate: 0, position: "top: 25%; left: 10%;" },
    Character { id: "c2", image: "/images/2.png", rotate: 15, position: "top: 15%; left: 32%;" },
    Character { id: "c3", image: "/images/3.png", rotate: -12, position: "top: 15%; right: 32%;" },
    Character { id: "c4", image: "/images/4.png", rotate: 0, position: "top: 25%; right: 10%;" },
    Character { id: "c5", image: "/images/5.png", rotate: -10, position: "bottom: 25%; left: 10%;" },
    Character { id: "c6", image: "/images/6.png", rotate: 0, position: "bottom: 15%; left: 32%;" },
    Character { id: "c7", image: "/images/7.png", rotate: 0, position: "bottom: 15%; right: 32%;" },
    Character { id: "c8", image: "/images/8.png", rotate: 8, position: "bottom: 25%; right: 10%;" },
];

/// Entrance order for the characters, shuffled once per mount.
pub fn character_plan(random: impl FnMut() -> f64) -> StaggerPlan {
    let mut order: Vec<usize> = (0..CHARACTERS.len()).collect();
    shuffle(&mut order, random);
    StaggerPlan::uniform(order.into_iter().map(|i| CHARACTERS[i].id), FIRST_DELAY_MS, STEP_MS)
}

#[function_component(AnimatedCharacters)]
pub fn animated_characters() -> Html {
    let node = use_node_ref();
    let plan = (*use_memo(|_| character_plan(browser_random), ())).clone();
    let reveal = use_reveal(node.clone(), plan, InViewOptions::with_threshold(THRESHOLD));

    html! {
        <div ref={node} class="character-stage">
            { for CHARACTERS.iter().map(|c| {
                let style = format!("{} --rotate: {}deg;", c.position, c.rotate);
                html! {
                    <div key={c.id} class={classes!("character", reveal.class(c.id, "popped", ""))} {style}>
                        <img src={c.image} alt={format!("Character {}", &c.id[1..])} loading="lazy" />
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_covers_every_character_once() {
        let plan = character_plan(|| 0.5);
        let mut ids: Vec<_> = plan.keys().collect();
        ids.sort();
        assert_eq!(ids, vec!["c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8"]);
    }

    #[test]
    fn plan_is_evenly_spaced() {
        let plan = character_plan(|| 0.0);
        let delays: Vec<_> = plan.steps().iter().map(|(_, d)| *d).collect();
        assert_eq!(delays, vec![100, 250, 400, 550, 700, 850, 1000, 1150]);
    }
}
