use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use super::plan::StaggerPlan;
use super::scheduler::BrowserScheduler;
use super::scroll::ScrollSignal;
use super::sequencer::RevealSequencer;
use super::state::RevealState;
use super::visibility::{use_in_view, InViewOptions};
use super::Direction;

/// What a section renders from: one flag per plan key.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    state: RevealState,
}

impl Reveal {
    pub fn is(&self, key: &str) -> bool {
        self.state.is_revealed(key)
    }

    /// Picks between two class lists depending on whether `key` is revealed.
    pub fn class(&self, key: &str, shown: &'static str, hidden: &'static str) -> &'static str {
        if self.is(key) {
            shown
        } else {
            hidden
        }
    }

    /// Shorthand for the default fade-up treatment.
    pub fn fade(&self, key: &str) -> &'static str {
        self.class(key, "reveal revealed", "reveal")
    }
}

/// Direction an entry counts as. Without a scroll signal every entry is
/// treated as coming from above.
pub fn entry_direction(scroll: Option<&ScrollSignal>) -> Direction {
    scroll.map(ScrollSignal::direction).unwrap_or(Direction::Down)
}

/// Stores `visible` and reports whether it differs from the previous value.
fn visibility_changed(last: &mut bool, visible: bool) -> bool {
    if *last == visible {
        return false;
    }
    *last = visible;
    true
}

/// Staggered entrance for the element behind `node`.
///
/// The plan is read once, on mount. Scroll direction comes from the nearest
/// [`ScrollSignal`] context; without one every entry counts as scrolling down.
#[hook]
pub fn use_reveal(node: NodeRef, plan: StaggerPlan, options: InViewOptions) -> Reveal {
    let visible = use_in_view(node, options);
    let scroll = use_context::<ScrollSignal>();
    let redraw = use_force_update();
    let plan = use_memo(|_| plan, ());

    let sequencer: Rc<RefCell<RevealSequencer<BrowserScheduler>>> = {
        let plan = plan.clone();
        let redraw = redraw.clone();
        use_mut_ref(move || {
            let mut sequencer = RevealSequencer::for_plan(&plan, BrowserScheduler);
            sequencer.set_listener(move || redraw.force_update());
            sequencer
        })
    };
    let shared = use_memo(|_| sequencer.borrow().state(), ());
    let last_visible = use_mut_ref(|| false);

    {
        let sequencer = sequencer.clone();
        let plan = plan.clone();
        use_effect_with_deps(
            move |visible| {
                let visible = *visible;
                let changed = visibility_changed(&mut last_visible.borrow_mut(), visible);
                if changed {
                    let direction = entry_direction(scroll.as_ref());
                    debug!("section visible={} direction={:?}", visible, direction);
                    sequencer.borrow_mut().on_visibility_change(visible, direction, &plan);
                }
                || ()
            },
            visible,
        );
    }

    {
        let sequencer = sequencer.clone();
        use_effect_with_deps(
            move |_| move || sequencer.borrow_mut().cancel_pending(),
            (),
        );
    }

    let state = shared.borrow().clone();
    Reveal { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_follows_flag() {
        let mut state = RevealState::with_keys(["title", "cta"]);
        state.reveal("title");
        let reveal = Reveal { state };
        assert_eq!(reveal.class("title", "opacity-100", "opacity-0"), "opacity-100");
        assert_eq!(reveal.class("cta", "opacity-100", "opacity-0"), "opacity-0");
        assert_eq!(reveal.fade("title"), "reveal revealed");
        assert_eq!(reveal.fade("missing"), "reveal");
    }

    #[test]
    fn entry_without_scroll_context_counts_as_down() {
        assert_eq!(entry_direction(None), Direction::Down);
    }

    #[test]
    fn entry_follows_the_scroll_signal() {
        let signal = ScrollSignal::default();
        signal.record(500.0);
        signal.record(200.0);
        assert_eq!(entry_direction(Some(&signal)), Direction::Up);
        signal.record(900.0);
        assert_eq!(entry_direction(Some(&signal)), Direction::Down);
    }

    #[test]
    fn repeated_visibility_is_not_a_transition() {
        let mut last = false;
        assert!(!visibility_changed(&mut last, false));
        assert!(visibility_changed(&mut last, true));
        assert!(!visibility_changed(&mut last, true));
        assert!(visibility_changed(&mut last, false));
        assert!(!last);
    }
}
