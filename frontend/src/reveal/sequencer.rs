use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};

use super::plan::StaggerPlan;
use super::scheduler::Scheduler;
use super::state::RevealState;
use super::Direction;

type Listener = Rc<dyn Fn()>;

/// Drives one section's [`RevealState`] from visibility transitions.
///
/// Every transition starts a new generation: handles from the previous one
/// are dropped (cancelling their timers) before anything new is scheduled,
/// and a task that still runs for an old generation changes nothing.
pub struct RevealSequencer<S: Scheduler> {
    state: Rc<RefCell<RevealState>>,
    generation: Rc<Cell<u64>>,
    pending: Vec<S::Handle>,
    /// Activations of the current generation that have not fired yet.
    outstanding: Rc<Cell<usize>>,
    scheduler: S,
    listener: Option<Listener>,
}

impl<S: Scheduler> RevealSequencer<S> {
    pub fn new(state: RevealState, scheduler: S) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            generation: Rc::new(Cell::new(0)),
            pending: Vec::new(),
            outstanding: Rc::new(Cell::new(0)),
            scheduler,
            listener: None,
        }
    }

    /// State keyed by exactly the keys the plan names.
    pub fn for_plan(plan: &StaggerPlan, scheduler: S) -> Self {
        Self::new(plan.initial_state(), scheduler)
    }

    /// Called after every flag change, including ones made by timers.
    pub fn set_listener(&mut self, listener: impl Fn() + 'static) {
        self.listener = Some(Rc::new(listener));
    }

    /// Shared view of the flags for rendering.
    pub fn state(&self) -> Rc<RefCell<RevealState>> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> RevealState {
        self.state.borrow().clone()
    }

    pub fn on_visibility_change(&mut self, visible: bool, direction: Direction, plan: &StaggerPlan) {
        self.cancel_pending();

        if !visible {
            self.state.borrow_mut().hide_all();
            self.notify();
            return;
        }

        match direction {
            Direction::Up => {
                self.state.borrow_mut().reveal_all();
                self.notify();
            }
            Direction::Down => self.schedule_plan(plan),
        }
    }

    /// Drops every pending activation without touching the flags.
    pub fn cancel_pending(&mut self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        self.pending.clear();
        self.outstanding.set(0);
    }

    /// True while a stagger is still running; false once every flag it
    /// scheduled has been set.
    pub fn has_pending(&self) -> bool {
        self.outstanding.get() > 0
    }

    fn schedule_plan(&mut self, plan: &StaggerPlan) {
        let generation = self.generation.get();
        for &(key, delay_ms) in plan.steps() {
            if !self.state.borrow().contains(key) {
                warn!("stagger plan names unknown reveal key {:?}; skipping", key);
                continue;
            }
            let state = Rc::downgrade(&self.state);
            let current = Rc::downgrade(&self.generation);
            let outstanding = Rc::downgrade(&self.outstanding);
            let listener = self.listener.clone();
            let handle = self.scheduler.schedule(
                delay_ms,
                Box::new(move || {
                    let (Some(state), Some(current)) = (state.upgrade(), current.upgrade()) else {
                        return;
                    };
                    if current.get() != generation {
                        debug!("dropping stale reveal of {:?}", key);
                        return;
                    }
                    if let Some(outstanding) = outstanding.upgrade() {
                        outstanding.set(outstanding.get().saturating_sub(1));
                    }
                    state.borrow_mut().reveal(key);
                    if let Some(listener) = listener {
                        listener();
                    }
                }),
            );
            self.pending.push(handle);
        }
        self.outstanding.set(self.pending.len());
        debug!(
            "staggering {} of {} reveals over {}ms",
            self.pending.len(),
            self.state.borrow().len(),
            plan.duration_ms()
        );
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener();
        }
    }
}

impl<S: Scheduler> Drop for RevealSequencer<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::reveal::scheduler::manual::ManualScheduler;

    fn sequencer(plan: &StaggerPlan) -> (RevealSequencer<ManualScheduler>, ManualScheduler) {
        let clock = ManualScheduler::new();
        (RevealSequencer::for_plan(plan, clock.clone()), clock)
    }

    #[test]
    fn hide_resets_everything_and_leaves_no_timers() {
        let plan = StaggerPlan::new(&[("title", 100), ("cta", 500)]);
        let (mut seq, clock) = sequencer(&plan);
        seq.on_visibility_change(true, Direction::Up, &plan);
        assert!(seq.snapshot().all_revealed());

        seq.on_visibility_change(false, Direction::Down, &plan);
        assert!(seq.snapshot().all_hidden());
        assert_eq!(clock.pending(), 0);

        clock.advance(10_000);
        assert!(seq.snapshot().all_hidden());
    }

    #[test]
    fn hide_twice_is_same_as_once() {
        let plan = StaggerPlan::new(&[("title", 100)]);
        let (mut seq, clock) = sequencer(&plan);
        seq.on_visibility_change(true, Direction::Down, &plan);
        seq.on_visibility_change(false, Direction::Down, &plan);
        let once = seq.snapshot();
        seq.on_visibility_change(false, Direction::Up, &plan);
        assert_eq!(seq.snapshot(), once);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn entering_from_below_reveals_synchronously() {
        let plan = StaggerPlan::new(&[("k1", 100), ("k2", 300)]);
        let (mut seq, clock) = sequencer(&plan);
        seq.on_visibility_change(true, Direction::Up, &plan);
        assert!(seq.snapshot().is_revealed("k1"));
        assert!(seq.snapshot().is_revealed("k2"));
        assert_eq!(clock.pending(), 0);
        assert!(!seq.has_pending());
    }

    #[test]
    fn entering_from_above_staggers() {
        let plan = StaggerPlan::new(&[("k1", 100), ("k2", 300)]);
        let (mut seq, clock) = sequencer(&plan);
        seq.on_visibility_change(true, Direction::Down, &plan);
        assert!(seq.snapshot().all_hidden());

        clock.advance_to(100);
        assert!(seq.snapshot().is_revealed("k1"));
        assert!(!seq.snapshot().is_revealed("k2"));

        clock.advance_to(300);
        assert!(seq.snapshot().all_revealed());
    }

    #[test]
    fn stagger_is_pending_until_last_flag_fires() {
        let plan = StaggerPlan::new(&[("k1", 100), ("k2", 300)]);
        let (mut seq, clock) = sequencer(&plan);
        seq.on_visibility_change(true, Direction::Down, &plan);
        assert!(seq.has_pending());

        clock.advance(150);
        assert!(seq.has_pending());

        clock.advance(1000);
        assert!(seq.snapshot().all_revealed());
        assert_eq!(clock.pending(), 0);
        assert!(!seq.has_pending());
    }

    #[test]
    fn hiding_mid_stagger_clears_pending() {
        let plan = StaggerPlan::new(&[("k1", 100), ("k2", 300)]);
        let (mut seq, clock) = sequencer(&plan);
        seq.on_visibility_change(true, Direction::Down, &plan);
        clock.advance(150);
        seq.on_visibility_change(false, Direction::Up, &plan);
        assert!(!seq.has_pending());

        seq.on_visibility_change(true, Direction::Down, &plan);
        assert!(seq.has_pending());
    }

    #[test]
    fn leaving_cancels_stale_activation() {
        let plan = StaggerPlan::new(&[("k1", 1000)]);
        let (mut seq, clock) = sequencer(&plan);
        seq.on_visibility_change(true, Direction::Down, &plan);
        clock.advance(400);
        seq.on_visibility_change(false, Direction::Up, &plan);

        clock.advance(1000);
        assert!(!seq.snapshot().is_revealed("k1"));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn up_entry_cancels_pending_stagger() {
        let plan = StaggerPlan::new(&[("k1", 100), ("k2", 300)]);
        let (mut seq, clock) = sequencer(&plan);
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        seq.set_listener(move || counter.set(counter.get() + 1));

        seq.on_visibility_change(true, Direction::Down, &plan);
        seq.on_visibility_change(true, Direction::Up, &plan);
        assert_eq!(changes.get(), 1);
        assert_eq!(clock.pending(), 0);

        clock.advance(1000);
        assert_eq!(changes.get(), 1);
    }

    #[test]
    fn flicker_restarts_the_stagger_from_the_latest_call() {
        let plan = StaggerPlan::new(&[("k1", 100), ("k2", 300)]);
        let (mut seq, clock) = sequencer(&plan);
        seq.on_visibility_change(true, Direction::Down, &plan);
        clock.advance(250);
        assert!(seq.snapshot().is_revealed("k1"));

        // Re-entry while still visible: old k2 timer (due at 300) must not fire.
        seq.on_visibility_change(true, Direction::Down, &plan);
        assert_eq!(clock.pending(), 2);
        clock.advance(100);
        assert!(!seq.snapshot().is_revealed("k2"));
        clock.advance(200);
        assert!(seq.snapshot().is_revealed("k2"));
    }

    #[test]
    fn ties_fire_in_plan_order() {
        let plan = StaggerPlan::new(&[("platform", 1300), ("learnMore", 1300), ("cta", 1500)]);
        let (mut seq, clock) = sequencer(&plan);
        let order = Rc::new(RefCell::new(Vec::new()));
        let sink = order.clone();
        let state = seq.state();
        seq.set_listener(move || {
            let state = state.borrow();
            let newest = state
                .keys()
                .filter(|k| state.is_revealed(k))
                .find(|k| !sink.borrow().contains(k));
            if let Some(key) = newest {
                sink.borrow_mut().push(key);
            }
        });

        seq.on_visibility_change(true, Direction::Down, &plan);
        clock.advance(2000);
        assert_eq!(*order.borrow(), vec!["platform", "learnMore", "cta"]);
    }

    #[test]
    fn unknown_plan_keys_are_skipped() {
        let plan = StaggerPlan::new(&[("title", 100), ("cta", 200)]);
        let clock = ManualScheduler::new();
        let mut seq = RevealSequencer::new(RevealState::with_keys(["title"]), clock.clone());
        seq.on_visibility_change(true, Direction::Down, &plan);
        assert_eq!(clock.pending(), 1);
        assert!(seq.has_pending());
        clock.advance(500);
        assert!(!seq.has_pending());
        assert!(seq.snapshot().all_revealed());
        assert!(!seq.snapshot().is_revealed("cta"));
    }

    #[test]
    fn dropping_the_sequencer_cancels_timers() {
        let plan = StaggerPlan::new(&[("title", 100)]);
        let (mut seq, clock) = sequencer(&plan);
        let state = seq.state();
        seq.on_visibility_change(true, Direction::Down, &plan);
        drop(seq);
        assert_eq!(clock.pending(), 0);
        clock.advance(500);
        assert!(state.borrow().all_hidden());
    }

    #[test]
    fn scroll_down_into_view_then_back_up_out_of_view() {
        let plan = StaggerPlan::new(&[("title", 100), ("cta", 500)]);
        let (mut seq, clock) = sequencer(&plan);
        assert!(seq.snapshot().all_hidden());

        seq.on_visibility_change(true, Direction::Down, &plan);
        assert!(seq.snapshot().all_hidden());

        clock.advance_to(100);
        assert!(seq.snapshot().is_revealed("title"));
        assert!(!seq.snapshot().is_revealed("cta"));

        clock.advance_to(500);
        assert!(seq.snapshot().all_revealed());

        seq.on_visibility_change(false, Direction::Up, &plan);
        assert!(seq.snapshot().all_hidden());
        assert_eq!(clock.pending(), 0);
    }
}
