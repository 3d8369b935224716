//! Scroll-triggered entrance animations.
//!
//! Every animated section owns a [`sequencer::RevealSequencer`] that flips a set of named
//! "revealed" flags when the section enters or leaves the viewport. Entering
//! while scrolling down plays the section's [`StaggerPlan`]; entering while
//! scrolling up shows everything at once; leaving resets every flag.

pub mod hook;
pub mod plan;
pub mod scheduler;
pub mod scroll;
pub mod sequencer;
pub mod state;
pub mod visibility;

pub use hook::use_reveal;
pub use plan::StaggerPlan;
pub use scroll::ScrollProvider;
pub use visibility::InViewOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

/// Down only when the offset strictly grew. Standing still counts as up.
pub fn direction(current: f64, previous: f64) -> Direction {
    if current > previous {
        Direction::Down
    } else {
        Direction::Up
    }
}
