use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::{direction, Direction};
use crate::utils::scroll::scroll_position;

/// Vertical offset plus which way it moved since the previous sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollSample {
    pub position: u32,
    pub direction: Direction,
}

impl Default for ScrollSample {
    // Before the first scroll event the page is treated as moving down, so
    // sections visible on load play their stagger.
    fn default() -> Self {
        Self {
            position: 0,
            direction: Direction::Down,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    last: ScrollSample,
}

impl ScrollTracker {
    /// Starts from an offset already scrolled to (e.g. a reload mid-page).
    pub fn starting_at(offset: f64) -> Self {
        Self {
            last: ScrollSample {
                position: clamp_offset(offset),
                direction: Direction::Down,
            },
        }
    }

    pub fn observe(&mut self, offset: f64) -> ScrollSample {
        let position = clamp_offset(offset);
        let direction = direction(f64::from(position), f64::from(self.last.position));
        self.last = ScrollSample { position, direction };
        self.last
    }

    pub fn last(&self) -> ScrollSample {
        self.last
    }
}

// Overscroll bounce on touch devices reports negative offsets.
fn clamp_offset(offset: f64) -> u32 {
    if offset.is_finite() && offset > 0.0 {
        offset.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// The page-wide scroll sample, written by one listener and read by every
/// section. Reading does not subscribe; consumers sample it when they need a
/// direction.
#[derive(Clone, Default)]
pub struct ScrollSignal(Rc<RefCell<ScrollTracker>>);

impl ScrollSignal {
    pub fn new(tracker: ScrollTracker) -> Self {
        Self(Rc::new(RefCell::new(tracker)))
    }

    pub fn sample(&self) -> ScrollSample {
        self.0.borrow().last()
    }

    pub fn direction(&self) -> Direction {
        self.sample().direction
    }

    pub fn record(&self, offset: f64) -> ScrollSample {
        self.0.borrow_mut().observe(offset)
    }
}

impl PartialEq for ScrollSignal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    pub children: Children,
}

#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let signal = use_memo(|_| ScrollSignal::new(ScrollTracker::starting_at(scroll_position().1)), ());

    {
        let signal = signal.clone();
        use_event_with_window("scroll", move |_: Event| {
            signal.record(scroll_position().1);
        });
    }

    html! {
        <ContextProvider<ScrollSignal> context={(*signal).clone()}>
            { for props.children.iter() }
        </ContextProvider<ScrollSignal>>
    }
}
