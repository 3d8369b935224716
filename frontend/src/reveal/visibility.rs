use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::DomError;

#[derive(Clone, Debug, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element that must be on screen, 0.0..=1.0.
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
        }
    }
}

impl InViewOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..Self::default()
        }
    }
}

/// Collapses raw observer entries into visible/hidden transitions.
#[derive(Clone, Debug)]
pub struct InViewTracker {
    threshold: f64,
    visible: bool,
}

impl InViewTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// `Some(visible)` when the entry flips the state, `None` otherwise.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> Option<bool> {
        let visible = is_intersecting && ratio >= self.threshold;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }
}

/// Keeps an `IntersectionObserver` alive together with its callback.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reports every transition of `element` into or out of the viewport.
pub fn observe_element(
    element: &Element,
    options: &InViewOptions,
    mut on_change: impl FnMut(bool) + 'static,
) -> Result<ObserverGuard, DomError> {
    let mut tracker = InViewTracker::new(options.threshold);
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if let Some(visible) = tracker.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                on_change(visible);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);
    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}

/// Visibility of the element behind `node`, updated on every transition.
///
/// If the observer cannot be created the element is reported visible so the
/// content is never stuck hidden.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let guard = match node.cast::<Element>() {
                    Some(element) => {
                        let setter = visible.clone();
                        observe_element(&element, options, move |v| setter.set(v))
                    }
                    None => Err(DomError::Detached),
                };
                let guard = match guard {
                    Ok(guard) => Some(guard),
                    Err(e) => {
                        warn!("visibility tracking unavailable: {}", e);
                        visible.set(true);
                        None
                    }
                };
                move || {
                    debug!("disconnecting visibility observer");
                    drop(guard);
                }
            },
            (node, options),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_transitions() {
        let mut tracker = InViewTracker::new(0.1);
        assert_eq!(tracker.observe(true, 0.5), Some(true));
        assert_eq!(tracker.observe(true, 0.8), None);
        assert_eq!(tracker.observe(false, 0.0), Some(false));
        assert_eq!(tracker.observe(false, 0.0), None);
    }

    #[test]
    fn edge_touch_below_threshold_is_not_visible() {
        let mut tracker = InViewTracker::new(0.1);
        assert_eq!(tracker.observe(true, 0.0), None);
        assert_eq!(tracker.observe(true, 0.05), None);
        assert_eq!(tracker.observe(true, 0.1), Some(true));
        assert_eq!(tracker.observe(true, 0.9), None);
    }

    #[test]
    fn keeps_reporting_after_first_reveal() {
        let mut tracker = InViewTracker::new(0.2);
        let transitions: Vec<_> = [(true, 0.3), (false, 0.0), (true, 0.25), (false, 0.0)]
            .into_iter()
            .filter_map(|(hit, ratio)| tracker.observe(hit, ratio))
            .collect();
        assert_eq!(transitions, vec![true, false, true, false]);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(InViewOptions::with_threshold(3.0).threshold, 1.0);
        assert_eq!(InViewOptions::default().root_margin, "0px");
    }
}
