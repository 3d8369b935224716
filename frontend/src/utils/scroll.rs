use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::error::{self, DomError};

/// Distance from the viewport top to the element's top edge.
fn viewport_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top()
}

/// Page offset that puts an element's top `header_offset` below the viewport top.
pub fn target_offset(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    (element_top + page_offset - header_offset).max(0.0)
}

pub fn scroll_position() -> (f64, f64) {
    match web_sys::window() {
        Some(w) => (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)),
        None => (0.0, 0.0),
    }
}

pub fn scroll_to_element(id: &str, offset: f64) -> Result<(), DomError> {
    let window = error::window()?;
    let element = error::document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?;
    let page_offset = window.scroll_y()?;
    let top = target_offset(viewport_top(&element), page_offset, offset);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_offset_is_subtracted() {
        assert_eq!(target_offset(500.0, 1000.0, 80.0), 1420.0);
    }

    #[test]
    fn target_never_goes_above_page_top() {
        assert_eq!(target_offset(20.0, 0.0, 80.0), 0.0);
        assert_eq!(target_offset(-300.0, 100.0, 80.0), 0.0);
    }
}
