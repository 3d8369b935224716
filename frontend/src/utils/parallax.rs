use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const DEFAULT_SCROLL_SPEED: f64 = 0.5;
pub const DEFAULT_MOUSE_SPEED: f64 = 0.1;

/// Background drift for a given scroll offset.
pub fn parallax_translate(scroll_y: f64, speed: f64) -> String {
    format!("transform: translateY({}px);", scroll_y * speed)
}

/// Offset of the pointer from the viewport centre, scaled by `speed`.
pub fn mouse_parallax(pointer: (f64, f64), viewport: (f64, f64), speed: f64) -> (f64, f64) {
    let (x, y) = pointer;
    let (width, height) = viewport;
    ((x - width / 2.0) * speed, (y - height / 2.0) * speed)
}

#[hook]
pub fn use_parallax(speed: f64) -> String {
    let (_, y) = use_window_scroll();
    parallax_translate(y, speed)
}

#[hook]
pub fn use_mouse_parallax(speed: f64) -> String {
    let offset = use_state_eq(|| (0.0_f64, 0.0_f64));
    let (width, height) = use_window_size();

    {
        let offset = offset.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            let pointer = (f64::from(e.client_x()), f64::from(e.client_y()));
            offset.set(mouse_parallax(pointer, (width, height), speed));
        });
    }

    let (x, y) = *offset;
    format!("transform: translate({}px, {}px);", x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_parallax_scales_offset() {
        assert_eq!(parallax_translate(200.0, DEFAULT_SCROLL_SPEED), "transform: translateY(100px);");
        assert_eq!(parallax_translate(0.0, 0.3), "transform: translateY(0px);");
    }

    #[test]
    fn pointer_at_centre_is_still() {
        assert_eq!(mouse_parallax((500.0, 400.0), (1000.0, 800.0), DEFAULT_MOUSE_SPEED), (0.0, 0.0));
    }

    #[test]
    fn pointer_top_left_pulls_negative() {
        let (x, y) = mouse_parallax((0.0, 0.0), (1000.0, 800.0), DEFAULT_MOUSE_SPEED);
        assert!((x + 50.0).abs() < 1e-9);
        assert!((y + 40.0).abs() < 1e-9);
    }
}
