use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{DESKTOP_BREAKPOINT_PX, HEADER_OFFSET_PX, PAGE_LOADED_DELAY_MS, SECTION_JUMP_DELAY_MS};
use crate::error;
use crate::utils::scroll::scroll_to_element;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub page_loaded: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppAction {
    ToggleMenu,
    CloseMenu,
    /// New viewport width; reaching desktop width closes the mobile menu.
    Resized(f64),
    Loaded,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        let next = match action {
            AppAction::ToggleMenu => AppState {
                menu_open: !self.menu_open,
                ..(*self).clone()
            },
            AppAction::CloseMenu => AppState {
                menu_open: false,
                ..(*self).clone()
            },
            AppAction::Resized(width) if width >= DESKTOP_BREAKPOINT_PX => AppState {
                menu_open: false,
                ..(*self).clone()
            },
            AppAction::Resized(_) => return self,
            AppAction::Loaded => AppState {
                page_loaded: true,
                ..(*self).clone()
            },
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub type AppContext = UseReducerHandle<AppState>;

/// Closes the menu, then glides to the section once the menu is out of the way.
pub fn scroll_to_section(app: &AppContext, id: &'static str) {
    app.dispatch(AppAction::CloseMenu);
    Timeout::new(SECTION_JUMP_DELAY_MS, move || {
        if let Err(e) = scroll_to_element(id, HEADER_OFFSET_PX) {
            warn!("cannot jump to section: {}", e);
        }
    })
    .forget();
}

fn lock_body_scroll(locked: bool) {
    let body = match error::document().map(|d| d.body()) {
        Ok(Some(body)) => body,
        _ => return,
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        warn!("cannot toggle body scroll: {:?}", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProviderProps {
    pub children: Children,
}

#[function_component(AppProvider)]
pub fn app_provider(props: &AppProviderProps) -> Html {
    let app = use_reducer(AppState::default);

    {
        let app = app.clone();
        use_timeout(
            move || {
                debug!("page marked as loaded");
                app.dispatch(AppAction::Loaded);
            },
            PAGE_LOADED_DELAY_MS,
        );
    }

    {
        let menu_open = app.menu_open;
        use_effect_with_deps(
            move |open| {
                lock_body_scroll(*open);
                || lock_body_scroll(false)
            },
            menu_open,
        );
    }

    {
        let (width, _) = use_window_size();
        let app = app.clone();
        use_effect_with_deps(
            move |width| {
                app.dispatch(AppAction::Resized(f64::from(*width)));
                || ()
            },
            width as u32,
        );
    }

    html! {
        <ContextProvider<AppContext> context={app}>
            { for props.children.iter() }
        </ContextProvider<AppContext>>
    }
}

#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("use_app called outside AppProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AppState, action: AppAction) -> AppState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn toggle_flips_menu() {
        let open = reduce(AppState::default(), AppAction::ToggleMenu);
        assert!(open.menu_open);
        assert!(!reduce(open, AppAction::ToggleMenu).menu_open);
    }

    #[test]
    fn close_is_idempotent() {
        let closed = reduce(AppState::default(), AppAction::CloseMenu);
        assert_eq!(closed, AppState::default());
    }

    #[test]
    fn desktop_resize_closes_menu() {
        let open = AppState {
            menu_open: true,
            ..AppState::default()
        };
        assert!(reduce(open.clone(), AppAction::Resized(767.0)).menu_open);
        assert!(!reduce(open, AppAction::Resized(768.0)).menu_open);
    }

    #[test]
    fn loaded_keeps_menu_state() {
        let open = AppState {
            menu_open: true,
            page_loaded: false,
        };
        let loaded = reduce(open, AppAction::Loaded);
        assert!(loaded.page_loaded);
        assert!(loaded.menu_open);
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let state = Rc::new(AppState::default());
        let next = state.clone().reduce(AppAction::Resized(1200.0));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
