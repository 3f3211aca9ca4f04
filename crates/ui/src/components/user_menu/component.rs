use dioxus::prelude::*;

use crate::components::dropdown::{Dropdown, DropdownToggle};

/// Open/closed flag owned by a single [`UserMenu`] instance.
///
/// Nothing outside the widget reads or writes it; the two transitions below
/// are the only way it changes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct MenuState {
    is_open: bool,
}

impl MenuState {
    /// Absolute set: the toggle control passes the state it wants.
    fn toggle(&mut self, is_open: bool) {
        self.is_open = is_open;
    }

    /// Relative flip on entry selection. A selection that somehow arrives
    /// while closed opens the menu instead of keeping it shut.
    // TODO: confirm whether selection should always close instead of flip.
    fn select(&mut self) {
        self.is_open = !self.is_open;
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}

/// The logged-in user menu for the console top bar.
///
/// Shows `username` on a plain text toggle; while open, renders `children`
/// (the caller's entries, passed through opaquely) inside the dropdown.
#[component]
pub fn UserMenu(username: String, children: Element) -> Element {
    let mut state = use_signal(MenuState::default);
    let is_open = state.read().is_open();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Dropdown {
            id: "app-top-menu",
            class: "user-menu",
            is_open,
            on_select: move |_| state.write().select(),
            toggle: rsx! {
                DropdownToggle {
                    is_open,
                    show_caret: false,
                    on_toggle: move |open| state.write().toggle(open),
                    "{username}"
                }
            },
            {children}
        }
    }
}
