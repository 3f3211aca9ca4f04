use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;

/// A controlled dropdown shell: an always-visible toggle plus an entry
/// container that only exists while `is_open`.
///
/// The component holds no state of its own. The owner supplies `is_open`,
/// reacts to [`DropdownToggle`]'s `on_toggle`, and receives `on_select` when
/// a click on any entry bubbles up to the open container.
#[derive(Props, Clone, PartialEq)]
pub struct DropdownProps {
    #[props(default = false)]
    pub is_open: bool,
    /// Fired when a click reaches the open entry container.
    #[props(default)]
    pub on_select: Option<EventHandler<MouseEvent>>,
    /// The always-visible trigger, usually a [`DropdownToggle`].
    pub toggle: Element,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Dropdown(props: DropdownProps) -> Element {
    let base = vec![Attribute::new("class", "dropdown", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let on_select = props.on_select;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "data-open": if props.is_open { "true" } else { "false" },
            ..merged,
            {props.toggle}
            if props.is_open {
                ul {
                    class: "dropdown-menu",
                    role: "menu",
                    onclick: move |evt| {
                        if let Some(handler) = &on_select {
                            handler.call(evt);
                        }
                    },
                    {props.children}
                }
            }
        }
    }
}

/// The trigger button for a [`Dropdown`].
///
/// Reports the state it wants rather than a flip request: clicking while
/// closed calls `on_toggle(true)`, clicking while open calls
/// `on_toggle(false)`.
#[component]
pub fn DropdownToggle(
    #[props(default = false)] is_open: bool,
    on_toggle: EventHandler<bool>,
    /// Set false for plain text triggers (e.g. the top-bar user menu).
    #[props(default = true)]
    show_caret: bool,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "dropdown-toggle",
            r#type: "button",
            "aria-expanded": is_open,
            onclick: move |_| on_toggle.call(!is_open),
            {children}
            if show_caret {
                span { class: "dropdown-toggle-caret",
                    Icon::<LdChevronDown> { icon: LdChevronDown, width: 14, height: 14 }
                }
            }
        }
    }
}

/// One selectable entry inside an open [`Dropdown`].
#[component]
pub fn DropdownItem(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "dropdown-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li { role: "none",
            // Clicks must keep bubbling: the container's handler is the
            // selection signal.
            button {
                r#type: "button",
                role: "menuitem",
                onclick: move |evt| {
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                ..merged,
                {children}
            }
        }
    }
}

/// Non-selectable divider between entry groups.
#[component]
pub fn DropdownSeparator() -> Element {
    rsx! {
        li { class: "dropdown-separator", role: "separator" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_dropdown_renders_toggle_but_no_entries() {
        let html = render(|| {
            rsx! {
                Dropdown {
                    is_open: false,
                    toggle: rsx! {
                        DropdownToggle { on_toggle: |_| {}, "Menu" }
                    },
                    DropdownItem { "Entry" }
                }
            }
        });
        assert!(html.contains("Menu"));
        assert!(!html.contains("dropdown-menu"));
        assert!(!html.contains("Entry"));
    }

    #[test]
    fn open_dropdown_renders_entries_in_supplied_order() {
        let html = render(|| {
            rsx! {
                Dropdown {
                    is_open: true,
                    toggle: rsx! {
                        DropdownToggle { is_open: true, on_toggle: |_| {}, "Menu" }
                    },
                    DropdownItem { "Alpha" }
                    DropdownItem { "Beta" }
                    DropdownItem { "Gamma" }
                }
            }
        });
        let alpha = html.find("Alpha").unwrap();
        let beta = html.find("Beta").unwrap();
        let gamma = html.find("Gamma").unwrap();
        assert!(alpha < beta && beta < gamma);
        assert_eq!(html.matches(r#"role="menuitem""#).count(), 3);
    }

    #[test]
    fn toggle_reflects_open_state() {
        let closed = render(|| {
            rsx! {
                DropdownToggle { is_open: false, on_toggle: |_| {}, "user" }
            }
        });
        assert!(closed.contains(r#"aria-expanded="false""#));

        let open = render(|| {
            rsx! {
                DropdownToggle { is_open: true, on_toggle: |_| {}, "user" }
            }
        });
        assert!(open.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn caret_can_be_suppressed() {
        let with_caret = render(|| {
            rsx! {
                DropdownToggle { on_toggle: |_| {}, "user" }
            }
        });
        assert!(with_caret.contains("dropdown-toggle-caret"));

        let plain = render(|| {
            rsx! {
                DropdownToggle { show_caret: false, on_toggle: |_| {}, "user" }
            }
        });
        assert!(!plain.contains("dropdown-toggle-caret"));
    }
}
