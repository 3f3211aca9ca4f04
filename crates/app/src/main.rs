use dioxus::prelude::*;

use console_ui::{DropdownItem, DropdownSeparator, UserMenu, ViewInfoListSkeleton};

/// Width handed to the skeleton; the real list pane is fixed-width in the
/// console layout, so the demo mirrors that.
const LIST_WIDTH: f64 = 640.0;

fn main() {
    dioxus::launch(App);
}

/// Demo shell: a top bar with the user menu and a list pane that shows the
/// skeleton until the simulated fetch resolves.
#[component]
fn App() -> Element {
    let views = use_resource(|| async {
        vec!["Customers view", "Inventory view", "Orders view"]
    });

    rsx! {
        header { class: "top-bar",
            span { class: "top-bar-brand", "Integration Console" }
            UserMenu { username: "developer",
                DropdownItem {
                    onclick: |_| tracing::info!("account settings selected"),
                    "Account settings"
                }
                DropdownSeparator {}
                DropdownItem {
                    onclick: |_| tracing::info!("logout selected"),
                    "Logout"
                }
            }
        }
        main { class: "view-info-list",
            match &*views.read() {
                Some(names) => rsx! {
                    ul {
                        for name in names.iter() {
                            li { "{name}" }
                        }
                    }
                },
                None => rsx! {
                    ViewInfoListSkeleton { width: LIST_WIDTH }
                },
            }
        }
    }
}
