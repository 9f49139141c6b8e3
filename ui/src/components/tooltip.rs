use dioxus::prelude::*;

/// CSS-only hover/focus tooltip, shown below its children.
#[component]
pub fn Tooltip(
    /// Bubble text.
    content: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        span { class: "tooltip {class}", tabindex: "0",
            {children}
            span { class: "tooltip__bubble", role: "tooltip", "{content}" }
        }
    }
}
