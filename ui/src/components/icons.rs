//! Inline stroke icons (24×24 grid, `currentColor`), so they pick up the
//! surrounding text colour.

use dioxus::prelude::*;

#[component]
pub fn ArrowLeftIcon(#[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            line { x1: "19", y1: "12", x2: "5", y2: "12" }
            polyline { points: "12 19 5 12 12 5" }
        }
    }
}

#[component]
pub fn PrinterIcon(#[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            polyline { points: "6 9 6 2 18 2 18 9" }
            path { d: "M6 18H4a2 2 0 0 1-2-2v-5a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v5a2 2 0 0 1-2 2h-2" }
            rect { x: "6", y: "14", width: "12", height: "8" }
        }
    }
}

#[component]
pub fn DownloadIcon(#[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "7 10 12 15 17 10" }
            line { x1: "12", y1: "15", x2: "12", y2: "3" }
        }
    }
}

/// Neutral company placeholder used until records carry real logos.
#[component]
pub fn CompanyLogoPlaceholder(label: String) -> Element {
    rsx! {
        svg {
            class: "company-logo",
            view_box: "0 0 64 64",
            role: "img",
            "aria-label": "{label}",
            rect { x: "2", y: "2", width: "60", height: "60", rx: "12", fill: "#e2e8f0" }
            path {
                d: "M18 48V20h18v28M36 30h10v18M22 26h4M28 26h4M22 32h4M28 32h4M22 38h4M28 38h4M40 36h2M40 42h2",
                fill: "none",
                stroke: "#64748b",
                stroke_width: "2",
                stroke_linecap: "round",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn action_icons_are_hidden_from_assistive_tech() {
        let html = render(|| rsx! {
            ArrowLeftIcon {}
            PrinterIcon {}
            DownloadIcon { class: "icon icon--small" }
        });
        assert_eq!(html.matches("aria-hidden=\"true\"").count(), 3);
        assert!(html.contains("class=\"icon icon--small\""));
    }

    #[test]
    fn logo_placeholder_is_labelled() {
        let html = render(|| rsx! { CompanyLogoPlaceholder { label: "Company logo" } });
        assert!(html.contains("role=\"img\""));
        assert!(html.contains("aria-label=\"Company logo\""));
    }
}
