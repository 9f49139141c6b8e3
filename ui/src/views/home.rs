use dioxus::prelude::*;

use crate::t;

/// Trim the typed identifier; blank input opens nothing.
pub fn lookup_target(raw: &str) -> Option<String> {
    let id = raw.trim();
    (!id.is_empty()).then(|| id.to_string())
}

/// Landing page with a record lookup form.
///
/// `on_lookup` receives the trimmed identifier; the platform crate turns it
/// into a route (the shared crate does not know the `Route` enum).
#[component]
pub fn Home(on_lookup: EventHandler<String>) -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(crate::i18n::current_language_tag);
    tracing::trace!(lang = %lang_current, "home render");

    let mut draft = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(id) = lookup_target(&draft()) {
            on_lookup.call(id);
        }
    };

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }

            form { class: "lookup", onsubmit: submit,
                label { class: "lookup__label", r#for: "lookup-id", {t!("home-lookup-label")} }
                div { class: "lookup__row",
                    input {
                        id: "lookup-id",
                        class: "lookup__input",
                        r#type: "text",
                        placeholder: t!("home-lookup-placeholder"),
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button { class: "button button--primary", r#type: "submit",
                        {t!("home-lookup-submit")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_trims_identifier() {
        assert_eq!(lookup_target("  1024 ").as_deref(), Some("1024"));
    }

    #[test]
    fn blank_lookup_is_ignored() {
        assert_eq!(lookup_target(""), None);
        assert_eq!(lookup_target(" \t"), None);
    }

    #[test]
    fn odd_identifiers_pass_through() {
        assert_eq!(lookup_target("ab/12").as_deref(), Some("ab/12"));
    }
}
