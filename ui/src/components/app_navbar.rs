use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Route-aware links supplied by the platform crate, which owns the `Route`
/// enum. Each builder gets the localized label and returns a finished link:
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navbar links already registered");
    }
}

/// Brand, registered links (or `children` when nothing is registered) and
/// the language switcher.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    // The platform may share the active language tag so the whole tree
    // re-renders on a switch; without it the navbar keeps its own copy.
    let shared = try_use_context::<Signal<String>>();
    let local = use_signal(i18n::current_language_tag);
    let active = shared.map(|tag| tag()).unwrap_or_else(|| local());

    let links = match NAV_BUILDER.get() {
        Some(builder) => (builder.home)(&t!("nav-home")),
        None => children,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Sanctions" }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }
                nav { class: "navbar__links", {links} }
                LanguageSwitcher { active, shared, local }
            }
        }
    }
}

#[component]
fn LanguageSwitcher(
    active: String,
    shared: Option<Signal<String>>,
    local: Signal<String>,
) -> Element {
    let languages = use_hook(i18n::available_languages);
    if languages.len() < 2 {
        return rsx! {};
    }

    let switch = move |evt: FormEvent| {
        let tag = evt.value();
        if let Err(err) = i18n::set_language(&tag) {
            tracing::warn!(lang = %tag, "language switch failed: {err}");
            return;
        }
        tracing::info!(lang = %tag, "language switched");
        let mut local = local;
        local.set(tag.clone());
        if let Some(mut shared) = shared {
            shared.set(tag);
        }
    };

    rsx! {
        div { class: "navbar__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select { id: "locale-select", value: "{active}", oninput: switch,
                for tag in languages {
                    option {
                        key: "{tag}",
                        value: "{tag}",
                        selected: tag == active,
                        "{tag}"
                    }
                }
            }
        }
    }
}
