use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use api::{ApiClient, ApiConfig};
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::chrome::use_top_bar_visibility;
use ui::views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/sanction/company/:id")]
    CompanySanction { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[logger] failed to install tracing subscriber: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { home: nav_home });

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language_tag);
    use_context_provider(|| lang_code);

    use_context_provider(|| {
        let config = ApiConfig::from_env();
        tracing::info!(base_url = %config.base_url, "sanctions api configured");
        ApiClient::new(config)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // Keyed wrapper forces a full remount of the routed subtree on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: the shared navbar, left out while a page holds the top bar.
#[component]
fn WebLayout() -> Element {
    let top_bar_visible = use_top_bar_visibility();

    rsx! {
        if top_bar_visible() {
            AppNavbar {}
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let navigator = use_navigator();

    rsx! {
        views::Home {
            on_lookup: move |id: String| {
                navigator.push(Route::CompanySanction { id });
            },
        }
    }
}

#[component]
fn CompanySanction(id: String) -> Element {
    rsx! {
        views::CompanySanctionDetail { id }
    }
}
