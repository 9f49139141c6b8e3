use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;

use crate::{
    components::{
        icons::{ArrowLeftIcon, CompanyLogoPlaceholder, DownloadIcon, PrinterIcon},
        Tooltip,
    },
    core::{chrome::use_top_bar_hidden, format::render_date},
    i18n, t,
};

use super::{load_company_sanction, summary_rows, CompanySanction, DetailState};

const DETAIL_CSS: Asset = asset!("/assets/styling/sanction_detail.css");

/// The one navigation operation the detail view needs from its host.
pub trait HistoryBack {
    fn go_back(&self);
}

impl HistoryBack for Navigator {
    fn go_back(&self) {
        Navigator::go_back(self);
    }
}

fn leave<N: HistoryBack>(navigation: &N) {
    tracing::debug!("leaving company sanction detail");
    navigation.go_back();
}

/// Routed page for one sanctioned company.
#[component]
pub fn CompanySanctionDetail(id: String) -> Element {
    let state = use_company_sanction(id);
    let navigator = use_navigator();

    rsx! {
        document::Link { rel: "stylesheet", href: DETAIL_CSS }
        SanctionDetailBody {
            state: state(),
            on_back: move |_| leave(&navigator),
        }
    }
}

/// Load one company sanction for the calling component.
///
/// Fetches `sanction/company/{id}/` once, using the id present at mount, and
/// hides the shared top bar while mounted. The fetch task is cancelled when
/// the component goes away; a result that still arrives late is dropped.
pub fn use_company_sanction(id: String) -> Signal<DetailState> {
    use_top_bar_hidden();

    let api = try_use_context::<ApiClient>();
    let mut state = use_signal(|| DetailState::Pending);

    let task = use_hook(move || {
        let api = api.unwrap_or_else(|| ApiClient::new(ApiConfig::from_env()));
        spawn(async move {
            let next = load_company_sanction(&api, &id).await;
            if let Ok(mut slot) = state.try_write() {
                *slot = next;
            }
        })
    });
    use_drop(move || task.cancel());

    state
}

/// Pure rendering of a [`DetailState`].
#[component]
pub fn SanctionDetailBody(state: DetailState, on_back: EventHandler<()>) -> Element {
    match state {
        DetailState::Pending | DetailState::Absent => rsx! {},
        DetailState::Failed(reason) => rsx! {
            article { class: "sanction-detail sanction-detail--failed",
                {detail_header(on_back)}
                p { class: "sanction-detail__error", {t!("detail-load-failed")} }
                p { class: "sanction-detail__error-reason", "{reason}" }
            }
        },
        DetailState::Ready(record) => render_record(&record, on_back),
    }
}

fn render_record(record: &CompanySanction, on_back: EventHandler<()>) -> Element {
    let lang = i18n::current_language_code();
    let rows = summary_rows(record, &lang);
    let name = record.name.clone().unwrap_or_default();
    let id = record.id.clone().unwrap_or_default();
    let updated_label = t!("updated-at");
    let updated_at = render_date(record.updated_at.as_deref());
    let decree_banner = record.decree.as_deref().map(|decree| {
        let sentence = t!("sanctions-under-presidential-decree", decree = decree);
        format!("{sentence} {}", render_date(record.start_date.as_deref()))
    });

    rsx! {
        article { class: "sanction-detail",
            {detail_header(on_back)}

            div { class: "sanction-detail__summary",
                div { class: "sanction-detail__logo",
                    CompanyLogoPlaceholder { label: t!("company-logo-alt") }
                }
                div { class: "sanction-detail__main",
                    h2 { class: "sanction-detail__name", "{name}" }
                    dl { class: "sanction-detail__fields",
                        for (label, value) in rows.into_iter() {
                            div { class: "sanction-detail__field",
                                dt { class: "sanction-detail__field-label", "{label.text()}:" }
                                dd { class: "sanction-detail__field-value", "{value}" }
                            }
                        }
                    }
                }
                div { class: "sanction-detail__meta",
                    div { class: "sanction-detail__id", "ID: {id}" }
                    div { class: "sanction-detail__updated", "{updated_label}: {updated_at}" }
                }
            }

            div { class: "sanction-detail__sanctions",
                if let Some(banner) = decree_banner {
                    p { class: "sanction-detail__decree", "{banner}" }
                }
                {sanction_table(record)}
            }

            footer { class: "sanction-detail__footer",
                {pending_actions()}
            }
        }
    }
}

fn detail_header(on_back: EventHandler<()>) -> Element {
    rsx! {
        header { class: "sanction-detail__header",
            button {
                r#type: "button",
                class: "sanction-detail__back",
                onclick: move |_| on_back.call(()),
                ArrowLeftIcon { class: "icon icon--wide" }
                {t!("back")}
            }
            {pending_actions()}
        }
    }
}

/// Print and PDF export are not built yet: both only explain that on hover.
fn pending_actions() -> Element {
    rsx! {
        Tooltip { content: t!("in-development"), class: "sanction-detail__actions",
            span { class: "sanction-detail__action", aria_disabled: "true",
                PrinterIcon {}
                {t!("print")}
            }
            span { class: "sanction-detail__action", aria_disabled: "true",
                DownloadIcon {}
                {t!("download-pdf")}
            }
        }
    }
}

/// One row per sanction type. The backend only dates the record as a whole,
/// so every row carries the same dates and cancellation condition.
fn sanction_table(record: &CompanySanction) -> Element {
    if record.types_of_sanctions.is_empty() {
        return rsx! {};
    }

    let start = render_date(record.start_date.as_deref());
    let end = render_date(record.end_date.as_deref());
    let reasoning = render_date(record.reasoning_date.as_deref());
    let condition = record.cancellation_condition.clone().unwrap_or_default();

    rsx! {
        div { class: "sanction-detail__table-wrap",
            table { class: "sanction-table",
                thead {
                    tr {
                        th { {t!("type-of-sanction")} }
                        th { {t!("start-date")} }
                        th { {t!("end-date")} }
                        th { {t!("reasoning-date")} }
                        th { {t!("canceling-conditions")} }
                    }
                }
                tbody {
                    for (index, label) in record.types_of_sanctions.iter().enumerate() {
                        tr { key: "{index}-{label}", class: "sanction-table__row",
                            td { "{label}" }
                            td { "{start}" }
                            td { "{end}" }
                            td { "{reasoning}" }
                            td { "{condition}" }
                        }
                    }
                }
            }
        }
    }
}
