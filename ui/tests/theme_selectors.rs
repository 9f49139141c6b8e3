//! Selector lint for the detail page stylesheet.
//!
//! The detail view's markup relies on these classes. A substring check is
//! enough to catch a rename on one side only; if a selector is renamed on
//! purpose, update the component markup and this list together.

const DETAIL_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/sanction_detail.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const DETAIL_SELECTORS: &[&str] = &[
    ".sanction-detail {",
    ".sanction-detail__header",
    ".sanction-detail__back",
    ".sanction-detail__actions",
    ".sanction-detail__action",
    ".sanction-detail__summary",
    ".sanction-detail__name",
    ".sanction-detail__field",
    ".sanction-detail__field-label",
    ".sanction-detail__field-value",
    ".sanction-detail__meta",
    ".sanction-detail__decree",
    ".sanction-table",
    ".sanction-table__row",
    ".sanction-detail__footer",
    ".sanction-detail--failed",
    ".tooltip__bubble",
    "@media print",
    "@media (max-width: 720px)",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__links",
    ".navbar__link",
    ".navbar__locale",
    ".visually-hidden",
];

fn missing<'a>(css: &str, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|selector| !css.contains(selector))
        .collect()
}

#[test]
fn detail_stylesheet_has_required_selectors() {
    let missing = missing(DETAIL_CSS, DETAIL_SELECTORS);
    assert!(missing.is_empty(), "missing detail selectors:\n{}", missing.join("\n"));
}

#[test]
fn navbar_stylesheet_has_required_selectors() {
    let missing = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(missing.is_empty(), "missing navbar selectors:\n{}", missing.join("\n"));
}

#[test]
fn print_rules_hide_the_disabled_actions() {
    let print = DETAIL_CSS
        .split("@media print")
        .nth(1)
        .expect("print block present");
    assert!(print.contains(".sanction-detail__header"));
    assert!(print.contains(".sanction-detail__footer"));
    assert!(print.contains("display: none"));
}
