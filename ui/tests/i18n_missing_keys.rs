//! Locale parity: every locale defines the same messages as the fallback,
//! with the same `$variables`, and no message twice.
//!
//! Adding a locale means adding its file to `LOCALES` below.

use std::collections::{BTreeMap, BTreeSet};

const FALLBACK: (&str, &str) = ("en-US", include_str!("../i18n/en-US/sanctions-ui.ftl"));

const LOCALES: &[(&str, &str)] = &[("uk-UA", include_str!("../i18n/uk-UA/sanctions-ui.ftl"))];

/// Message id → variables referenced by its value.
///
/// Only single-line messages are used in this crate, so a line-based scan is
/// enough: comments, terms (`-id`), attributes (`.attr`) and indented
/// continuation lines are skipped.
fn messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in src.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let line = line.trim_end();
        if line.is_empty() || line.starts_with(['#', '-', '.']) {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim().to_string();
        let previous = out.insert(id.clone(), variables(value));
        assert!(previous.is_none(), "{locale}: message `{id}` defined twice");
    }
    out
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn fallback_is_well_formed() {
    let fallback = messages(FALLBACK.1, FALLBACK.0);
    assert!(!fallback.is_empty(), "fallback locale defines no messages");
    assert_eq!(
        fallback["sanctions-under-presidential-decree"],
        BTreeSet::from(["decree".to_string()])
    );
}

#[test]
fn all_locales_match_fallback() {
    let fallback = messages(FALLBACK.1, FALLBACK.0);
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        let translated = messages(src, locale);

        let missing: Vec<_> = fallback
            .keys()
            .filter(|id| !translated.contains_key(*id))
            .cloned()
            .collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {}", missing.join(", ")));
        }

        let extra: Vec<_> = translated
            .keys()
            .filter(|id| !fallback.contains_key(*id))
            .cloned()
            .collect();
        if !extra.is_empty() {
            failures.push(format!("{locale} defines unknown ids: {}", extra.join(", ")));
        }

        for (id, vars) in &fallback {
            if let Some(theirs) = translated.get(id) {
                if theirs != vars {
                    failures.push(format!(
                        "{locale}: `{id}` uses {theirs:?}, fallback uses {vars:?}"
                    ));
                }
            }
        }
    }

    assert!(
        failures.is_empty(),
        "translation parity check failed:\n  {}",
        failures.join("\n  ")
    );
}

/// `fl!` finds the fallback file through `i18n.toml`, not through the runtime loader.
#[test]
fn config_domain_names_the_ftl_files() {
    let config = include_str!("../i18n.toml");
    let domain = config
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "domain")
        .map(|(_, value)| value.trim().trim_matches('"'))
        .expect("i18n.toml sets a fluent domain");
    assert_eq!(domain, "sanctions-ui");

    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("i18n");
    for locale in std::iter::once(FALLBACK.0).chain(LOCALES.iter().map(|(l, _)| *l)) {
        let file = root.join(locale).join(format!("{domain}.ftl"));
        assert!(file.is_file(), "missing {}", file.display());
    }
}
