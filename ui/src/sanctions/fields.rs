//! Summary fields shown under the company name.
//!
//! The list is fixed and ordered. Each entry names its label, how to read the
//! raw value off the record, and how to format it. Entries whose value is
//! unset (or formats to nothing) are skipped.

use crate::core::format::{localized_field, render_date};

use super::record::CompanySanction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLabel {
    TaxpayerNumber,
    Address,
    CountryOfRegistration,
    NameOriginal,
    RegistrationNumber,
    RegistrationDate,
    Reasoning,
    ReferenceData,
}

impl FieldLabel {
    pub fn text(self) -> String {
        match self {
            Self::TaxpayerNumber => crate::t!("taxpayer-number"),
            Self::Address => crate::t!("address"),
            Self::CountryOfRegistration => crate::t!("country-of-registration"),
            Self::NameOriginal => crate::t!("name-original"),
            Self::RegistrationNumber => crate::t!("registration-number"),
            Self::RegistrationDate => crate::t!("registration-date"),
            Self::Reasoning => crate::t!("reasoning"),
            Self::ReferenceData => crate::t!("reference-data"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    Plain,
    Date,
    LocalizedName,
}

enum Raw<'a> {
    Text(Option<&'a str>),
    Localized(Option<&'a serde_json::Value>),
}

pub struct FieldSpec {
    pub label: FieldLabel,
    access: fn(&CompanySanction) -> Raw<'_>,
    pub formatter: Formatter,
}

pub const SUMMARY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        label: FieldLabel::TaxpayerNumber,
        access: |r| Raw::Text(r.taxpayer_number.as_deref()),
        formatter: Formatter::Plain,
    },
    FieldSpec {
        label: FieldLabel::Address,
        access: |r| Raw::Text(r.address.as_deref()),
        formatter: Formatter::Plain,
    },
    FieldSpec {
        label: FieldLabel::CountryOfRegistration,
        access: |r| Raw::Localized(r.country_of_registration.as_ref()),
        formatter: Formatter::LocalizedName,
    },
    FieldSpec {
        label: FieldLabel::NameOriginal,
        access: |r| Raw::Text(r.name_original.as_deref()),
        formatter: Formatter::Plain,
    },
    FieldSpec {
        label: FieldLabel::RegistrationNumber,
        access: |r| Raw::Text(r.registration_number.as_deref()),
        formatter: Formatter::Plain,
    },
    FieldSpec {
        label: FieldLabel::RegistrationDate,
        access: |r| Raw::Text(r.registration_date.as_deref()),
        formatter: Formatter::Date,
    },
    FieldSpec {
        label: FieldLabel::Reasoning,
        access: |r| Raw::Text(r.reasoning.as_deref()),
        formatter: Formatter::Plain,
    },
    FieldSpec {
        label: FieldLabel::ReferenceData,
        access: |r| Raw::Text(r.additional_info.as_deref()),
        formatter: Formatter::Plain,
    },
];

impl FieldSpec {
    /// Display value for `record`, or `None` when the field is left out.
    pub fn display(&self, record: &CompanySanction, lang: &str) -> Option<String> {
        match ((self.access)(record), self.formatter) {
            (Raw::Text(Some(text)), Formatter::Date) if !text.is_empty() => {
                Some(render_date(Some(text)))
            }
            (Raw::Text(Some(text)), _) if !text.is_empty() => Some(text.to_string()),
            (Raw::Localized(Some(value)), _) => localized_field(value, "name", lang),
            _ => None,
        }
    }
}

/// `(label, value)` rows for the present fields, in display order.
pub fn summary_rows(record: &CompanySanction, lang: &str) -> Vec<(FieldLabel, String)> {
    SUMMARY_FIELDS
        .iter()
        .filter_map(|spec| spec.display(record, lang).map(|value| (spec.label, value)))
        .collect()
}
