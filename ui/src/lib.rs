//! Shared UI crate for the sanctions registry. Views, record model and
//! localization live here; platform crates only add routing and launch.

pub mod core;
pub mod i18n;
pub mod sanctions;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod icons;

    mod tooltip;
    pub use tooltip::Tooltip;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
