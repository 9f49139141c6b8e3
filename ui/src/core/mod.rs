pub mod chrome;
pub mod format;
