mod home;
pub use home::{lookup_target, Home};
pub use crate::sanctions::CompanySanctionDetail;
