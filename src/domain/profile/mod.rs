//! Profile module - entity and opportunity input records.

mod entity_profile;
mod opportunity;

pub use entity_profile::EntityProfile;
pub use opportunity::Opportunity;
