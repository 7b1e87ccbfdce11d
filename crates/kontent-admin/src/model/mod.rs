// Model types for Management/Subscription API payloads

pub mod assignment;
pub mod common;
pub mod item;
pub mod language;
pub mod user;
pub mod variant;

pub use assignment::{AssignOptions, AssignmentResult};
pub use common::Reference;
pub use item::{ContentItem, ContentItemPage, Pagination};
pub use language::{Language, LanguageListing};
pub use user::{SubscriptionUser, SubscriptionUserListing};
pub use variant::{
    Contributor, LanguageVariant, VariantAssignments, VariantUpsert, merge_contributor,
    without_contributor,
};
