// ============================================================================
// MODELS - Remote-owned records as the API serves them
// ============================================================================
// The console only keeps transient copies. Nothing here checks uniqueness or
// that a referenced id exists.
// ============================================================================

pub mod blog;
pub mod content;
pub mod membership;
pub mod record_id;
pub mod referral;
pub mod resort;
pub mod service;
pub mod study_abroad;

pub use blog::{Blog, BlogCategory, BlogHeading, BlogInner};
pub use content::{ResortFeature, ResortProperty, Review, SeoRecord, SuccessVideo};
pub use membership::{Benefit, Membership, PlanKind};
pub use record_id::RecordId;
pub use referral::{total_points, PointEntry, Referral, Reservation, User};
pub use resort::{Place, Resort, ResortFormData, WelcomeSection, WhyChooseSection};
pub use service::{ServiceDetail, ServiceDraft, ServiceHeading};
pub use study_abroad::{Country, University, WhyChooseReason};

use serde::de::DeserializeOwned;

use crate::forms::FormRecord;
use crate::services::transport::Method;

/// A record type with a list screen
pub trait Resource: DeserializeOwned + Clone {
    /// Used in "Failed to fetch <plural>."
    const PLURAL: &'static str;
    /// Used in "Failed to delete/save <singular>."
    const SINGULAR: &'static str;
    const UPDATE_METHOD: Method = Method::Patch;

    fn collection_path() -> String;
    fn item_path(id: &RecordId) -> String;

    fn create_path() -> String {
        Self::collection_path()
    }

    fn id(&self) -> &RecordId;
}

/// A record type with a create/edit form
pub trait Editable: Resource {
    type Draft: FormRecord + Default + Clone;

    fn to_draft(&self) -> Self::Draft;
}

/// Serde helpers for loosely typed server fields
pub(crate) mod de {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Prices and amounts arrive as "1200.00" or 1200
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        })
    }

    /// `null` becomes the type's default
    pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
