// ============================================================================
// REFERRAL - Registered users, referrals, the point ledger and reservations
// ============================================================================
// All read-mostly. Points are an append-only ledger: deductions are entries
// with negative points.
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::null_default;
use super::{RecordId, Resource};
use crate::services::endpoints;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub uuid: String,
    #[serde(default, deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_default")]
    pub points: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub referral_code: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for User {
    const PLURAL: &'static str = "users";
    const SINGULAR: &'static str = "user";

    fn collection_path() -> String {
        endpoints::user::LIST.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::user::item(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_default")]
    pub user_uuid: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub phone_number: String,
}

impl Resource for Referral {
    const PLURAL: &'static str = "referrals";
    const SINGULAR: &'static str = "referral";

    fn collection_path() -> String {
        endpoints::referral::ALL.to_string()
    }

    /// Referrals are never edited or deleted from the console
    fn item_path(id: &RecordId) -> String {
        format!("{}{}/", endpoints::referral::ALL, id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointEntry {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_default")]
    pub user_uuid: String,
    pub points: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub reason: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub phone_number: String,
    /// "How did you find us" answer from the contact form
    #[serde(default, deserialize_with = "null_default")]
    pub find_us: String,
}

impl Resource for Reservation {
    const PLURAL: &'static str = "reservations";
    const SINGULAR: &'static str = "reservation";

    fn collection_path() -> String {
        endpoints::reservation::LIST.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        format!("{}{}/", endpoints::reservation::LIST, id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Ledger total for a set of entries
pub fn total_points(entries: &[PointEntry]) -> i64 {
    entries.iter().map(|entry| entry.points).sum()
}
