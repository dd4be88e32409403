use serde::{Deserialize, Serialize};

use super::de::{null_default, string_or_number};
use super::RecordId;

/// The console manages exactly two plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Gold,
    Platinum,
}

impl PlanKind {
    pub const ALL: [PlanKind; 2] = [PlanKind::Gold, PlanKind::Platinum];

    pub fn as_str(self) -> &'static str {
        match self {
            PlanKind::Gold => "gold",
            PlanKind::Platinum => "platinum",
        }
    }

    /// Plan names come back in any case ("Gold", "GOLD", "gold")
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "gold" => Some(PlanKind::Gold),
            "platinum" => Some(PlanKind::Platinum),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub benefit_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub limited_offer: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub referral_limit: i64,
    /// Older records may carry a non-list here; those read as empty
    #[serde(default, deserialize_with = "benefits_or_empty")]
    pub benefits: Vec<Benefit>,
}

fn benefits_or_empty<'de, D>(deserializer: D) -> Result<Vec<Benefit>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
