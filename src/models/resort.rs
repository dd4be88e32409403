// ============================================================================
// RESORT - Partner resort and the three content sections built by the wizard
// ============================================================================
// Resort owns a Place. ResortFormData references the Resort; the welcome and
// why-choose sections reference the ResortFormData.
// ============================================================================

use serde::{Deserialize, Serialize};

use super::de::{null_default, string_or_number};
use super::{RecordId, Resource};
use crate::services::endpoints;
use crate::services::transport::Method;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resort {
    pub id: RecordId,
    /// Detail, update and delete paths use this when present
    #[serde(default)]
    pub uuid: Option<RecordId>,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub location: String,
    #[serde(default)]
    pub place: Option<Place>,
    /// URL of the uploaded image
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(default)]
    pub is_featured: bool,
}

impl Resort {
    /// Identifier for `/api/resorts/<key>/`: the uuid, or the numeric id for
    /// records that predate uuids
    pub fn key(&self) -> &RecordId {
        self.uuid.as_ref().unwrap_or(&self.id)
    }
}

impl Resource for Resort {
    const PLURAL: &'static str = "resorts";
    const SINGULAR: &'static str = "Resort";
    const UPDATE_METHOD: Method = Method::Put;

    fn collection_path() -> String {
        endpoints::resort::LIST.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::resort::item(id)
    }

    fn create_path() -> String {
        endpoints::resort::CREATE.to_string()
    }

    fn id(&self) -> &RecordId {
        self.key()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortImage {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortFormData {
    pub id: RecordId,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default)]
    pub resort: Option<RecordId>,
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<ResortImage>,
}

impl Resource for ResortFormData {
    const PLURAL: &'static str = "resort details";
    const SINGULAR: &'static str = "Resort details";

    fn collection_path() -> String {
        endpoints::resort_form_data::LIST.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::resort_form_data::item(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WelcomeSection {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub highlight: String,
    #[serde(default, deserialize_with = "null_default")]
    pub subtitle: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub form_data: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhyChooseSection {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub form_data: Option<RecordId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resort_accepts_numeric_or_string_price() {
        let resorts: Vec<Resort> = serde_json::from_str(
            r#"[
                {"id": 1, "name": "Ayam Bay", "location": "Bali", "price": "1200.00", "is_featured": true,
                 "place": {"id": 4, "name": "Ubud", "location": "Bali"}},
                {"id": 2, "name": "Hill Camp", "location": null, "price": 800}
            ]"#,
        )
        .unwrap();

        assert_eq!(resorts[0].price, "1200.00");
        assert_eq!(resorts[0].place.as_ref().map(|p| p.id.clone()), Some(RecordId::Int(4)));
        assert_eq!(resorts[1].price, "800");
        assert_eq!(resorts[1].location, "");
        assert!(!resorts[1].is_featured);
    }

    #[test]
    fn resort_is_addressed_by_uuid_when_it_has_one() {
        let resorts: Vec<Resort> = serde_json::from_str(
            r#"[
                {"id": 1, "uuid": "9b1f-44aa", "name": "Ayam Bay"},
                {"id": 2, "uuid": null, "name": "Hill Camp"}
            ]"#,
        )
        .unwrap();

        assert_eq!(Resort::item_path(resorts[0].id()), "/api/resorts/9b1f-44aa/");
        assert_eq!(Resort::item_path(resorts[1].id()), "/api/resorts/2/");
    }
}
