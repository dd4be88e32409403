// ============================================================================
// CONTENT - Reviews, success videos, SEO records, resort features/properties
// ============================================================================

use serde::{Deserialize, Serialize};

use super::de::null_default;
use super::{Editable, RecordId, Resource};
use crate::forms::{Field, FieldSpec, FormRecord};
use crate::services::endpoints;
use crate::services::transport::FilePart;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: RecordId,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub review: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessVideo {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Page metadata; one record per page, edited in place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_default")]
    pub meta_title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub meta_description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub meta_keywords: String,
    #[serde(default)]
    pub og_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortFeature {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortProperty {
    pub id: RecordId,
    pub name: String,
}

impl Resource for Review {
    const PLURAL: &'static str = "reviews";
    const SINGULAR: &'static str = "review";

    fn collection_path() -> String {
        endpoints::review::LIST.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::review::item(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for SuccessVideo {
    const PLURAL: &'static str = "success videos";
    const SINGULAR: &'static str = "success video";

    fn collection_path() -> String {
        endpoints::review::SUCCESS_VIDEOS.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::review::success_video(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for ResortFeature {
    const PLURAL: &'static str = "features";
    const SINGULAR: &'static str = "feature";

    fn collection_path() -> String {
        endpoints::resort_feature::LIST.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::resort_feature::item(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for ResortProperty {
    const PLURAL: &'static str = "properties";
    const SINGULAR: &'static str = "property";

    fn collection_path() -> String {
        endpoints::resort_property::LIST.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::resort_property::item(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub name: String,
    pub review: String,
    pub rating: Option<i64>,
    pub image: Option<FilePart>,
}

impl FormRecord for ReviewDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("name"),
            FieldSpec::required("review"),
            FieldSpec::optional("rating"),
            FieldSpec::optional("image"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("name", Field::input(&self.name)),
            ("review", Field::input(&self.review)),
            ("rating", Field::int(self.rating)),
            ("image", Field::file(&self.image)),
        ]
    }
}

impl Editable for Review {
    type Draft = ReviewDraft;

    fn to_draft(&self) -> ReviewDraft {
        ReviewDraft {
            name: self.name.clone(),
            review: self.review.clone(),
            rating: self.rating,
            image: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessVideoDraft {
    pub title: String,
    pub video: Option<FilePart>,
    pub thumbnail: Option<FilePart>,
}

impl FormRecord for SuccessVideoDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("title"),
            FieldSpec::required_on_create("video"),
            FieldSpec::optional("thumbnail"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("title", Field::input(&self.title)),
            ("video", Field::file(&self.video)),
            ("thumbnail", Field::file(&self.thumbnail)),
        ]
    }
}

impl Editable for SuccessVideo {
    type Draft = SuccessVideoDraft;

    fn to_draft(&self) -> SuccessVideoDraft {
        SuccessVideoDraft {
            title: self.title.clone(),
            video: None,
            thumbnail: None,
        }
    }
}

/// Features and properties are created from a single name input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameDraft {
    pub name: String,
}

impl FormRecord for NameDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[FieldSpec::required("name")];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![("name", Field::input(&self.name))]
    }
}

impl Editable for ResortFeature {
    type Draft = NameDraft;

    fn to_draft(&self) -> NameDraft {
        NameDraft { name: self.name.clone() }
    }
}

impl Editable for ResortProperty {
    type Draft = NameDraft;

    fn to_draft(&self) -> NameDraft {
        NameDraft { name: self.name.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seo_record_tolerates_missing_and_null_fields() {
        let record: SeoRecord =
            serde_json::from_str(r#"{"meta_title": "Retreats", "meta_keywords": null}"#).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.meta_title, "Retreats");
        assert_eq!(record.meta_keywords, "");
        assert_eq!(record.og_image, None);
    }

    #[test]
    fn features_and_properties_share_the_name_draft() {
        let feature = ResortFeature {
            id: RecordId::Int(2),
            name: "Infinity pool".into(),
        };
        assert_eq!(feature.to_draft(), NameDraft { name: "Infinity pool".into() });
        assert_eq!(ResortProperty::collection_path(), "/api/properties/");
    }
}
