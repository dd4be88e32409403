// ============================================================================
// STUDY ABROAD - Countries, universities and "why choose" reasons
// ============================================================================
// Universities and reasons reference a country by id.

use serde::{Deserialize, Serialize};

use super::de::null_default;
use super::{Editable, RecordId, Resource};
use crate::forms::{Field, FieldSpec, FormRecord};
use crate::services::endpoints;
use crate::services::transport::FilePart;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub country: RecordId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhyChooseReason {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    pub country: RecordId,
}

impl Resource for Country {
    const PLURAL: &'static str = "countries";
    const SINGULAR: &'static str = "country";

    fn collection_path() -> String {
        endpoints::study_abroad::COUNTRIES.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::study_abroad::country(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for University {
    const PLURAL: &'static str = "universities";
    const SINGULAR: &'static str = "university";

    fn collection_path() -> String {
        endpoints::study_abroad::UNIVERSITIES.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::study_abroad::university(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for WhyChooseReason {
    const PLURAL: &'static str = "reasons";
    const SINGULAR: &'static str = "reason";

    fn collection_path() -> String {
        endpoints::study_abroad::REASONS.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::study_abroad::reason(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryDraft {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image: Option<FilePart>,
}

impl FormRecord for CountryDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("title"),
            FieldSpec::optional("subtitle"),
            FieldSpec::optional("description"),
            FieldSpec::required_on_create("image"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("title", Field::input(&self.title)),
            ("subtitle", Field::text(&self.subtitle)),
            ("description", Field::text(&self.description)),
            ("image", Field::file(&self.image)),
        ]
    }
}

impl Editable for Country {
    type Draft = CountryDraft;

    fn to_draft(&self) -> CountryDraft {
        CountryDraft {
            title: self.title.clone(),
            subtitle: Some(self.subtitle.clone()),
            description: Some(self.description.clone()),
            image: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniversityDraft {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<FilePart>,
    pub country: Option<RecordId>,
}

impl FormRecord for UniversityDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("title"),
            FieldSpec::optional("description"),
            FieldSpec::optional("image"),
            FieldSpec::required("country"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("title", Field::input(&self.title)),
            ("description", Field::text(&self.description)),
            ("image", Field::file(&self.image)),
            ("country", Field::reference(&self.country)),
        ]
    }
}

impl Editable for University {
    type Draft = UniversityDraft;

    fn to_draft(&self) -> UniversityDraft {
        UniversityDraft {
            title: self.title.clone(),
            description: Some(self.description.clone()),
            image: None,
            country: Some(self.country.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReasonDraft {
    pub title: String,
    pub description: String,
    pub country: Option<RecordId>,
}

impl FormRecord for ReasonDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("title"),
            FieldSpec::required("description"),
            FieldSpec::required("country"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("title", Field::input(&self.title)),
            ("description", Field::input(&self.description)),
            ("country", Field::reference(&self.country)),
        ]
    }
}

impl Editable for WhyChooseReason {
    type Draft = ReasonDraft;

    fn to_draft(&self) -> ReasonDraft {
        ReasonDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            country: Some(self.country.clone()),
        }
    }
}
