// ============================================================================
// WIZARD DRAFTS - Editable fields of each wizard section
// ============================================================================
// Id references (place_id, resort, form_data) are not part of the drafts;
// the wizard appends them from the ids it captured.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::forms::{Field, FieldSpec, FormRecord};
use crate::models::{Editable, Resort, ResortFormData, WelcomeSection, WhyChooseSection};
use crate::services::transport::FilePart;

/// Step 1: the resort card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResortBasicDraft {
    pub name: String,
    pub location: String,
    /// Name of the Place created alongside the resort
    pub place: String,
    pub image: Option<FilePart>,
    pub price: String,
    pub is_featured: bool,
}

impl ResortBasicDraft {
    pub fn from_resort(resort: &Resort) -> Self {
        Self {
            name: resort.name.clone(),
            location: resort.location.clone(),
            place: resort.place.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
            image: None,
            price: resort.price.clone(),
            is_featured: resort.is_featured,
        }
    }

    pub fn place_draft(&self) -> PlaceDraft {
        PlaceDraft {
            name: self.place.clone(),
            location: self.location.clone(),
        }
    }
}

impl FormRecord for ResortBasicDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("name"),
            FieldSpec::required("location"),
            FieldSpec::required_on_create("image"),
            FieldSpec::required("price"),
            FieldSpec::optional("is_featured"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("name", Field::input(&self.name)),
            ("location", Field::input(&self.location)),
            ("image", Field::file(&self.image)),
            ("price", Field::input(&self.price)),
            ("is_featured", Field::Bool(self.is_featured)),
        ]
    }
}

/// Quick edits from the resort table; the place stays as it is
impl Editable for Resort {
    type Draft = ResortBasicDraft;

    fn to_draft(&self) -> ResortBasicDraft {
        ResortBasicDraft::from_resort(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceDraft {
    pub name: String,
    pub location: String,
}

impl FormRecord for PlaceDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[FieldSpec::required("name"), FieldSpec::required("location")];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("name", Field::input(&self.name)),
            ("location", Field::input(&self.location)),
        ]
    }
}

/// Step 2: descriptive content, plus extra gallery images uploaded separately
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDataDraft {
    pub logo: Option<FilePart>,
    pub title: String,
    pub image: Option<FilePart>,
    pub description: String,
    pub additional_images: Vec<FilePart>,
}

impl FormDataDraft {
    pub fn from_record(record: &ResortFormData) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            ..Self::default()
        }
    }
}

impl FormRecord for FormDataDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required_on_create("logo"),
            FieldSpec::required("title"),
            FieldSpec::required_on_create("image"),
            FieldSpec::required("description"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("logo", Field::file(&self.logo)),
            ("title", Field::input(&self.title)),
            ("image", Field::file(&self.image)),
            ("description", Field::input(&self.description)),
        ]
    }
}

/// Step 3
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WelcomeDraft {
    pub title: String,
    pub highlight: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<FilePart>,
}

impl WelcomeDraft {
    pub fn from_record(record: &WelcomeSection) -> Self {
        Self {
            title: record.title.clone(),
            highlight: Some(record.highlight.clone()),
            subtitle: Some(record.subtitle.clone()),
            image: None,
        }
    }
}

impl FormRecord for WelcomeDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("title"),
            FieldSpec::optional("highlight"),
            FieldSpec::optional("subtitle"),
            FieldSpec::required_on_create("image"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("title", Field::input(&self.title)),
            ("highlight", Field::text(&self.highlight)),
            ("subtitle", Field::text(&self.subtitle)),
            ("image", Field::file(&self.image)),
        ]
    }
}

/// Step 4
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhyChooseDraft {
    pub title: String,
    pub description: String,
    pub image: Option<FilePart>,
}

impl WhyChooseDraft {
    pub fn from_record(record: &WhyChooseSection) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            image: None,
        }
    }
}

impl FormRecord for WhyChooseDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("title"),
            FieldSpec::required("description"),
            FieldSpec::required_on_create("image"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("title", Field::input(&self.title)),
            ("description", Field::input(&self.description)),
            ("image", Field::file(&self.image)),
        ]
    }
}
