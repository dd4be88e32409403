// ============================================================================
// SERVICE - Service pages: a heading record plus one detail record
// ============================================================================
// A detail points at its heading through `service_header`. The console saves
// the heading first and the detail second, and deletes them in reverse.
// ============================================================================

use serde::{Deserialize, Serialize};

use super::de::null_default;
use super::{Editable, RecordId, Resource};
use crate::forms::{Field, FieldSpec, FormRecord};
use crate::services::endpoints;
use crate::services::transport::FilePart;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHeading {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetail {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub alt_img_text: String,
    #[serde(default, deserialize_with = "null_default")]
    pub alt_img_title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub alt_img_caption: String,
    #[serde(default, deserialize_with = "null_default")]
    pub alt_img_description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub slug: String,
    #[serde(default)]
    pub service_header: Option<RecordId>,
}

impl Resource for ServiceHeading {
    const PLURAL: &'static str = "service headings";
    const SINGULAR: &'static str = "service heading";

    fn collection_path() -> String {
        endpoints::service::HEADINGS.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::service::heading(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for ServiceDetail {
    const PLURAL: &'static str = "services";
    const SINGULAR: &'static str = "service";

    fn collection_path() -> String {
        endpoints::service::DETAILS.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::service::detail(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// One form for both records: `title` goes to the heading and the detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub image: Option<FilePart>,
    pub alt_img_text: String,
    pub alt_img_title: String,
    pub alt_img_caption: String,
    pub alt_img_description: String,
    pub slug: String,
}

impl FormRecord for ServiceDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("title"),
            FieldSpec::optional("description"),
            FieldSpec::optional("image"),
            FieldSpec::optional("alt_img_text"),
            FieldSpec::optional("alt_img_title"),
            FieldSpec::optional("alt_img_caption"),
            FieldSpec::optional("alt_img_description"),
            FieldSpec::optional("slug"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("title", Field::input(&self.title)),
            ("description", Field::input(&self.description)),
            ("image", Field::file(&self.image)),
            ("alt_img_text", Field::input(&self.alt_img_text)),
            ("alt_img_title", Field::input(&self.alt_img_title)),
            ("alt_img_caption", Field::input(&self.alt_img_caption)),
            ("alt_img_description", Field::input(&self.alt_img_description)),
            ("slug", Field::input(&self.slug)),
        ]
    }
}

impl Editable for ServiceDetail {
    type Draft = ServiceDraft;

    /// The stored image stays unless a new file is picked
    fn to_draft(&self) -> ServiceDraft {
        ServiceDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            image: None,
            alt_img_text: self.alt_img_text.clone(),
            alt_img_title: self.alt_img_title.clone(),
            alt_img_caption: self.alt_img_caption.clone(),
            alt_img_description: self.alt_img_description.clone(),
            slug: self.slug.clone(),
        }
    }
}
