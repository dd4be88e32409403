// ============================================================================
// BLOG - Posts, categories, headings and inner sections
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de::null_default;
use super::{Editable, RecordId, Resource};
use crate::forms::{Field, FieldSpec, FormRecord};
use crate::services::endpoints;
use crate::services::transport::FilePart;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: RecordId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogHeading {
    pub id: RecordId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_default")]
    pub author: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<RecordId>,
    #[serde(default)]
    pub heading: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogInner {
    pub id: RecordId,
    pub blog: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub content: String,
}

impl Resource for BlogCategory {
    const PLURAL: &'static str = "categories";
    const SINGULAR: &'static str = "category";

    fn collection_path() -> String {
        endpoints::blog::CATEGORIES.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::blog::category(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for BlogHeading {
    const PLURAL: &'static str = "headings";
    const SINGULAR: &'static str = "heading";

    fn collection_path() -> String {
        endpoints::blog::HEADINGS.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::blog::heading(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for Blog {
    const PLURAL: &'static str = "blogs";
    const SINGULAR: &'static str = "Blog";

    fn collection_path() -> String {
        endpoints::blog::LIST.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::blog::item(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for BlogInner {
    const PLURAL: &'static str = "Blog Inner data";
    const SINGULAR: &'static str = "Blog Inner";

    fn collection_path() -> String {
        endpoints::blog::INNER.to_string()
    }

    fn item_path(id: &RecordId) -> String {
        endpoints::blog::inner(id)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// Categories and headings only carry a title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleDraft {
    pub title: String,
}

impl FormRecord for TitleDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[FieldSpec::required("title")];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![("title", Field::input(&self.title))]
    }
}

impl Editable for BlogCategory {
    type Draft = TitleDraft;

    fn to_draft(&self) -> TitleDraft {
        TitleDraft { title: self.title.clone() }
    }
}

impl Editable for BlogHeading {
    type Draft = TitleDraft;

    fn to_draft(&self) -> TitleDraft {
        TitleDraft { title: self.title.clone() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub date: Option<NaiveDate>,
    pub category: Option<RecordId>,
    pub heading: Option<RecordId>,
    pub image: Option<FilePart>,
}

impl FormRecord for BlogDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("title"),
            FieldSpec::required("content"),
            FieldSpec::optional("author"),
            FieldSpec::optional("date"),
            FieldSpec::required("category"),
            FieldSpec::optional("heading"),
            FieldSpec::required_on_create("image"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("title", Field::input(&self.title)),
            ("content", Field::input(&self.content)),
            ("author", Field::text(&self.author)),
            ("date", Field::text(&self.date.map(|d| d.format("%Y-%m-%d").to_string()))),
            ("category", Field::reference(&self.category)),
            ("heading", Field::reference(&self.heading)),
            ("image", Field::file(&self.image)),
        ]
    }
}

impl Editable for Blog {
    type Draft = BlogDraft;

    fn to_draft(&self) -> BlogDraft {
        BlogDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            author: Some(self.author.clone()),
            date: self.date,
            category: self.category.clone(),
            heading: self.heading.clone(),
            image: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogInnerDraft {
    pub blog: Option<RecordId>,
    pub title: String,
    pub content: String,
}

impl FormRecord for BlogInnerDraft {
    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("blog"),
            FieldSpec::required("title"),
            FieldSpec::required("content"),
        ];
        SCHEMA
    }

    fn fields(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("blog", Field::reference(&self.blog)),
            ("title", Field::input(&self.title)),
            ("content", Field::input(&self.content)),
        ]
    }
}

impl Editable for BlogInner {
    type Draft = BlogInnerDraft;

    fn to_draft(&self) -> BlogInnerDraft {
        BlogInnerDraft {
            blog: Some(self.blog.clone()),
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{EmptyPolicy, Mode, Payload};

    #[test]
    fn blog_dates_and_references_go_out_raw() {
        let draft = BlogDraft {
            title: "Monsoon retreats".into(),
            content: "...".into(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1),
            category: Some(RecordId::Int(4)),
            ..BlogDraft::default()
        };
        let json = Payload::from_record(&draft, Mode::Update, EmptyPolicy::Explicit)
            .unwrap()
            .to_json();
        assert_eq!(json["date"], "2024-07-01");
        assert_eq!(json["category"], 4);
        assert!(json.get("heading").is_none());
        assert!(json.get("author").is_none());
    }

    #[test]
    fn new_blog_needs_a_cover_image() {
        let draft = BlogDraft {
            title: "Monsoon retreats".into(),
            content: "...".into(),
            category: Some(RecordId::Int(4)),
            ..BlogDraft::default()
        };
        let err = Payload::from_record(&draft, Mode::Create, EmptyPolicy::Explicit).unwrap_err();
        assert_eq!(err, crate::error::PayloadError::MissingRequired("image"));
    }
}
