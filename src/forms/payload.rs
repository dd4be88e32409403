// ============================================================================
// PAYLOAD - Per-field schema and request body building
// ============================================================================
// `Unset` (never provided) and `Empty` (cleared on purpose) are different
// values. `EmptyPolicy::DropFalsy` keeps the old body building around, where
// "", 0 and false were all dropped before sending.
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PayloadError;
use crate::models::RecordId;
use crate::services::transport::{FilePart, MultipartForm, RequestBody};

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Unset,
    Empty,
    Text(String),
    Int(i64),
    Bool(bool),
    Json(Value),
    File(FilePart),
    Files(Vec<FilePart>),
}

impl Field {
    /// `None` is unset, `Some("")` is an intentional empty value
    pub fn text(value: &Option<String>) -> Field {
        match value {
            None => Field::Unset,
            Some(v) if v.is_empty() => Field::Empty,
            Some(v) => Field::Text(v.clone()),
        }
    }

    /// Plain inputs always hold a string; an empty one is `Empty`
    pub fn input(value: &str) -> Field {
        if value.is_empty() {
            Field::Empty
        } else {
            Field::Text(value.to_string())
        }
    }

    pub fn file(value: &Option<FilePart>) -> Field {
        match value {
            Some(file) => Field::File(file.clone()),
            None => Field::Unset,
        }
    }

    pub fn int(value: Option<i64>) -> Field {
        value.map(Field::Int).unwrap_or(Field::Unset)
    }

    /// Foreign keys go out as their raw value
    pub fn reference(id: &Option<RecordId>) -> Field {
        match id {
            Some(RecordId::Int(id)) => Field::Int(*id),
            Some(RecordId::Uuid(id)) => Field::input(id),
            None => Field::Unset,
        }
    }

    fn is_missing(&self) -> bool {
        match self {
            Field::Unset | Field::Empty => true,
            Field::Files(files) => files.is_empty(),
            _ => false,
        }
    }

    fn is_falsy(&self) -> bool {
        match self {
            Field::Unset | Field::Empty => true,
            Field::Text(v) => v.is_empty(),
            Field::Int(v) => *v == 0,
            Field::Bool(v) => !*v,
            Field::Json(v) => v.is_null(),
            Field::File(_) => false,
            Field::Files(files) => files.is_empty(),
        }
    }

    fn carries_file(&self) -> bool {
        matches!(self, Field::File(_) | Field::Files(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// File inputs cannot be pre-filled, so edits may leave them unset
    RequiredOnCreate,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub presence: Presence,
}

impl FieldSpec {
    pub const fn required(name: &'static str) -> Self {
        Self { name, presence: Presence::Required }
    }

    pub const fn required_on_create(name: &'static str) -> Self {
        Self { name, presence: Presence::RequiredOnCreate }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self { name, presence: Presence::Optional }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyPolicy {
    /// Unset fields are omitted, everything else is sent as entered
    #[default]
    Explicit,
    /// Any falsy value ("", 0, false, unset) is omitted
    DropFalsy,
}

/// A draft record that knows its own field schema
pub trait FormRecord {
    fn schema() -> &'static [FieldSpec];

    /// Field values in the order they are sent
    fn fields(&self) -> Vec<(&'static str, Field)>;
}

/// Field values ready to be checked against a schema and encoded
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    entries: Vec<(String, Field)>,
    policy: EmptyPolicy,
}

impl Payload {
    pub fn new(policy: EmptyPolicy) -> Self {
        Self {
            entries: Vec::new(),
            policy,
        }
    }

    /// Validate a record against its schema and collect its fields
    pub fn from_record<F: FormRecord>(record: &F, mode: Mode, policy: EmptyPolicy) -> Result<Self, PayloadError> {
        let fields = record.fields();
        for spec in F::schema() {
            let required = match spec.presence {
                Presence::Required => true,
                Presence::RequiredOnCreate => mode == Mode::Create,
                Presence::Optional => false,
            };
            if !required {
                continue;
            }
            let present = fields
                .iter()
                .any(|(name, field)| *name == spec.name && !field.is_missing());
            if !present {
                return Err(PayloadError::MissingRequired(spec.name));
            }
        }

        let mut payload = Self::new(policy);
        for (name, field) in fields {
            payload.entries.push((name.to_string(), field));
        }
        Ok(payload)
    }

    /// Add a field outside the record (typically an id reference)
    pub fn with(mut self, name: impl Into<String>, field: Field) -> Self {
        self.entries.push((name.into(), field));
        self
    }

    pub fn has_files(&self) -> bool {
        self.entries.iter().any(|(_, field)| field.carries_file())
    }

    fn kept(&self) -> impl Iterator<Item = &(String, Field)> {
        let policy = self.policy;
        self.entries.iter().filter(move |(_, field)| match policy {
            EmptyPolicy::Explicit => !matches!(field, Field::Unset),
            EmptyPolicy::DropFalsy => !field.is_falsy(),
        })
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, field) in self.kept() {
            let value = match field {
                Field::Unset | Field::Empty => Value::Null,
                Field::Text(v) => Value::String(v.clone()),
                Field::Int(v) => Value::from(*v),
                Field::Bool(v) => Value::Bool(*v),
                Field::Json(v) => v.clone(),
                // Files never go out as JSON
                Field::File(_) | Field::Files(_) => continue,
            };
            map.insert(name.clone(), value);
        }
        Value::Object(map)
    }

    pub fn to_multipart(&self) -> MultipartForm {
        let mut form = MultipartForm::new();
        for (name, field) in self.kept() {
            match field {
                Field::Unset | Field::Empty => form.push_text(name.as_str(), ""),
                Field::Text(v) => form.push_text(name.as_str(), v.as_str()),
                Field::Int(v) => form.push_text(name.as_str(), v.to_string()),
                Field::Bool(v) => form.push_text(name.as_str(), v.to_string()),
                Field::Json(v) => form.push_text(name.as_str(), v.to_string()),
                Field::File(file) => form.push_file(name.as_str(), file.clone()),
                Field::Files(files) => {
                    for file in files {
                        form.push_file(name.as_str(), file.clone());
                    }
                }
            }
        }
        form
    }

    /// JSON for field-only records, multipart once any file is attached
    pub fn into_body(self) -> RequestBody {
        if self.has_files() {
            RequestBody::Multipart(self.to_multipart())
        } else {
            RequestBody::Json(self.to_json())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Plan {
        name: String,
        amount: Option<i64>,
        is_popular: bool,
        note: Option<String>,
        badge: Option<FilePart>,
    }

    impl FormRecord for Plan {
        fn schema() -> &'static [FieldSpec] {
            const SCHEMA: &[FieldSpec] = &[
                FieldSpec::required("name"),
                FieldSpec::optional("amount"),
                FieldSpec::optional("is_popular"),
                FieldSpec::optional("note"),
                FieldSpec::required_on_create("badge"),
            ];
            SCHEMA
        }

        fn fields(&self) -> Vec<(&'static str, Field)> {
            vec![
                ("name", Field::input(&self.name)),
                ("amount", Field::int(self.amount)),
                ("is_popular", Field::Bool(self.is_popular)),
                ("note", Field::text(&self.note)),
                ("badge", Field::file(&self.badge)),
            ]
        }
    }

    fn plan() -> Plan {
        Plan {
            name: "gold".into(),
            amount: Some(0),
            is_popular: false,
            note: Some(String::new()),
            badge: None,
        }
    }

    #[test]
    fn explicit_policy_keeps_zero_false_and_intentional_empty() {
        let payload = Payload::from_record(&plan(), Mode::Update, EmptyPolicy::Explicit).unwrap();
        assert_eq!(
            payload.to_json(),
            json!({ "name": "gold", "amount": 0, "is_popular": false, "note": null })
        );
    }

    #[test]
    fn drop_falsy_policy_omits_zero_false_and_empty() {
        // Known limitation of the old body building: 0, false and "" are
        // indistinguishable from "not provided".
        let payload = Payload::from_record(&plan(), Mode::Update, EmptyPolicy::DropFalsy).unwrap();
        assert_eq!(payload.to_json(), json!({ "name": "gold" }));
    }

    #[test]
    fn required_field_missing_is_rejected() {
        let mut draft = plan();
        draft.name.clear();
        let err = Payload::from_record(&draft, Mode::Update, EmptyPolicy::Explicit).unwrap_err();
        assert_eq!(err, PayloadError::MissingRequired("name"));
    }

    #[test]
    fn required_on_create_only_applies_to_create() {
        let err = Payload::from_record(&plan(), Mode::Create, EmptyPolicy::Explicit).unwrap_err();
        assert_eq!(err, PayloadError::MissingRequired("badge"));
        assert!(Payload::from_record(&plan(), Mode::Update, EmptyPolicy::Explicit).is_ok());
    }

    #[test]
    fn a_file_switches_the_body_to_multipart() {
        let mut draft = plan();
        draft.badge = Some(FilePart::new("gold.png", "image/png", vec![0x89, 0x50]));
        let body = Payload::from_record(&draft, Mode::Create, EmptyPolicy::Explicit)
            .unwrap()
            .with("resort", Field::Int(9))
            .into_body();

        let RequestBody::Multipart(form) = body else {
            panic!("expected multipart body");
        };
        assert_eq!(form.text_value("name"), Some("gold"));
        assert_eq!(form.text_value("amount"), Some("0"));
        assert_eq!(form.text_value("is_popular"), Some("false"));
        assert_eq!(form.text_value("note"), Some(""));
        assert_eq!(form.text_value("resort"), Some("9"));
        assert_eq!(form.files("badge").len(), 1);
    }

    #[test]
    fn field_only_records_go_out_as_json() {
        let body = Payload::new(EmptyPolicy::Explicit)
            .with("title", Field::input("Travel"))
            .into_body();
        assert_eq!(body, RequestBody::Json(json!({ "title": "Travel" })));
    }
}
