// ============================================================================
// WIZARD INPUTS - Form controls of each step, routed to the step's draft
// ============================================================================
// The browser form reports `(name, value)` pairs. Only names that belong to
// the current step are applied, and only an applied value dirties the section.
// ============================================================================

use super::drafts::{FormDataDraft, ResortBasicDraft, WelcomeDraft, WhyChooseDraft};
use super::machine::{WizardState, WizardStep};
use crate::services::transport::FilePart;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    LongText,
    Checkbox,
    File,
    /// Several files at once
    Files,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
}

const fn input(name: &'static str, label: &'static str, kind: InputKind) -> InputSpec {
    InputSpec { name, label, kind }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Text(String),
    Flag(bool),
    Files(Vec<FilePart>),
}

impl InputValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InputValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn file_names(&self) -> Vec<&str> {
        match self {
            InputValue::Files(files) => files.iter().map(|f| f.file_name.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Controls rendered for a step, in display order
pub fn inputs_for(step: WizardStep) -> &'static [InputSpec] {
    use InputKind::*;

    const BASIC: &[InputSpec] = &[
        input("name", "Resort name", Text),
        input("location", "Location", Text),
        input("place", "Place", Text),
        input("price", "Price", Text),
        input("image", "Cover image", File),
        input("is_featured", "Featured", Checkbox),
    ];
    const FORM_DATA: &[InputSpec] = &[
        input("title", "Title", Text),
        input("description", "Description", LongText),
        input("logo", "Logo", File),
        input("image", "Hero image", File),
        input("additional_images", "Gallery images", Files),
    ];
    const WELCOME: &[InputSpec] = &[
        input("title", "Title", Text),
        input("highlight", "Highlight", Text),
        input("subtitle", "Subtitle", LongText),
        input("image", "Image", File),
    ];
    const WHY_CHOOSE: &[InputSpec] = &[
        input("title", "Title", Text),
        input("description", "Description", LongText),
        input("image", "Image", File),
    ];

    match step {
        WizardStep::Basic => BASIC,
        WizardStep::FormData => FORM_DATA,
        WizardStep::Welcome => WELCOME,
        WizardStep::WhyChoose => WHY_CHOOSE,
        WizardStep::Closed => &[],
    }
}

/// Field access by control name
trait DraftInputs {
    fn get(&self, name: &str) -> Option<InputValue>;
    fn set(&mut self, name: &str, value: InputValue) -> bool;
}

fn text(value: &str) -> Option<InputValue> {
    Some(InputValue::Text(value.to_string()))
}

fn one_file(file: &Option<FilePart>) -> Option<InputValue> {
    Some(InputValue::Files(file.iter().cloned().collect()))
}

fn set_text(slot: &mut String, value: InputValue) -> bool {
    match value {
        InputValue::Text(text) => {
            *slot = text;
            true
        }
        _ => false,
    }
}

fn set_optional_text(slot: &mut Option<String>, value: InputValue) -> bool {
    match value {
        InputValue::Text(text) => {
            *slot = Some(text);
            true
        }
        _ => false,
    }
}

/// An empty selection clears the file
fn set_file(slot: &mut Option<FilePart>, value: InputValue) -> bool {
    match value {
        InputValue::Files(files) => {
            *slot = files.into_iter().next();
            true
        }
        _ => false,
    }
}

impl DraftInputs for ResortBasicDraft {
    fn get(&self, name: &str) -> Option<InputValue> {
        match name {
            "name" => text(&self.name),
            "location" => text(&self.location),
            "place" => text(&self.place),
            "price" => text(&self.price),
            "image" => one_file(&self.image),
            "is_featured" => Some(InputValue::Flag(self.is_featured)),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: InputValue) -> bool {
        match (name, value) {
            ("name", value) => set_text(&mut self.name, value),
            ("location", value) => set_text(&mut self.location, value),
            ("place", value) => set_text(&mut self.place, value),
            ("price", value) => set_text(&mut self.price, value),
            ("image", value) => set_file(&mut self.image, value),
            ("is_featured", InputValue::Flag(flag)) => {
                self.is_featured = flag;
                true
            }
            _ => false,
        }
    }
}

impl DraftInputs for FormDataDraft {
    fn get(&self, name: &str) -> Option<InputValue> {
        match name {
            "title" => text(&self.title),
            "description" => text(&self.description),
            "logo" => one_file(&self.logo),
            "image" => one_file(&self.image),
            "additional_images" => Some(InputValue::Files(self.additional_images.clone())),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: InputValue) -> bool {
        match (name, value) {
            ("title", value) => set_text(&mut self.title, value),
            ("description", value) => set_text(&mut self.description, value),
            ("logo", value) => set_file(&mut self.logo, value),
            ("image", value) => set_file(&mut self.image, value),
            ("additional_images", InputValue::Files(files)) => {
                self.additional_images = files;
                true
            }
            _ => false,
        }
    }
}

impl DraftInputs for WelcomeDraft {
    fn get(&self, name: &str) -> Option<InputValue> {
        match name {
            "title" => text(&self.title),
            "highlight" => text(self.highlight.as_deref().unwrap_or_default()),
            "subtitle" => text(self.subtitle.as_deref().unwrap_or_default()),
            "image" => one_file(&self.image),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: InputValue) -> bool {
        match name {
            "title" => set_text(&mut self.title, value),
            "highlight" => set_optional_text(&mut self.highlight, value),
            "subtitle" => set_optional_text(&mut self.subtitle, value),
            "image" => set_file(&mut self.image, value),
            _ => false,
        }
    }
}

impl DraftInputs for WhyChooseDraft {
    fn get(&self, name: &str) -> Option<InputValue> {
        match name {
            "title" => text(&self.title),
            "description" => text(&self.description),
            "image" => one_file(&self.image),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: InputValue) -> bool {
        match name {
            "title" => set_text(&mut self.title, value),
            "description" => set_text(&mut self.description, value),
            "image" => set_file(&mut self.image, value),
            _ => false,
        }
    }
}

impl WizardState {
    /// Current value of a control on the current step
    pub fn input_value(&self, name: &str) -> Option<InputValue> {
        match self.step {
            WizardStep::Basic => self.basic.draft.get(name),
            WizardStep::FormData => self.form_data.draft.get(name),
            WizardStep::Welcome => self.welcome.draft.get(name),
            WizardStep::WhyChoose => self.why_choose.draft.get(name),
            WizardStep::Closed => None,
        }
    }

    /// Apply a control's value to the current step's draft. Returns false,
    /// leaving the section untouched, for a name or value the step does not
    /// take.
    pub fn set_input(&mut self, name: &str, value: InputValue) -> bool {
        match self.step {
            WizardStep::Basic => self.basic.try_edit(|d| d.set(name, value)),
            WizardStep::FormData => self.form_data.try_edit(|d| d.set(name, value)),
            WizardStep::Welcome => self.welcome.try_edit(|d| d.set(name, value)),
            WizardStep::WhyChoose => self.why_choose.try_edit(|d| d.set(name, value)),
            WizardStep::Closed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodels::resort_wizard::FailurePolicy;

    fn photo() -> FilePart {
        FilePart::new("a.jpg", "image/jpeg", vec![1, 2])
    }

    #[test]
    fn every_listed_control_round_trips_through_its_draft() {
        let mut state = WizardState::new(FailurePolicy::Block);
        for step in WizardStep::SEQUENCE {
            state.step = step;
            for spec in inputs_for(step) {
                assert!(state.input_value(spec.name).is_some(), "{:?} {}", step, spec.name);
            }
        }
    }

    #[test]
    fn input_goes_to_the_current_step_and_dirties_it() {
        let mut state = WizardState::new(FailurePolicy::Block);

        assert!(state.set_input("name", InputValue::Text("Ayam Bay".into())));
        assert!(state.set_input("is_featured", InputValue::Flag(true)));
        assert!(state.set_input("image", InputValue::Files(vec![photo()])));

        assert!(state.basic.dirty);
        assert_eq!(state.basic.draft.name, "Ayam Bay");
        assert!(state.basic.draft.is_featured);
        assert_eq!(state.basic.draft.image, Some(photo()));
        assert!(!state.form_data.dirty);
    }

    #[test]
    fn unknown_names_and_mismatched_values_change_nothing() {
        let mut state = WizardState::new(FailurePolicy::Block);
        state.step = WizardStep::Welcome;

        assert!(!state.set_input("price", InputValue::Text("10".into())));
        assert!(!state.set_input("title", InputValue::Flag(true)));
        assert!(!state.welcome.dirty);

        state.step = WizardStep::Closed;
        assert!(!state.set_input("title", InputValue::Text("x".into())));
    }

    #[test]
    fn empty_file_selection_clears_a_single_file() {
        let mut state = WizardState::new(FailurePolicy::Block);
        state.step = WizardStep::WhyChoose;
        state.set_input("image", InputValue::Files(vec![photo()]));

        state.set_input("image", InputValue::Files(Vec::new()));

        assert_eq!(state.why_choose.draft.image, None);
        assert_eq!(state.input_value("image").map(|v| v.file_names().len()), Some(0));
    }
}
