// ============================================================================
// WIZARD MACHINE - Steps, dirty flags, captured ids and transition guards
// ============================================================================
// Pure state: no I/O. `ResortWizard` drives it and performs the requests.
// ============================================================================

use serde::{Deserialize, Serialize};

use super::drafts::{FormDataDraft, PlaceDraft, ResortBasicDraft, WelcomeDraft, WhyChooseDraft};
use crate::forms::EmptyPolicy;
use crate::models::{RecordId, Resort, ResortFormData, WelcomeSection, WhyChooseSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Basic,
    FormData,
    Welcome,
    WhyChoose,
    Closed,
}

impl WizardStep {
    pub const SEQUENCE: [WizardStep; 4] = [
        WizardStep::Basic,
        WizardStep::FormData,
        WizardStep::Welcome,
        WizardStep::WhyChoose,
    ];

    pub fn next(self) -> Self {
        match self {
            WizardStep::Basic => WizardStep::FormData,
            WizardStep::FormData => WizardStep::Welcome,
            WizardStep::Welcome => WizardStep::WhyChoose,
            WizardStep::WhyChoose | WizardStep::Closed => WizardStep::Closed,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            WizardStep::Basic | WizardStep::FormData => WizardStep::Basic,
            WizardStep::Welcome => WizardStep::FormData,
            WizardStep::WhyChoose => WizardStep::Welcome,
            WizardStep::Closed => WizardStep::Closed,
        }
    }

    /// 1-based position for the progress header
    pub fn number(self) -> Option<usize> {
        Self::SEQUENCE.iter().position(|s| *s == self).map(|i| i + 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Basic => "Basic Info",
            WizardStep::FormData => "Resort Details",
            WizardStep::Welcome => "Welcome Section",
            WizardStep::WhyChoose => "Why Choose Us",
            WizardStep::Closed => "Done",
        }
    }
}

/// What happens after a step's request fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Stay on the failed step until it succeeds
    #[default]
    Block,
    /// Log and move on anyway; later steps may then send a missing reference
    Advance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// Section unchanged: no request was sent
    Skipped,
    Saved,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardIds {
    pub place_id: Option<RecordId>,
    /// Sent as the `resort` reference of the form data
    pub resort_id: Option<RecordId>,
    /// Path key for updating the resort (uuid when the server has one)
    #[serde(default)]
    pub resort_key: Option<RecordId>,
    pub form_data_id: Option<RecordId>,
    pub welcome_id: Option<RecordId>,
    pub why_choose_id: Option<RecordId>,
}

/// A draft plus its dirty flag. Any edit marks the section dirty; a
/// successful save clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section<D> {
    pub draft: D,
    pub dirty: bool,
}

impl<D> Section<D> {
    pub fn clean(draft: D) -> Self {
        Self { draft, dirty: false }
    }

    pub fn edit(&mut self, editor: impl FnOnce(&mut D)) {
        editor(&mut self.draft);
        self.dirty = true;
    }

    /// Like `edit`, but only marks the section dirty when `editor` reports a
    /// change
    pub fn try_edit(&mut self, editor: impl FnOnce(&mut D) -> bool) -> bool {
        let changed = editor(&mut self.draft);
        self.dirty |= changed;
        changed
    }
}

/// Existing records to edit; every section starts clean
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSeed {
    pub resort: Resort,
    pub form_data: Option<ResortFormData>,
    pub welcome: Option<WelcomeSection>,
    pub why_choose: Option<WhyChooseSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: WizardStep,
    pub policy: FailurePolicy,
    pub empty_policy: EmptyPolicy,
    pub ids: WizardIds,
    pub basic: Section<ResortBasicDraft>,
    pub form_data: Section<FormDataDraft>,
    pub welcome: Section<WelcomeDraft>,
    pub why_choose: Section<WhyChooseDraft>,
    /// Place as last sent, to tell whether step 1 needs a new one
    pub saved_place: Option<PlaceDraft>,
    /// Result of the last submit of the current step
    pub last_outcome: Option<StepOutcome>,
    pub submitting: bool,
}

impl WizardState {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            step: WizardStep::Basic,
            policy,
            empty_policy: EmptyPolicy::default(),
            ids: WizardIds::default(),
            basic: Section::default(),
            form_data: Section::default(),
            welcome: Section::default(),
            why_choose: Section::default(),
            saved_place: None,
            last_outcome: None,
            submitting: false,
        }
    }

    pub fn from_seed(seed: &WizardSeed, policy: FailurePolicy) -> Self {
        let resort = &seed.resort;
        let mut state = Self::new(policy);

        state.ids = WizardIds {
            place_id: resort.place.as_ref().map(|p| p.id.clone()),
            resort_id: Some(resort.id.clone()),
            resort_key: Some(resort.key().clone()),
            form_data_id: seed.form_data.as_ref().map(|r| r.id.clone()),
            welcome_id: seed.welcome.as_ref().map(|r| r.id.clone()),
            why_choose_id: seed.why_choose.as_ref().map(|r| r.id.clone()),
        };
        state.basic = Section::clean(ResortBasicDraft::from_resort(resort));
        // The existing place counts as sent until the name or location changes
        state.saved_place = resort.place.as_ref().map(|_| state.basic.draft.place_draft());
        if let Some(record) = &seed.form_data {
            state.form_data = Section::clean(FormDataDraft::from_record(record));
        }
        if let Some(record) = &seed.welcome {
            state.welcome = Section::clean(WelcomeDraft::from_record(record));
        }
        if let Some(record) = &seed.why_choose {
            state.why_choose = Section::clean(WhyChooseDraft::from_record(record));
        }
        state
    }

    pub fn is_closed(&self) -> bool {
        self.step == WizardStep::Closed
    }

    /// Dirty flag of the current step's section
    pub fn is_dirty(&self) -> bool {
        match self.step {
            WizardStep::Basic => self.basic.dirty,
            WizardStep::FormData => self.form_data.dirty,
            WizardStep::Welcome => self.welcome.dirty,
            WizardStep::WhyChoose => self.why_choose.dirty,
            WizardStep::Closed => false,
        }
    }

    /// Transition guard, checked after the current step was submitted
    pub fn can_advance(&self) -> bool {
        if self.is_closed() {
            return false;
        }
        match &self.last_outcome {
            None => false,
            Some(StepOutcome::Failed(_)) => self.policy == FailurePolicy::Advance,
            Some(StepOutcome::Skipped) | Some(StepOutcome::Saved) => true,
        }
    }

    /// Id reference the current step needs but does not have yet
    pub fn missing_reference(&self) -> Option<&'static str> {
        match self.step {
            WizardStep::FormData if self.ids.resort_id.is_none() => Some("resort"),
            WizardStep::Welcome | WizardStep::WhyChoose if self.ids.form_data_id.is_none() => {
                Some("form_data")
            }
            _ => None,
        }
    }

    /// Record the outcome of the current step and move on if allowed
    pub fn record(&mut self, outcome: StepOutcome) -> StepOutcome {
        self.last_outcome = Some(outcome.clone());
        if self.can_advance() {
            self.step = self.step.next();
            self.last_outcome = None;
        }
        outcome
    }

    pub fn back(&mut self) {
        self.step = self.step.previous();
        self.last_outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_run_in_fixed_order_and_end_closed() {
        let mut step = WizardStep::Basic;
        let mut seen = vec![step];
        while step != WizardStep::Closed {
            step = step.next();
            seen.push(step);
        }
        assert_eq!(
            seen,
            vec![
                WizardStep::Basic,
                WizardStep::FormData,
                WizardStep::Welcome,
                WizardStep::WhyChoose,
                WizardStep::Closed
            ]
        );
        assert_eq!(WizardStep::Welcome.number(), Some(3));
        assert_eq!(WizardStep::Closed.number(), None);
    }

    #[test]
    fn nothing_advances_before_a_submit() {
        let state = WizardState::new(FailurePolicy::Advance);
        assert!(!state.can_advance());
    }

    #[test]
    fn failure_blocks_only_under_block_policy() {
        let mut blocked = WizardState::new(FailurePolicy::Block);
        blocked.record(StepOutcome::Failed("HTTP 500".into()));
        assert_eq!(blocked.step, WizardStep::Basic);
        assert!(!blocked.can_advance());

        let mut advancing = WizardState::new(FailurePolicy::Advance);
        advancing.record(StepOutcome::Failed("HTTP 500".into()));
        assert_eq!(advancing.step, WizardStep::FormData);
        assert_eq!(advancing.last_outcome, None);
    }

    #[test]
    fn skip_and_save_both_advance() {
        let mut state = WizardState::new(FailurePolicy::Block);
        state.record(StepOutcome::Skipped);
        state.record(StepOutcome::Saved);
        assert_eq!(state.step, WizardStep::Welcome);
    }

    #[test]
    fn editing_marks_only_that_section_dirty() {
        let mut state = WizardState::new(FailurePolicy::Block);
        state.welcome.edit(|d| d.title = "Welcome to paradise".into());
        assert!(state.welcome.dirty);
        assert!(!state.basic.dirty);
        assert!(!state.is_dirty());
    }

    #[test]
    fn missing_reference_depends_on_step() {
        let mut state = WizardState::new(FailurePolicy::Block);
        assert_eq!(state.missing_reference(), None);

        state.step = WizardStep::FormData;
        assert_eq!(state.missing_reference(), Some("resort"));
        state.ids.resort_id = Some(RecordId::Int(3));
        assert_eq!(state.missing_reference(), None);

        state.step = WizardStep::WhyChoose;
        assert_eq!(state.missing_reference(), Some("form_data"));
    }

    #[test]
    fn back_never_goes_before_the_first_step() {
        let mut state = WizardState::new(FailurePolicy::Block);
        state.back();
        assert_eq!(state.step, WizardStep::Basic);
        state.step = WizardStep::Welcome;
        state.back();
        assert_eq!(state.step, WizardStep::FormData);
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = WizardState::new(FailurePolicy::Block);
        state.basic.edit(|d| d.name = "Ayam Bay".into());
        let json = serde_json::to_string(&state).unwrap();
        let restored: WizardState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
