// ============================================================================
// RESORT WIZARD - Four chained submissions for onboarding a partner resort
// ============================================================================
// Basic (Place -> Resort) -> FormData (+ gallery upload) -> Welcome ->
// WhyChoose -> Closed. Each step only sends when its section is dirty and
// references the id captured by the step before it.
//
// There is no rollback and no idempotency key: whatever a step created stays
// on the server even if a later step fails.
// ============================================================================

pub mod drafts;
pub mod input;
pub mod machine;

pub use drafts::{FormDataDraft, PlaceDraft, ResortBasicDraft, WelcomeDraft, WhyChooseDraft};
pub use input::{inputs_for, InputKind, InputSpec, InputValue};
pub use machine::{FailurePolicy, Section, StepOutcome, WizardIds, WizardSeed, WizardState, WizardStep};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::error::{ApiError, PayloadError, WizardError};
use crate::forms::{EmptyPolicy, Field, Mode, Payload};
use crate::models::RecordId;
use crate::services::endpoints;
use crate::services::transport::{Method, MultipartForm, RequestBody};
use crate::services::{ApiClient, HttpTransport, Transport};
use crate::state::{CancelToken, ReactiveState};

/// Any create/update response; only the ids are kept
#[derive(Debug, Deserialize)]
struct Created {
    id: RecordId,
    #[serde(default)]
    uuid: Option<RecordId>,
}

#[derive(Debug, Error)]
enum StepError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("missing `{0}` reference from an earlier step")]
    MissingReference(&'static str),
}

pub struct ResortWizard<T = HttpTransport> {
    api: ApiClient<T>,
    state: ReactiveState<WizardState>,
    token: CancelToken,
}

impl<T: Transport> ResortWizard<T> {
    /// Fresh wizard for a new resort
    pub fn new(api: ApiClient<T>, policy: FailurePolicy) -> Self {
        Self::from_state(api, WizardState::new(policy))
    }

    /// Wizard pre-filled from existing records
    pub fn edit(api: ApiClient<T>, seed: &WizardSeed, policy: FailurePolicy) -> Self {
        Self::from_state(api, WizardState::from_seed(seed, policy))
    }

    fn from_state(api: ApiClient<T>, state: WizardState) -> Self {
        Self {
            api,
            state: ReactiveState::new(state),
            token: CancelToken::new(),
        }
    }

    pub fn state(&self) -> &ReactiveState<WizardState> {
        &self.state
    }

    pub fn snapshot(&self) -> WizardState {
        self.state.snapshot()
    }

    pub fn step(&self) -> WizardStep {
        self.state.with(|s| s.step)
    }

    pub fn ids(&self) -> WizardIds {
        self.state.with(|s| s.ids.clone())
    }

    pub fn set_empty_policy(&self, policy: EmptyPolicy) {
        self.state.update(|s| s.empty_policy = policy);
    }

    pub fn edit_basic(&self, editor: impl FnOnce(&mut ResortBasicDraft)) {
        self.state.update(|s| s.basic.edit(editor));
    }

    pub fn edit_form_data(&self, editor: impl FnOnce(&mut FormDataDraft)) {
        self.state.update(|s| s.form_data.edit(editor));
    }

    pub fn edit_welcome(&self, editor: impl FnOnce(&mut WelcomeDraft)) {
        self.state.update(|s| s.welcome.edit(editor));
    }

    pub fn edit_why_choose(&self, editor: impl FnOnce(&mut WhyChooseDraft)) {
        self.state.update(|s| s.why_choose.edit(editor));
    }

    /// A form control changed on the current step
    pub fn set_input(&self, name: &str, value: InputValue) -> bool {
        let applied = self.state.update(|s| s.set_input(name, value));
        if !applied {
            log::warn!("⚠️ [WIZARD] No '{}' input on {}", name, self.step().title());
        }
        applied
    }

    pub fn back(&self) {
        self.state.update(|s| s.back());
    }

    /// Dismiss the wizard; in-flight responses are dropped
    pub fn close(&self) {
        self.token.cancel();
        self.state.update(|s| s.step = WizardStep::Closed);
    }

    /// Submit the current step. Request failures are logged and returned as
    /// `StepOutcome::Failed`; whether the wizard still advances depends on
    /// the failure policy.
    pub async fn submit(&self) -> Result<StepOutcome, WizardError> {
        if self.token.is_cancelled() {
            return Err(WizardError::Cancelled);
        }

        let step = self.step();
        if step == WizardStep::Closed {
            return Err(WizardError::Closed);
        }

        self.state.update(|s| s.submitting = true);
        let result = match step {
            WizardStep::Basic => self.submit_basic().await,
            WizardStep::FormData => self.submit_form_data().await,
            WizardStep::Welcome => self.submit_welcome().await,
            WizardStep::WhyChoose => self.submit_why_choose().await,
            WizardStep::Closed => return Err(WizardError::Closed),
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(StepError::Api(ApiError::Cancelled)) => return Err(WizardError::Cancelled),
            Err(e) => {
                log::error!("❌ [WIZARD] {} failed: {}", step.title(), e);
                StepOutcome::Failed(e.to_string())
            }
        };

        if outcome == StepOutcome::Skipped {
            log::info!("⏭️ [WIZARD] {} unchanged, skipped", step.title());
        }

        let outcome = self.state.update(|s| {
            s.submitting = false;
            s.record(outcome)
        });
        if self.step() == WizardStep::Closed {
            log::info!("✅ [WIZARD] Closed, ids: {:?}", self.ids());
        }
        Ok(outcome)
    }

    async fn submit_basic(&self) -> Result<StepOutcome, StepError> {
        let s = self.snapshot();
        if !s.basic.dirty {
            return Ok(StepOutcome::Skipped);
        }

        let resort_mode = mode_for(&s.ids.resort_id);
        let resort_payload = Payload::from_record(&s.basic.draft, resort_mode, s.empty_policy)?;

        let place = s.basic.draft.place_draft();
        let mut place_id = s.ids.place_id.clone();
        if place_id.is_none() || s.saved_place.as_ref() != Some(&place) {
            let payload = Payload::from_record(&place, Mode::Create, s.empty_policy)?;
            let created: Created = self
                .send(Method::Post, endpoints::place::CREATE, payload.into_body())
                .await?;
            log::info!("📍 [WIZARD] Place created: {}", created.id);

            place_id = Some(created.id.clone());
            self.state.update(|st| {
                st.ids.place_id = Some(created.id);
                st.saved_place = Some(place);
            });
        }

        let form = resort_payload.with("place_id", Field::reference(&place_id)).to_multipart();
        let (method, path) = match s.ids.resort_key.as_ref().or(s.ids.resort_id.as_ref()) {
            Some(key) => (Method::Put, endpoints::resort::item(key)),
            None => (Method::Post, endpoints::resort::CREATE.to_string()),
        };
        let saved: Created = self.send(method, &path, RequestBody::Multipart(form)).await?;
        log::info!("🏝️ [WIZARD] Resort saved: {}", saved.id);

        self.state.update(|st| {
            st.ids.resort_key = Some(saved.uuid.unwrap_or_else(|| saved.id.clone()));
            st.ids.resort_id = Some(saved.id);
            st.basic.dirty = false;
        });
        Ok(StepOutcome::Saved)
    }

    async fn submit_form_data(&self) -> Result<StepOutcome, StepError> {
        let s = self.snapshot();
        if !s.form_data.dirty {
            return Ok(StepOutcome::Skipped);
        }
        self.check_reference(&s)?;

        let mode = mode_for(&s.ids.form_data_id);
        let form = Payload::from_record(&s.form_data.draft, mode, s.empty_policy)?
            .with("resort", Field::reference(&s.ids.resort_id))
            .to_multipart();
        let (method, path) = match &s.ids.form_data_id {
            Some(id) => (Method::Patch, endpoints::resort_form_data::item(id)),
            None => (Method::Post, endpoints::resort_form_data::CREATE.to_string()),
        };
        let saved: Created = self.send(method, &path, RequestBody::Multipart(form)).await?;
        log::info!("📝 [WIZARD] Resort details saved: {}", saved.id);
        self.state.update(|st| st.ids.form_data_id = Some(saved.id.clone()));

        let images = &s.form_data.draft.additional_images;
        if !images.is_empty() {
            let mut gallery = MultipartForm::new();
            for image in images {
                gallery.push_file("images", image.clone());
            }
            // A failed upload returns here with the section still dirty, so
            // a resubmit PATCHes the record and retries the gallery
            let _: serde_json::Value = self
                .send(
                    Method::Post,
                    &endpoints::resort_form_data::upload_images(&saved.id),
                    RequestBody::Multipart(gallery),
                )
                .await?;
            log::info!("🖼️ [WIZARD] {} gallery images uploaded", images.len());
            self.state.update(|st| st.form_data.draft.additional_images.clear());
        }

        self.state.update(|st| st.form_data.dirty = false);
        Ok(StepOutcome::Saved)
    }

    async fn submit_welcome(&self) -> Result<StepOutcome, StepError> {
        let s = self.snapshot();
        if !s.welcome.dirty {
            return Ok(StepOutcome::Skipped);
        }
        self.check_reference(&s)?;

        let mode = mode_for(&s.ids.welcome_id);
        let form = Payload::from_record(&s.welcome.draft, mode, s.empty_policy)?
            .with("form_data", Field::reference(&s.ids.form_data_id))
            .to_multipart();
        let (method, path) = match &s.ids.welcome_id {
            Some(id) => (Method::Patch, endpoints::welcome::item(id)),
            None => (Method::Post, endpoints::welcome::CREATE.to_string()),
        };
        let saved: Created = self.send(method, &path, RequestBody::Multipart(form)).await?;
        log::info!("👋 [WIZARD] Welcome section saved: {}", saved.id);

        self.state.update(|st| {
            st.ids.welcome_id = Some(saved.id);
            st.welcome.dirty = false;
        });
        Ok(StepOutcome::Saved)
    }

    async fn submit_why_choose(&self) -> Result<StepOutcome, StepError> {
        let s = self.snapshot();
        if !s.why_choose.dirty {
            return Ok(StepOutcome::Skipped);
        }
        self.check_reference(&s)?;

        let mode = mode_for(&s.ids.why_choose_id);
        let form = Payload::from_record(&s.why_choose.draft, mode, s.empty_policy)?
            .with("form_data", Field::reference(&s.ids.form_data_id))
            .to_multipart();
        let (method, path) = match &s.ids.why_choose_id {
            Some(id) => (Method::Patch, endpoints::why_choose::item(id)),
            None => (Method::Post, endpoints::why_choose::CREATE.to_string()),
        };
        let saved: Created = self.send(method, &path, RequestBody::Multipart(form)).await?;
        log::info!("⭐ [WIZARD] Why-choose section saved: {}", saved.id);

        self.state.update(|st| {
            st.ids.why_choose_id = Some(saved.id);
            st.why_choose.dirty = false;
        });
        Ok(StepOutcome::Saved)
    }

    /// Under `Advance` a missing reference is only logged and the request
    /// goes out without it.
    fn check_reference(&self, s: &WizardState) -> Result<(), StepError> {
        match s.missing_reference() {
            Some(reference) if s.policy == FailurePolicy::Block => Err(StepError::MissingReference(reference)),
            Some(reference) => {
                log::warn!("⚠️ [WIZARD] {} sent without `{}`", s.step.title(), reference);
                Ok(())
            }
            None => Ok(()),
        }
    }

    async fn send<R: DeserializeOwned>(&self, method: Method, path: &str, body: RequestBody) -> Result<R, StepError> {
        let result = self.api.send_body(method, path, body).await;
        Ok(self.token.guard(result)?)
    }
}

fn mode_for(id: &Option<RecordId>) -> Mode {
    if id.is_some() {
        Mode::Update
    } else {
        Mode::Create
    }
}
