// ============================================================================
// FORM VIEWMODEL - Draft + create/update submission for any editable record
// ============================================================================
// No edit target: one POST to the create path. Edit target: one PATCH/PUT
// (per resource) to the item path. Required fields are checked by the
// payload schema before anything is sent.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, SubmitError};
use crate::forms::{EmptyPolicy, Mode, Payload};
use crate::models::{Editable, RecordId};
use crate::services::transport::Method;
use crate::services::{ApiClient, HttpTransport, Transport};
use crate::state::{CancelToken, ReactiveState};
use crate::viewmodels::list_viewmodel::capitalize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState<D> {
    pub open: bool,
    pub draft: D,
    pub edit_target: Option<RecordId>,
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl<D: Default> Default for FormState<D> {
    fn default() -> Self {
        Self {
            open: false,
            draft: D::default(),
            edit_target: None,
            saving: false,
            error: None,
            success: None,
        }
    }
}

pub struct FormViewModel<R: Editable, T = HttpTransport> {
    api: ApiClient<T>,
    state: ReactiveState<FormState<R::Draft>>,
    policy: EmptyPolicy,
    token: CancelToken,
}

impl<R: Editable, T: Transport> FormViewModel<R, T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self::with_policy(api, EmptyPolicy::default())
    }

    pub fn with_policy(api: ApiClient<T>, policy: EmptyPolicy) -> Self {
        Self {
            api,
            state: ReactiveState::default(),
            policy,
            token: CancelToken::new(),
        }
    }

    pub fn state(&self) -> &ReactiveState<FormState<R::Draft>> {
        &self.state
    }

    pub fn draft(&self) -> R::Draft {
        self.state.with(|s| s.draft.clone())
    }

    pub fn open_create(&self) {
        self.state.set(FormState {
            open: true,
            ..FormState::default()
        });
    }

    pub fn open_edit(&self, record: &R) {
        self.state.set(FormState {
            open: true,
            draft: record.to_draft(),
            edit_target: Some(record.id().clone()),
            ..FormState::default()
        });
    }

    pub fn edit(&self, editor: impl FnOnce(&mut R::Draft)) {
        self.state.update(|s| editor(&mut s.draft));
    }

    pub fn close(&self) {
        self.state.set(FormState::default());
    }

    /// Submit the draft; on success the form closes and the saved record is returned
    pub async fn submit(&self) -> Result<R, SubmitError> {
        let (draft, target) = self.state.with(|s| (s.draft.clone(), s.edit_target.clone()));
        let mode = if target.is_some() { Mode::Update } else { Mode::Create };

        let payload = match Payload::from_record(&draft, mode, self.policy) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("⚠️ {} form rejected: {}", R::SINGULAR, e);
                self.state.update(|s| s.error = Some("All required fields must be filled.".to_string()));
                return Err(e.into());
            }
        };

        let (method, path) = match &target {
            Some(id) => (R::UPDATE_METHOD, R::item_path(id)),
            None => (Method::Post, R::create_path()),
        };

        self.state.update(|s| {
            s.saving = true;
            s.error = None;
            s.success = None;
        });

        let result = self.api.send_body::<R>(method, &path, payload.into_body()).await;
        let result = self.token.guard(result);

        match result {
            Ok(saved) => {
                log::info!("💾 {} saved ({} {})", R::SINGULAR, method, path);
                self.state.set(FormState {
                    success: Some(format!("{} saved successfully!", capitalize(R::SINGULAR))),
                    ..FormState::default()
                });
                Ok(saved)
            }
            Err(ApiError::Cancelled) => Err(ApiError::Cancelled.into()),
            Err(e) => {
                log::error!("❌ Error saving {}: {}", R::SINGULAR, e);
                self.state.update(|s| {
                    s.saving = false;
                    s.error = Some(format!("Failed to save {}.", R::SINGULAR));
                });
                Err(e.into())
            }
        }
    }

    pub fn dismiss(&self) {
        self.token.cancel();
    }
}
