// ============================================================================
// SERVICE VIEWMODEL - Service pages, saved as heading then detail
// ============================================================================
// Save: the heading (JSON, PATCH when the detail already has one, else POST),
// then the detail (multipart, PATCH when editing, else POST) pointing at the
// heading id from the first response. A failed heading stops the save.
// Delete: the detail, then its heading, then one refetch.
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ApiError, SubmitError};
use crate::forms::{EmptyPolicy, Field, Mode, Payload};
use crate::models::{Editable, RecordId, Resource, ServiceDetail, ServiceDraft, ServiceHeading};
use crate::services::endpoints;
use crate::services::transport::Method;
use crate::services::{ApiClient, HttpTransport, Transport};
use crate::state::{CancelToken, ReactiveState};
use crate::viewmodels::list_viewmodel::{Confirm, DeleteOutcome};

/// Open create/edit form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceForm {
    pub draft: ServiceDraft,
    /// Detail being edited; `None` creates a new service
    pub detail_id: Option<RecordId>,
    pub heading_id: Option<RecordId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceState {
    pub services: Vec<ServiceDetail>,
    pub form: Option<ServiceForm>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

pub struct ServiceViewModel<T = HttpTransport> {
    api: ApiClient<T>,
    state: ReactiveState<ServiceState>,
    token: CancelToken,
}

impl<T: Transport> ServiceViewModel<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            api,
            state: ReactiveState::default(),
            token: CancelToken::new(),
        }
    }

    pub fn state(&self) -> &ReactiveState<ServiceState> {
        &self.state
    }

    pub fn services(&self) -> Vec<ServiceDetail> {
        self.state.with(|s| s.services.clone())
    }

    pub async fn fetch(&self) -> Result<(), ApiError> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.api.get_json::<Vec<ServiceDetail>>(endpoints::service::DETAILS).await;
        let services = self.token.guard(result).map_err(|e| self.fail("Failed to load services.", e))?;

        log::info!("📋 Loaded {} services", services.len());
        self.state.update(|s| {
            s.services = services;
            s.loading = false;
        });
        Ok(())
    }

    pub fn open_create(&self) {
        self.state.update(|s| {
            s.form = Some(ServiceForm::default());
            s.error = None;
            s.notice = None;
        });
    }

    pub fn open_edit(&self, service: &ServiceDetail) {
        self.state.update(|s| {
            s.form = Some(ServiceForm {
                draft: service.to_draft(),
                detail_id: Some(service.id.clone()),
                heading_id: service.service_header.clone(),
            });
            s.error = None;
            s.notice = None;
        });
    }

    /// No-op while the form is closed
    pub fn edit(&self, editor: impl FnOnce(&mut ServiceDraft)) {
        self.state.update(|s| {
            if let Some(form) = s.form.as_mut() {
                editor(&mut form.draft);
            }
        });
    }

    pub fn close(&self) {
        self.state.update(|s| s.form = None);
    }

    /// Save the open form and return the saved detail. The form closes and
    /// the list refetches only once both records are saved.
    pub async fn save(&self) -> Result<ServiceDetail, SubmitError> {
        // A closed form saves as an empty create and fails validation
        let form = self.state.with(|s| s.form.clone()).unwrap_or_default();
        let mode = if form.detail_id.is_some() { Mode::Update } else { Mode::Create };

        // Validate before the heading goes out, so a bad form sends nothing
        let payload = match Payload::from_record(&form.draft, mode, EmptyPolicy::Explicit) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("⚠️ Service form rejected: {}", e);
                self.state.update(|s| s.error = Some("All required fields must be filled.".to_string()));
                return Err(e.into());
            }
        };

        self.state.update(|s| {
            s.saving = true;
            s.error = None;
            s.notice = None;
        });

        let heading = self.save_heading(&form).await.map_err(|e| self.fail("Failed to save service.", e))?;
        let (method, path) = match &form.detail_id {
            Some(id) => (Method::Patch, ServiceDetail::item_path(id)),
            None => (Method::Post, ServiceDetail::create_path()),
        };
        let body = payload
            .with("service_header", Field::reference(&Some(heading.id.clone())))
            .to_multipart();
        let result = self.api.send_multipart::<ServiceDetail>(method, &path, body).await;
        let saved = self.token.guard(result).map_err(|e| self.fail("Failed to save service.", e))?;

        log::info!("💾 Service {} saved under heading {}", saved.id, heading.id);
        self.state.update(|s| {
            s.form = None;
            s.saving = false;
            s.notice = Some("Service saved successfully!".to_string());
        });
        self.fetch().await?;
        Ok(saved)
    }

    async fn save_heading(&self, form: &ServiceForm) -> Result<ServiceHeading, ApiError> {
        let body = json!({ "title": form.draft.title });
        let (method, path) = match (&form.detail_id, &form.heading_id) {
            (Some(_), Some(heading)) => (Method::Patch, ServiceHeading::item_path(heading)),
            _ => (Method::Post, ServiceHeading::create_path()),
        };
        let result = self.api.send_json::<_, ServiceHeading>(method, &path, &body).await;
        self.token.guard(result)
    }

    /// Confirm, DELETE the detail and then its heading, refetch once
    pub async fn delete(&self, service: &ServiceDetail, confirm: &impl Confirm) -> Result<DeleteOutcome, ApiError> {
        if !confirm.confirm("Are you sure you want to delete this service?") {
            return Ok(DeleteOutcome::Declined);
        }
        self.state.update(|s| {
            s.error = None;
            s.notice = None;
        });

        let result = self.api.delete(&ServiceDetail::item_path(&service.id)).await;
        self.token.guard(result).map_err(|e| self.fail("Failed to delete service.", e))?;

        // A heading may be missing on records created elsewhere
        if let Some(heading) = &service.service_header {
            let result = self.api.delete(&ServiceHeading::item_path(heading)).await;
            self.token.guard(result).map_err(|e| self.fail("Failed to delete service.", e))?;
        }

        log::info!("🗑️ Deleted service {}", service.id);
        self.state.update(|s| s.notice = Some("Service deleted successfully!".to_string()));
        self.fetch().await?;
        Ok(DeleteOutcome::Deleted)
    }

    pub fn dismiss(&self) {
        self.token.cancel();
    }

    fn fail(&self, message: &str, e: ApiError) -> ApiError {
        if !e.is_cancelled() {
            log::error!("❌ {} {}", message, e);
            self.state.update(|s| {
                s.loading = false;
                s.saving = false;
                s.error = Some(message.to_string());
            });
        }
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_keeps_both_ids() {
        let detail: ServiceDetail = serde_json::from_value(json!({
            "id": 4, "title": "Yoga", "service_header": 9
        }))
        .unwrap();
        let form = ServiceForm {
            draft: detail.to_draft(),
            detail_id: Some(detail.id.clone()),
            heading_id: detail.service_header.clone(),
        };

        assert_eq!(form.heading_id, Some(RecordId::Int(9)));
        assert_eq!(form.draft.title, "Yoga");
    }
}
