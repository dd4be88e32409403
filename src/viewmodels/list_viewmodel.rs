// ============================================================================
// LIST VIEWMODEL - Fetch / delete / refetch for any list screen
// ============================================================================
// No optimistic removal: a delete is followed by one full refetch. A failed
// call leaves the rendered items alone and sets one generic message.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{RecordId, Resource};
use crate::services::{ApiClient, HttpTransport, Transport};
use crate::state::{CancelToken, ReactiveState};

/// Blocking yes/no question before a destructive action
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListState<R> {
    pub items: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            notice: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user answered "no"; nothing was sent
    Declined,
}

pub struct ListViewModel<R, T = HttpTransport> {
    api: ApiClient<T>,
    state: ReactiveState<ListState<R>>,
    token: CancelToken,
}

impl<R: Resource, T: Transport> ListViewModel<R, T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            api,
            state: ReactiveState::default(),
            token: CancelToken::new(),
        }
    }

    pub fn state(&self) -> &ReactiveState<ListState<R>> {
        &self.state
    }

    pub fn items(&self) -> Vec<R> {
        self.state.with(|s| s.items.clone())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    /// Replace the items with the server's list, in server order
    pub async fn fetch(&self) -> Result<(), ApiError> {
        self.state.update(|s| s.loading = true);

        let result = self.api.get_json::<Vec<R>>(&R::collection_path()).await;
        let result = self.token.guard(result);
        if matches!(result, Err(ApiError::Cancelled)) {
            return result.map(|_| ());
        }

        match result {
            Ok(items) => {
                log::info!("📋 Loaded {} {}", items.len(), R::PLURAL);
                self.state.update(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                });
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error fetching {}: {}", R::PLURAL, e);
                self.state.update(|s| {
                    s.loading = false;
                    s.error = Some(format!("Failed to fetch {}.", R::PLURAL));
                });
                Err(e)
            }
        }
    }

    /// Confirm, DELETE once, then refetch once on success
    pub async fn delete(&self, id: &RecordId, confirm: &impl Confirm) -> Result<DeleteOutcome, ApiError> {
        let question = format!("Are you sure you want to delete this {}?", R::SINGULAR);
        if !confirm.confirm(&question) {
            return Ok(DeleteOutcome::Declined);
        }

        self.state.update(|s| {
            s.error = None;
            s.notice = None;
        });

        let result = self.api.delete(&R::item_path(id)).await;
        self.token.guard(result).map_err(|e| {
            if !e.is_cancelled() {
                log::error!("❌ Error deleting {} {}: {}", R::SINGULAR, id, e);
                self.state
                    .update(|s| s.error = Some(format!("Failed to delete {}.", R::SINGULAR)));
            }
            e
        })?;

        log::info!("🗑️ Deleted {} {}", R::SINGULAR, id);
        self.state
            .update(|s| s.notice = Some(format!("{} deleted successfully!", capitalize(R::SINGULAR))));
        self.fetch().await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Screen dismissed: late responses are dropped
    pub fn dismiss(&self) {
        self.token.cancel();
    }
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_work_as_confirm_dialogs() {
        let yes = |_: &str| true;
        let no = |message: &str| message.is_empty();
        assert!(yes.confirm("delete?"));
        assert!(!no.confirm("delete?"));
    }

    #[test]
    fn notice_uses_a_capitalised_label() {
        assert_eq!(capitalize("category"), "Category");
        assert_eq!(capitalize("Blog Inner"), "Blog Inner");
        assert_eq!(capitalize(""), "");
    }
}
