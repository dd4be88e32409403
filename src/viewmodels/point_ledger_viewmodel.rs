// ============================================================================
// POINT LEDGER VIEWMODEL - One user's referral points and referrals
// ============================================================================
// The ledger endpoint returns every user's entries; this screen keeps the
// ones for its user. Adding and deducting both append a new entry.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{total_points, PointEntry, Referral, User};
use crate::services::endpoints;
use crate::services::transport::Method;
use crate::services::{ApiClient, HttpTransport, Transport};
use crate::state::{CancelToken, ReactiveState};

pub const ADD_REASON: &str = "Points added by admin";
pub const DEDUCT_REASON: &str = "Points deducted by admin";

#[derive(Debug, Clone, Serialize)]
struct NewEntry<'a> {
    user_uuid: &'a str,
    points: i64,
    reason: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    pub history: Vec<PointEntry>,
    pub referrals: Vec<Referral>,
    pub loading: bool,
    pub error: Option<String>,
}

impl LedgerState {
    pub fn total(&self) -> i64 {
        total_points(&self.history)
    }
}

pub struct PointLedgerViewModel<T = HttpTransport> {
    api: ApiClient<T>,
    user: User,
    state: ReactiveState<LedgerState>,
    token: CancelToken,
}

impl<T: Transport> PointLedgerViewModel<T> {
    pub fn new(api: ApiClient<T>, user: User) -> Self {
        Self {
            api,
            user,
            state: ReactiveState::default(),
            token: CancelToken::new(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn state(&self) -> &ReactiveState<LedgerState> {
        &self.state
    }

    pub fn total(&self) -> i64 {
        self.state.with(|s| s.total())
    }

    pub async fn fetch_history(&self) -> Result<(), ApiError> {
        self.state.update(|s| s.loading = true);
        let result = self.api.get_json::<Vec<PointEntry>>(endpoints::referral::POINTS).await;
        let entries = self.token.guard(result).map_err(|e| self.fail("Failed to fetch point history.", e))?;

        let history: Vec<PointEntry> = entries
            .into_iter()
            .filter(|entry| entry.user_uuid == self.user.uuid)
            .collect();
        log::info!("🎯 {} point entries for {}", history.len(), self.user.uuid);

        self.state.update(|s| {
            s.history = history;
            s.loading = false;
            s.error = None;
        });
        Ok(())
    }

    pub async fn fetch_referrals(&self) -> Result<(), ApiError> {
        let path = endpoints::referral::for_user(&self.user.uuid);
        let result = self.api.get_json::<Vec<Referral>>(&path).await;
        let referrals = self.token.guard(result).map_err(|e| self.fail("Failed to fetch referrals.", e))?;

        log::info!("🤝 {} referrals for {}", referrals.len(), self.user.uuid);
        self.state.update(|s| s.referrals = referrals);
        Ok(())
    }

    /// Returns `Ok(None)` when the amount is blank and nothing was sent
    pub async fn add_points(&self, amount: &str, reason: &str) -> Result<Option<PointEntry>, ApiError> {
        self.post_entry(amount, 1, reason, ADD_REASON).await
    }

    /// Posts the amount as a negative entry
    pub async fn deduct_points(&self, amount: &str, reason: &str) -> Result<Option<PointEntry>, ApiError> {
        self.post_entry(amount, -1, reason, DEDUCT_REASON).await
    }

    pub fn dismiss(&self) {
        self.token.cancel();
    }

    async fn post_entry(
        &self,
        amount: &str,
        sign: i64,
        reason: &str,
        default_reason: &str,
    ) -> Result<Option<PointEntry>, ApiError> {
        let amount = amount.trim();
        if amount.is_empty() {
            return Ok(None);
        }
        let points = match amount.parse::<i64>().ok().and_then(i64::checked_abs) {
            Some(points) => points,
            None => {
                log::warn!("⚠️ Ignoring point amount '{}'", amount);
                return Ok(None);
            }
        };

        let reason = if reason.trim().is_empty() { default_reason } else { reason.trim() };
        let body = NewEntry {
            user_uuid: &self.user.uuid,
            points: sign * points,
            reason,
        };

        let result = self
            .api
            .send_json::<_, PointEntry>(Method::Post, endpoints::referral::POINTS, &body)
            .await;
        let entry = self.token.guard(result).map_err(|e| self.fail("Failed to update points.", e))?;

        log::info!("🎯 {:+} points for {} ({})", entry.points, self.user.uuid, entry.reason);
        self.state.update(|s| {
            s.history.push(entry.clone());
            s.error = None;
        });
        Ok(Some(entry))
    }

    fn fail(&self, message: &str, e: ApiError) -> ApiError {
        if !e.is_cancelled() {
            log::error!("❌ [LEDGER] {} ({}): {}", message, self.user.uuid, e);
            self.state.update(|s| {
                s.loading = false;
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
    fn entries_serialise_with_the_ledger_field_names() {
        let body = NewEntry {
            user_uuid: "u-1",
            points: -5,
            reason: DEDUCT_REASON,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["points"], -5);
        assert_eq!(json["user_uuid"], "u-1");
        assert_eq!(json["reason"], "Points deducted by admin");
    }
}
