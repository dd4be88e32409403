// ============================================================================
// MEMBERSHIP VIEWMODEL - Gold and Platinum plan editor
// ============================================================================
// One record per plan. Saving re-POSTs the whole plan to the create endpoint;
// the server upserts by name.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{Benefit, Membership, PlanKind};
use crate::services::endpoints;
use crate::services::transport::Method;
use crate::services::{ApiClient, HttpTransport, Transport};
use crate::state::{CancelToken, ReactiveState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    pub name: String,
    pub amount: String,
    pub description: String,
    pub is_popular: bool,
    pub limited_offer: bool,
    /// Raw input; parsed on save
    pub referral_limit: String,
    pub benefits: Vec<Benefit>,
    /// Pending text of the "add benefit" input
    pub new_benefit: String,
}

impl PlanDraft {
    pub fn empty(kind: PlanKind) -> Self {
        Self {
            name: kind.as_str().to_string(),
            amount: String::new(),
            description: String::new(),
            is_popular: false,
            limited_offer: false,
            referral_limit: String::new(),
            benefits: Vec::new(),
            new_benefit: String::new(),
        }
    }

    fn from_membership(kind: PlanKind, plan: &Membership) -> Self {
        Self {
            name: kind.as_str().to_string(),
            amount: plan.amount.clone(),
            description: plan.description.clone(),
            is_popular: plan.is_popular,
            limited_offer: plan.limited_offer,
            referral_limit: plan.referral_limit.to_string(),
            benefits: plan.benefits.clone(),
            new_benefit: String::new(),
        }
    }

    /// Body sent on save. A non-numeric referral limit goes out as 0.
    pub fn to_membership(&self) -> Membership {
        Membership {
            id: None,
            name: self.name.clone(),
            amount: self.amount.clone(),
            description: self.description.clone(),
            is_popular: self.is_popular,
            limited_offer: self.limited_offer,
            referral_limit: self.referral_limit.trim().parse().unwrap_or(0),
            benefits: self.benefits.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipState {
    pub gold: PlanDraft,
    pub platinum: PlanDraft,
    /// Plan whose form is open
    pub editing: Option<PlanKind>,
    pub saving: bool,
    pub error: Option<String>,
}

impl Default for MembershipState {
    fn default() -> Self {
        Self {
            gold: PlanDraft::empty(PlanKind::Gold),
            platinum: PlanDraft::empty(PlanKind::Platinum),
            editing: None,
            saving: false,
            error: None,
        }
    }
}

impl MembershipState {
    pub fn plan(&self, kind: PlanKind) -> &PlanDraft {
        match kind {
            PlanKind::Gold => &self.gold,
            PlanKind::Platinum => &self.platinum,
        }
    }

    pub fn plan_mut(&mut self, kind: PlanKind) -> &mut PlanDraft {
        match kind {
            PlanKind::Gold => &mut self.gold,
            PlanKind::Platinum => &mut self.platinum,
        }
    }
}

pub struct MembershipViewModel<T = HttpTransport> {
    api: ApiClient<T>,
    state: ReactiveState<MembershipState>,
    token: CancelToken,
}

impl<T: Transport> MembershipViewModel<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            api,
            state: ReactiveState::default(),
            token: CancelToken::new(),
        }
    }

    pub fn state(&self) -> &ReactiveState<MembershipState> {
        &self.state
    }

    pub fn plan(&self, kind: PlanKind) -> PlanDraft {
        self.state.with(|s| s.plan(kind).clone())
    }

    /// Load both plans. Unknown plan names are ignored.
    pub async fn fetch(&self) -> Result<(), ApiError> {
        let result = self.api.get_json::<Vec<Membership>>(endpoints::membership::LIST).await;
        let plans = self.token.guard(result).map_err(|e| {
            if !e.is_cancelled() {
                log::error!("❌ Error fetching memberships: {}", e);
                self.state.update(|s| s.error = Some("Failed to fetch memberships.".to_string()));
            }
            e
        })?;

        log::info!("💳 Loaded {} membership plans", plans.len());
        self.state.update(|s| {
            for plan in &plans {
                match PlanKind::parse(&plan.name) {
                    Some(kind) => *s.plan_mut(kind) = PlanDraft::from_membership(kind, plan),
                    None => log::warn!("⚠️ Unknown membership plan '{}'", plan.name),
                }
            }
            s.error = None;
        });
        Ok(())
    }

    pub fn start_editing(&self, kind: PlanKind) {
        self.state.update(|s| s.editing = Some(kind));
    }

    pub fn cancel_editing(&self) {
        self.state.update(|s| s.editing = None);
    }

    pub fn edit(&self, kind: PlanKind, editor: impl FnOnce(&mut PlanDraft)) {
        self.state.update(|s| editor(s.plan_mut(kind)));
    }

    /// Append the pending benefit text; blank input is ignored
    pub fn add_benefit(&self, kind: PlanKind) -> bool {
        self.state.update(|s| {
            let plan = s.plan_mut(kind);
            let text = plan.new_benefit.trim().to_string();
            if text.is_empty() {
                return false;
            }
            plan.benefits.push(Benefit { benefit_text: text });
            plan.new_benefit.clear();
            true
        })
    }

    pub fn remove_benefit(&self, kind: PlanKind, index: usize) {
        self.state.update(|s| {
            let benefits = &mut s.plan_mut(kind).benefits;
            if index < benefits.len() {
                benefits.remove(index);
            }
        });
    }

    /// POST the plan, close the editor and reload both plans
    pub async fn save(&self, kind: PlanKind) -> Result<(), ApiError> {
        let body = self.state.with(|s| s.plan(kind).to_membership());
        self.state.update(|s| {
            s.saving = true;
            s.error = None;
        });

        let result = self
            .api
            .send_json::<_, serde_json::Value>(Method::Post, endpoints::membership::CREATE, &body)
            .await;
        if let Err(e) = self.token.guard(result) {
            if !e.is_cancelled() {
                log::error!("❌ Error saving {} membership: {}", kind.as_str(), e);
                self.state.update(|s| {
                    s.saving = false;
                    s.error = Some("Failed to save membership.".to_string());
                });
            }
            return Err(e);
        }

        log::info!("💾 {} membership saved", kind.as_str());
        self.state.update(|s| {
            s.saving = false;
            s.editing = None;
        });
        self.fetch().await
    }

    pub fn dismiss(&self) {
        self.token.cancel();
    }
}
