pub mod form_viewmodel;
pub mod list_viewmodel;
pub mod membership_viewmodel;
pub mod point_ledger_viewmodel;
pub mod resort_wizard;
pub mod service_viewmodel;

pub use form_viewmodel::{FormState, FormViewModel};
pub use list_viewmodel::{Confirm, DeleteOutcome, ListState, ListViewModel};
pub use membership_viewmodel::{MembershipState, MembershipViewModel, PlanDraft};
pub use point_ledger_viewmodel::{LedgerState, PointLedgerViewModel};
pub use resort_wizard::{FailurePolicy, ResortWizard, StepOutcome, WizardStep};
pub use service_viewmodel::{ServiceForm, ServiceState, ServiceViewModel};
