pub mod payload;

pub use payload::{EmptyPolicy, Field, FieldSpec, FormRecord, Mode, Payload, Presence};
