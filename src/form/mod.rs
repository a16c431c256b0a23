pub mod controller;

pub use controller::{
    AttachmentHidden, BindOutcome, DayCount, FormController, FormState, SubmitOutcome,
};
