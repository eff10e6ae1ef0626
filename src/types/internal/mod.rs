// In-process state shared between coordinators, providers and presentation
pub mod acquisition_state;
pub mod identity;
pub mod registration_input;
pub mod submission_context;
pub mod submission_result;

pub use acquisition_state::{AcquisitionOutcome, AcquisitionState};
pub use identity::Identity;
pub use registration_input::{MIN_PHONE_DIGITS, RegistrationInput, strip_non_digits};
pub use submission_context::SubmissionContext;
pub use submission_result::SubmissionResult;
