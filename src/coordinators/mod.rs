// Coordinators layer - Workflow orchestration
//
// Coordinators own view state and sequence provider operations for one
// session: acquiring the identity, then submitting the registration form.

pub mod acquisition_coordinator;
pub mod registration_coordinator;

// Re-export coordinators for clean imports
pub use acquisition_coordinator::IdentityAcquisition;
pub use registration_coordinator::RegistrationCoordinator;
