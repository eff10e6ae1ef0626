// Wire formats exchanged with the registration endpoint
pub mod registration;

pub use registration::{RegistrationRequest, RegistrationResponse};
