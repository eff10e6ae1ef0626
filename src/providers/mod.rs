// Providers layer - Work performers
//
// Providers do the actual work (talking to the identity SDK, validating and
// sending registrations). Coordinators sequence them and own view state.

pub mod identity_provider;
pub mod preset_identity_provider;
pub mod registration_provider;

// Re-export providers for clean imports
pub use identity_provider::{IdentityProvider, Profile};
pub use preset_identity_provider::PresetIdentityProvider;
pub use registration_provider::RegistrationProvider;
