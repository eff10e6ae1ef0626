// Errors layer - Error type definitions
pub mod provider;
pub mod registration;

// Re-exports for convenience
pub use provider::ProviderError;
pub use registration::{ErrorCategory, RegistrationError};
