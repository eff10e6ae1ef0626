/// Trait for providing environment variable access
///
/// Settings are read through this seam instead of `std::env` directly so that
/// tests can supply their own values without touching process-global state.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;

    /// Returns the variable with surrounding whitespace removed, treating a
    /// blank value the same as an unset one.
    fn get_non_blank(&self, key: &str) -> Option<String> {
        self.get_var(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

/// Production environment provider that reads from the process environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test environment provider with configurable variables
#[cfg(test)]
pub struct MockEnvironment {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn new(vars: std::collections::HashMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn empty() -> Self {
        Self {
            vars: std::collections::HashMap::new(),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_vars(mut self, vars: &[(&str, &str)]) -> Self {
        for (key, value) in vars {
            self.vars.insert(key.to_string(), value.to_string());
        }
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
