/// Verified external account, as reported by the identity provider
///
/// Created once per successful acquisition and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Opaque, provider-assigned unique user id
    pub id: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar_url: None,
        }
    }

    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }
}
