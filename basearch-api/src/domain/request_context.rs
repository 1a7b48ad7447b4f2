use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// What the HTTP layer knows about the current request.
///
/// `identity` is the authenticated username, if any. `negotiated_locale` is the
/// locale offered by content negotiation or an explicit session value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub identity: Option<String>,
    pub negotiated_locale: Option<Locale>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            identity: Some(username.into()),
            negotiated_locale: None,
        }
    }

    pub fn with_negotiated_locale(mut self, locale: Locale) -> Self {
        self.negotiated_locale = Some(locale);
        self
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }
}
