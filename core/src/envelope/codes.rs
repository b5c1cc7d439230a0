use crate::constants::service_codes;
use crate::types::ServiceErrorKind;

/// Maps envelope codes to error kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorCodeTable {
    access_denied: Vec<i64>,
}

impl Default for ErrorCodeTable {
    fn default() -> Self {
        Self { access_denied: vec![service_codes::ACCESS_DENIED] }
    }
}

impl ErrorCodeTable {
    pub fn new(access_denied: impl IntoIterator<Item = i64>) -> Self {
        Self { access_denied: access_denied.into_iter().collect() }
    }

    pub fn classify(&self, code: i64) -> ServiceErrorKind {
        if self.access_denied.contains(&code) {
            ServiceErrorKind::AccessDenied
        } else {
            ServiceErrorKind::Generic
        }
    }
}
