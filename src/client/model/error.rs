/// Failed API call as shown to the user
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    /// HTTP status, or 500 when the request never produced a response
    pub status: u64,
    /// Plain-text body of the error response
    pub message: String,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}
