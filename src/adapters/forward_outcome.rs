use reqwest::StatusCode;

/// Result of a webhook call that reached the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// The endpoint answered with a success status
    Delivered { status: StatusCode },
    /// The endpoint answered with any other status
    ///
    /// `body` is the response text as returned by the endpoint.
    Rejected { status: StatusCode, body: String },
}

impl ForwardOutcome {
    pub fn status(&self) -> StatusCode {
        match self {
            ForwardOutcome::Delivered { status } | ForwardOutcome::Rejected { status, .. } => *status,
        }
    }
}
