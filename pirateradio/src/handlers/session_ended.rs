use crate::error::Result;
use crate::handler::{HandlerInput, RequestHandler, RequestMatcher, is_request_type};
use crate::models::{Response, SESSION_ENDED_REQUEST};
use tracing::{info, warn};

/// The platform closed the session; the response must stay empty
#[derive(Debug, Clone)]
pub struct SessionEndedRequestHandler {
    matcher: RequestMatcher,
}

impl SessionEndedRequestHandler {
    pub fn new() -> Self {
        Self {
            matcher: is_request_type(SESSION_ENDED_REQUEST),
        }
    }
}

impl Default for SessionEndedRequestHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestHandler for SessionEndedRequestHandler {
    fn name(&self) -> &str {
        "SessionEndedRequestHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        self.matcher.matches(input)
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        let request = input.request();
        info!(reason = request.reason.as_deref().unwrap_or("unknown"), "Session ended");
        if let Some(error) = &request.error {
            warn!(error_type = %error.error_type, "Session ended on error: {}", error.message);
        }
        Ok(input.response_builder().build())
    }
}
