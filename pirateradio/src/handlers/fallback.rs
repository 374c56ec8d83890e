use super::{FALLBACK_INTENT, FALLBACK_MESSAGE, FALLBACK_REPROMPT};
use crate::error::Result;
use crate::handler::{HandlerInput, RequestHandler, RequestMatcher, is_intent_name};
use crate::models::Response;
use tracing::info;

#[derive(Debug, Clone)]
pub struct FallbackIntentHandler {
    matcher: RequestMatcher,
}

impl FallbackIntentHandler {
    pub fn new() -> Self {
        Self {
            matcher: is_intent_name(FALLBACK_INTENT),
        }
    }
}

impl Default for FallbackIntentHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestHandler for FallbackIntentHandler {
    fn name(&self) -> &str {
        "FallbackIntentHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        self.matcher.matches(input)
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        info!("In FallbackIntentHandler");
        Ok(input
            .response_builder()
            .speak(FALLBACK_MESSAGE)
            .ask(FALLBACK_REPROMPT)
            .build())
    }
}
