use super::{HELP_INTENT, help_message};
use crate::error::Result;
use crate::handler::{HandlerInput, RequestHandler, RequestMatcher, is_intent_name};
use crate::models::Response;
use crate::registry::StationRegistry;

#[derive(Debug, Clone)]
pub struct HelpIntentHandler {
    matcher: RequestMatcher,
    help: String,
}

impl HelpIntentHandler {
    pub fn new(registry: &StationRegistry) -> Self {
        Self {
            matcher: is_intent_name(HELP_INTENT),
            help: help_message(registry),
        }
    }
}

impl RequestHandler for HelpIntentHandler {
    fn name(&self) -> &str {
        "HelpIntentHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        self.matcher.matches(input)
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        Ok(input
            .response_builder()
            .speak(&self.help)
            .ask(&self.help)
            .build())
    }
}
