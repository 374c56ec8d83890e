use super::{WELCOME_MESSAGE, help_message};
use crate::error::Result;
use crate::handler::{HandlerInput, RequestHandler, RequestMatcher, is_request_type};
use crate::models::{LAUNCH_REQUEST, Response};
use crate::registry::StationRegistry;
use tracing::info;

/// Skill opened without an intent: welcome the user and list the stations
#[derive(Debug, Clone)]
pub struct LaunchRequestHandler {
    matcher: RequestMatcher,
    help: String,
}

impl LaunchRequestHandler {
    pub fn new(registry: &StationRegistry) -> Self {
        Self {
            matcher: is_request_type(LAUNCH_REQUEST),
            help: help_message(registry),
        }
    }
}

impl RequestHandler for LaunchRequestHandler {
    fn name(&self) -> &str {
        "LaunchRequestHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        self.matcher.matches(input)
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        info!("In LaunchRequestHandler");
        Ok(input
            .response_builder()
            .speak(WELCOME_MESSAGE)
            .ask(&self.help)
            .build())
    }
}
