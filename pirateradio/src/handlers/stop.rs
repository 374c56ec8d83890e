use super::{CANCEL_INTENT, GOODBYE_MESSAGE, PAUSE_INTENT, STOP_INTENT};
use crate::error::Result;
use crate::handler::{HandlerInput, RequestHandler, RequestMatcher, is_any_intent_name};
use crate::models::{Directive, Response};

/// Cancel, stop and pause all stop the stream and close the session
#[derive(Debug, Clone)]
pub struct AudioStopIntentHandler {
    matcher: RequestMatcher,
}

impl AudioStopIntentHandler {
    pub fn new() -> Self {
        Self {
            matcher: is_any_intent_name([CANCEL_INTENT, STOP_INTENT, PAUSE_INTENT]),
        }
    }
}

impl Default for AudioStopIntentHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestHandler for AudioStopIntentHandler {
    fn name(&self) -> &str {
        "AudioStopIntentHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        self.matcher.matches(input)
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        Ok(input
            .response_builder()
            .speak(GOODBYE_MESSAGE)
            .add_directive(Directive::Stop)
            .set_should_end_session(true)
            .build())
    }
}
