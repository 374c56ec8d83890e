use super::ERROR_MESSAGE;
use crate::error::Error;
use crate::handler::{ExceptionHandler, HandlerInput};
use crate::models::Response;
use tracing::{error, info};

/// Answers every error with the same apology and keeps the session open
#[derive(Debug, Default, Clone, Copy)]
pub struct CatchAllExceptionHandler;

impl ExceptionHandler for CatchAllExceptionHandler {
    fn can_handle(&self, _input: &HandlerInput<'_>, _error: &Error) -> bool {
        true
    }

    fn handle(&self, input: &HandlerInput<'_>, err: &Error) -> Response {
        info!(request = ?input.request(), "In CatchAllExceptionHandler");
        error!(error = ?err, "{}", err);

        input
            .response_builder()
            .speak(ERROR_MESSAGE)
            .ask(ERROR_MESSAGE)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Request, RequestEnvelope};

    #[test]
    fn test_apology_keeps_session_open() {
        let envelope = RequestEnvelope::new(Request::launch());
        let input = HandlerInput::new(&envelope);
        let err = Error::UnknownStation("radio nowhere".to_string());

        assert!(CatchAllExceptionHandler.can_handle(&input, &err));
        let response = CatchAllExceptionHandler.handle(&input, &err);
        assert_eq!(response.speech_text().as_deref(), Some(ERROR_MESSAGE));
        assert_eq!(response.reprompt_text().as_deref(), Some(ERROR_MESSAGE));
        assert_eq!(response.should_end_session, Some(false));
        assert!(response.directives.is_empty());
    }
}
