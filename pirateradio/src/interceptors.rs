//! Logging interceptors
//!
//! Both interceptors serialize the envelope only when `DEBUG` is enabled for
//! this module, so they cost nothing at the default `INFO` level.

use crate::error::Result;
use crate::handler::{HandlerInput, RequestInterceptor, ResponseInterceptor};
use crate::models::Response;
use tracing::{Level, debug};

/// Logs every inbound envelope before dispatch
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingRequestInterceptor;

impl RequestInterceptor for LoggingRequestInterceptor {
    fn process(&self, input: &HandlerInput<'_>) -> Result<()> {
        if tracing::enabled!(Level::DEBUG) {
            let envelope = serde_json::to_string(input.request_envelope())?;
            debug!(request = %envelope, "Request received");
        }
        Ok(())
    }
}

/// Logs every outbound response
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingResponseInterceptor;

impl ResponseInterceptor for LoggingResponseInterceptor {
    fn process(&self, input: &HandlerInput<'_>, response: &Response) -> Result<()> {
        if tracing::enabled!(Level::DEBUG) {
            let body = serde_json::to_string(response)?;
            debug!(request = %input.request().describe(), response = %body, "Response sent");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Request, RequestEnvelope};
    use crate::response::ResponseBuilder;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_interceptors_at_debug_level() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let envelope = RequestEnvelope::new(Request::launch());
            let input = HandlerInput::new(&envelope);
            let response = ResponseBuilder::new().speak("Hello").build();

            assert!(LoggingRequestInterceptor.process(&input).is_ok());
            assert!(LoggingResponseInterceptor.process(&input, &response).is_ok());
        });
    }

    #[test]
    fn test_interceptors_without_subscriber() {
        let envelope = RequestEnvelope::new(Request::other("AudioPlayer.PlaybackStarted"));
        let input = HandlerInput::new(&envelope);
        assert!(LoggingRequestInterceptor.process(&input).is_ok());
        assert!(LoggingResponseInterceptor
            .process(&input, &Default::default())
            .is_ok());
    }
}
