//! Incremental response builder

use crate::models::{Directive, OutputSpeech, Reprompt, Response};

/// Builds a [`Response`] step by step
///
/// ```
/// use pirateradio::{Directive, ResponseBuilder};
///
/// let response = ResponseBuilder::new()
///     .speak("Goodbye")
///     .add_directive(Directive::Stop)
///     .set_should_end_session(true)
///     .build();
///
/// assert_eq!(response.speech_text().as_deref(), Some("Goodbye"));
/// assert_eq!(response.should_end_session, Some(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spoken output (wrapped in SSML)
    pub fn speak(mut self, speech: impl AsRef<str>) -> Self {
        self.response.output_speech = Some(OutputSpeech::ssml(speech.as_ref()));
        self
    }

    /// Set the reprompt and keep the session open
    pub fn ask(mut self, reprompt: impl AsRef<str>) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::ssml(reprompt.as_ref()),
        });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.response.directives.push(directive);
        self
    }

    pub fn set_should_end_session(mut self, should_end_session: bool) -> Self {
        self.response.should_end_session = Some(should_end_session);
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder() {
        assert_eq!(ResponseBuilder::new().build(), Response::default());
    }

    #[test]
    fn test_ask_keeps_session_open() {
        let response = ResponseBuilder::new().speak("Hello").ask("Again?").build();
        assert_eq!(response.speech_text().as_deref(), Some("Hello"));
        assert_eq!(response.reprompt_text().as_deref(), Some("Again?"));
        assert_eq!(response.should_end_session, Some(false));
    }

    #[test]
    fn test_directives_keep_order() {
        let response = ResponseBuilder::new()
            .add_directive(Directive::Stop)
            .add_directive(Directive::play("t", "http://stream"))
            .build();
        assert_eq!(response.directives.len(), 2);
        assert_eq!(response.directives[0], Directive::Stop);
        assert_eq!(response.play_stream().map(|s| s.url.as_str()), Some("http://stream"));
    }
}
