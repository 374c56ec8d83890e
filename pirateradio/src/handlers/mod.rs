//! Intent handlers of the Pirate Radio skill
//!
//! | Handler | Matches | Ends session |
//! |---|---|---|
//! | [`LaunchRequestHandler`] | `LaunchRequest` | no |
//! | [`HelpIntentHandler`] | `AMAZON.HelpIntent` | no |
//! | [`AudioStopIntentHandler`] | `AMAZON.CancelIntent`, `AMAZON.StopIntent`, `AMAZON.PauseIntent` | yes |
//! | [`SessionEndedRequestHandler`] | `SessionEndedRequest` | (empty response) |
//! | [`FallbackIntentHandler`] | `AMAZON.FallbackIntent` | no |
//! | [`RadioPlayIntentHandler`] | `RadioPlayIntent` | yes |
//!
//! Any error, including "no handler matched", ends up in
//! [`CatchAllExceptionHandler`].

mod exception;
mod fallback;
mod help;
mod launch;
mod play;
mod session_ended;
mod stop;

pub use exception::CatchAllExceptionHandler;
pub use fallback::FallbackIntentHandler;
pub use help::HelpIntentHandler;
pub use launch::LaunchRequestHandler;
pub use play::RadioPlayIntentHandler;
pub use session_ended::SessionEndedRequestHandler;
pub use stop::AudioStopIntentHandler;

use crate::interceptors::{LoggingRequestInterceptor, LoggingResponseInterceptor};
use crate::registry::StationRegistry;
use crate::skill::SkillBuilder;
use std::sync::Arc;

pub const RADIO_PLAY_INTENT: &str = "RadioPlayIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const PAUSE_INTENT: &str = "AMAZON.PauseIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

/// Slot carrying the requested station
pub const STATION_SLOT: &str = "station";

/// Token attached to every stream; the skill does not track playback
pub const STREAM_TOKEN: &str = "this-is-the-audio-token";

pub const WELCOME_MESSAGE: &str = "Welcome to pirate radio. Choose radio station";
pub const GOODBYE_MESSAGE: &str = "Goodbye";
pub const FALLBACK_MESSAGE: &str = "Sorry. I cannot help with that.";
pub const FALLBACK_REPROMPT: &str = "What can I help you with?";
pub const ERROR_MESSAGE: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// Help sentence listing every station of the registry
pub fn help_message(registry: &StationRegistry) -> String {
    format!(
        "You can play {}. Just say. Play. And the station you'd like to listen to.",
        registry.help_text()
    )
}

/// Builder pre-loaded with the skill's handlers, exception handler and
/// logging interceptors
///
/// Handlers are registered in this order: launch, help, stop, session ended,
/// fallback, play. The caller may still set a skill id before building.
pub fn skill_builder(registry: Arc<StationRegistry>) -> SkillBuilder {
    SkillBuilder::new()
        .add_request_handler(LaunchRequestHandler::new(&registry))
        .add_request_handler(HelpIntentHandler::new(&registry))
        .add_request_handler(AudioStopIntentHandler::new())
        .add_request_handler(SessionEndedRequestHandler::new())
        .add_request_handler(FallbackIntentHandler::new())
        .add_request_handler(RadioPlayIntentHandler::new(registry))
        .add_exception_handler(CatchAllExceptionHandler)
        .add_global_request_interceptor(LoggingRequestInterceptor)
        .add_global_response_interceptor(LoggingResponseInterceptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_message() {
        let registry =
            StationRegistry::from_entries([("a", "http://urlA"), ("b", "http://urlB")]).unwrap();
        assert_eq!(
            help_message(&registry),
            "You can play a, or b. Just say. Play. And the station you'd like to listen to."
        );
    }

    #[test]
    fn test_skill_builder_registration_order() {
        let registry = Arc::new(StationRegistry::default());
        let skill = skill_builder(registry).build();
        assert_eq!(
            skill.handler_names(),
            vec![
                "LaunchRequestHandler",
                "HelpIntentHandler",
                "AudioStopIntentHandler",
                "SessionEndedRequestHandler",
                "FallbackIntentHandler",
                "RadioPlayIntentHandler",
            ]
        );
    }
}
