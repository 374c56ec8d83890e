//! Pirate Radio skill library
//!
//! Backend of a voice assistant skill that plays internet radio stations.
//! The voice platform sends a JSON request envelope; the skill picks the
//! first matching intent handler and answers with speech and, for the play
//! and stop intents, an audio player directive.
//!
//! # Features
//!
//! - **Envelope models**: request/response envelopes with the platform's
//!   JSON field names ([`models`])
//! - **Station Registry**: case-insensitive station name to stream URL
//!   lookup, loaded once ([`StationRegistry`])
//! - **Dispatcher**: ordered handlers, catch-all exception handling and
//!   logging interceptors ([`Skill`], [`SkillBuilder`])
//! - **Configuration Extension**: station file and skill id from
//!   `pirateconfig` ([`SkillConfigExt`])
//!
//! # Example
//!
//! ```
//! use pirateradio::models::{Intent, Request, RequestEnvelope, Slot};
//! use pirateradio::{StationRegistry, skill_builder};
//! use std::sync::Arc;
//!
//! let registry = StationRegistry::from_json_str(r#"{"kiss": "https://stream/kiss"}"#)?;
//! let skill = skill_builder(Arc::new(registry)).build();
//!
//! let request = Request::intent(
//!     Intent::new("RadioPlayIntent")
//!         .with_slot(Slot::new("station", "kis").resolved("stations", "Kiss")),
//! );
//! let envelope = skill.invoke(&RequestEnvelope::new(request))?;
//!
//! let stream = envelope.response.play_stream().unwrap();
//! assert_eq!(stream.url, "https://stream/kiss");
//! # Ok::<(), pirateradio::Error>(())
//! ```

pub mod error;
pub mod handler;
pub mod handlers;
pub mod interceptors;
pub mod models;
pub mod registry;
pub mod response;
pub mod skill;

#[cfg(feature = "pirateconfig")]
pub mod config_ext;

// Re-exports
pub use error::{Error, Result};
pub use handler::{
    ExceptionHandler, HandlerInput, RequestHandler, RequestInterceptor, RequestMatcher,
    ResponseInterceptor, is_any_intent_name, is_intent_name, is_request_type,
};
pub use handlers::{help_message, skill_builder};
pub use interceptors::{LoggingRequestInterceptor, LoggingResponseInterceptor};
pub use models::{Directive, RequestEnvelope, Response, ResponseEnvelope};
pub use registry::{Station, StationRegistry};
pub use response::ResponseBuilder;
pub use skill::{Skill, SkillBuilder};

#[cfg(feature = "pirateconfig")]
pub use config_ext::SkillConfigExt;
