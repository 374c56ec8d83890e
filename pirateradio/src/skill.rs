//! Request dispatcher
//!
//! A [`Skill`] owns an ordered list of request handlers, the exception
//! handlers and the global interceptors. [`Skill::invoke`] runs one request
//! through them:
//!
//! 1. skill id verification (when configured)
//! 2. request interceptors
//! 3. first handler whose `can_handle` returns true, or
//!    [`Error::NoHandlerMatched`]
//! 4. on error, first exception handler accepting it
//! 5. response interceptors
//!
//! Interceptor failures are logged and never change the response.

use crate::error::{Error, Result};
use crate::handler::{
    ExceptionHandler, HandlerInput, RequestHandler, RequestInterceptor, ResponseInterceptor,
};
use crate::models::{RequestEnvelope, Response, ResponseEnvelope};
use std::fmt;
use tracing::{debug, info_span, warn};

/// Collects the components of a [`Skill`]
///
/// Registration order is dispatch order.
#[derive(Default)]
pub struct SkillBuilder {
    skill_id: Option<String>,
    request_handlers: Vec<Box<dyn RequestHandler>>,
    exception_handlers: Vec<Box<dyn ExceptionHandler>>,
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
}

impl SkillBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject envelopes whose application id differs from `skill_id`
    pub fn with_skill_id(mut self, skill_id: impl Into<String>) -> Self {
        self.skill_id = Some(skill_id.into());
        self
    }

    pub fn add_request_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.request_handlers.push(Box::new(handler));
        self
    }

    pub fn add_exception_handler(mut self, handler: impl ExceptionHandler + 'static) -> Self {
        self.exception_handlers.push(Box::new(handler));
        self
    }

    pub fn add_global_request_interceptor(
        mut self,
        interceptor: impl RequestInterceptor + 'static,
    ) -> Self {
        self.request_interceptors.push(Box::new(interceptor));
        self
    }

    pub fn add_global_response_interceptor(
        mut self,
        interceptor: impl ResponseInterceptor + 'static,
    ) -> Self {
        self.response_interceptors.push(Box::new(interceptor));
        self
    }

    pub fn build(self) -> Skill {
        Skill {
            skill_id: self.skill_id,
            request_handlers: self.request_handlers,
            exception_handlers: self.exception_handlers,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        }
    }
}

/// Immutable, shareable request dispatcher
pub struct Skill {
    skill_id: Option<String>,
    request_handlers: Vec<Box<dyn RequestHandler>>,
    exception_handlers: Vec<Box<dyn ExceptionHandler>>,
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
}

impl fmt::Debug for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Skill")
            .field("skill_id", &self.skill_id)
            .field("request_handlers", &self.handler_names())
            .field("exception_handlers", &self.exception_handlers.len())
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .finish()
    }
}

impl Skill {
    pub fn builder() -> SkillBuilder {
        SkillBuilder::new()
    }

    pub fn skill_id(&self) -> Option<&str> {
        self.skill_id.as_deref()
    }

    /// Names of the request handlers, in dispatch order
    pub fn handler_names(&self) -> Vec<&str> {
        self.request_handlers.iter().map(|h| h.name()).collect()
    }

    /// Parse a raw JSON envelope and dispatch it
    pub fn invoke_json(&self, value: serde_json::Value) -> Result<ResponseEnvelope> {
        let envelope: RequestEnvelope = serde_json::from_value(value)?;
        self.invoke(&envelope)
    }

    /// Dispatch one request envelope
    ///
    /// Only two errors leave this method: a skill id mismatch, and an error
    /// no exception handler accepted (wrapped in [`Error::Unhandled`]).
    pub fn invoke(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope> {
        let span = info_span!(
            "skill_request",
            request = %envelope.request.describe(),
            request_id = envelope.request.request_id.as_deref().unwrap_or("-"),
        );
        let _guard = span.enter();

        self.verify_skill_id(envelope)?;

        let input = HandlerInput::new(envelope);

        for interceptor in &self.request_interceptors {
            if let Err(err) = interceptor.process(&input) {
                warn!("Request interceptor failed: {}", err);
            }
        }

        let response = match self.dispatch(&input) {
            Ok(response) => response,
            Err(err) => self.handle_error(&input, err)?,
        };

        for interceptor in &self.response_interceptors {
            if let Err(err) = interceptor.process(&input, &response) {
                warn!("Response interceptor failed: {}", err);
            }
        }

        Ok(ResponseEnvelope::new(response))
    }

    fn verify_skill_id(&self, envelope: &RequestEnvelope) -> Result<()> {
        let Some(expected) = &self.skill_id else {
            return Ok(());
        };

        match envelope.application_id() {
            Some(received) if received == expected.as_str() => Ok(()),
            received => Err(Error::SkillIdMismatch {
                expected: expected.clone(),
                received: received.map(str::to_string),
            }),
        }
    }

    fn dispatch(&self, input: &HandlerInput<'_>) -> Result<Response> {
        let handler = self
            .request_handlers
            .iter()
            .find(|h| h.can_handle(input))
            .ok_or_else(|| Error::NoHandlerMatched(input.request().describe()))?;

        debug!(handler = handler.name(), "Handler selected");
        handler.handle(input)
    }

    fn handle_error(&self, input: &HandlerInput<'_>, err: Error) -> Result<Response> {
        match self
            .exception_handlers
            .iter()
            .find(|h| h.can_handle(input, &err))
        {
            Some(handler) => Ok(handler.handle(input, &err)),
            None => Err(Error::Unhandled(Box::new(err))),
        }
    }
}
