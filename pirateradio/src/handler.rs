//! Dispatch traits and request matchers
//!
//! A skill is assembled from four kinds of components:
//!
//! - [`RequestHandler`]: predicate (`can_handle`) + action (`handle`)
//! - [`ExceptionHandler`]: turns a dispatch error into a response
//! - [`RequestInterceptor`] / [`ResponseInterceptor`]: observability hooks
//!   around the selected handler
//!
//! Handlers usually delegate their predicate to a [`RequestMatcher`].
//!
//! # Thread Safety
//!
//! All components must be `Send + Sync` so a built skill can be shared
//! between HTTP workers.

use crate::error::{Error, Result};
use crate::models::{Request, RequestEnvelope, Response, Slot};
use crate::response::ResponseBuilder;

/// Read-only view of the request being dispatched
#[derive(Debug, Clone, Copy)]
pub struct HandlerInput<'a> {
    envelope: &'a RequestEnvelope,
}

impl<'a> HandlerInput<'a> {
    pub fn new(envelope: &'a RequestEnvelope) -> Self {
        Self { envelope }
    }

    pub fn request_envelope(&self) -> &'a RequestEnvelope {
        self.envelope
    }

    pub fn request(&self) -> &'a Request {
        &self.envelope.request
    }

    pub fn request_type(&self) -> &'a str {
        &self.envelope.request.request_type
    }

    pub fn intent_name(&self) -> Option<&'a str> {
        self.envelope.request.intent_name()
    }

    /// Slot of the current intent
    pub fn slot(&self, name: &str) -> Option<&'a Slot> {
        self.envelope.request.intent.as_ref()?.slots.get(name)
    }

    /// Fresh builder for this request's response
    pub fn response_builder(&self) -> ResponseBuilder {
        ResponseBuilder::new()
    }
}

/// Predicate over a request envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMatcher {
    /// `request.type` equals the value
    RequestType(String),
    /// `IntentRequest` whose intent name equals the value
    IntentName(String),
    /// Any of the inner matchers
    AnyOf(Vec<RequestMatcher>),
}

impl RequestMatcher {
    pub fn matches(&self, input: &HandlerInput<'_>) -> bool {
        match self {
            RequestMatcher::RequestType(t) => input.request_type() == t.as_str(),
            RequestMatcher::IntentName(n) => input.intent_name() == Some(n.as_str()),
            RequestMatcher::AnyOf(matchers) => matchers.iter().any(|m| m.matches(input)),
        }
    }

    /// Combine with another matcher
    pub fn or(self, other: RequestMatcher) -> Self {
        match self {
            RequestMatcher::AnyOf(mut matchers) => {
                matchers.push(other);
                RequestMatcher::AnyOf(matchers)
            }
            first => RequestMatcher::AnyOf(vec![first, other]),
        }
    }
}

pub fn is_request_type(request_type: impl Into<String>) -> RequestMatcher {
    RequestMatcher::RequestType(request_type.into())
}

pub fn is_intent_name(intent_name: impl Into<String>) -> RequestMatcher {
    RequestMatcher::IntentName(intent_name.into())
}

/// Matches any of the given intent names
pub fn is_any_intent_name<I, S>(intent_names: I) -> RequestMatcher
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    RequestMatcher::AnyOf(intent_names.into_iter().map(is_intent_name).collect())
}

/// A request handler: a predicate and the action producing the response
pub trait RequestHandler: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Whether this handler accepts the request
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool;

    /// Produce the response. Errors are routed to the exception handlers.
    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response>;
}

/// Converts a dispatch error into a response
pub trait ExceptionHandler: Send + Sync {
    fn can_handle(&self, input: &HandlerInput<'_>, error: &Error) -> bool;

    fn handle(&self, input: &HandlerInput<'_>, error: &Error) -> Response;
}

/// Runs before the request handler
pub trait RequestInterceptor: Send + Sync {
    fn process(&self, input: &HandlerInput<'_>) -> Result<()>;
}

/// Runs after a response has been produced
pub trait ResponseInterceptor: Send + Sync {
    fn process(&self, input: &HandlerInput<'_>, response: &Response) -> Result<()>;
}
