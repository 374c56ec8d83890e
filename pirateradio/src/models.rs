//! Data models for the voice platform request and response envelopes
//!
//! Only the fields the skill reads or writes are modelled. Field names follow
//! the platform's JSON (camelCase, `type` tags), so envelopes round-trip
//! through `serde_json` unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version written in every response envelope
pub const RESPONSE_VERSION: &str = "1.0";

pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

// ============================================================================
// Request Envelope
// ============================================================================

/// Inbound request envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    pub request: Request,
}

impl RequestEnvelope {
    /// Wrap a request without session or context
    pub fn new(request: Request) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            session: None,
            context: None,
            request,
        }
    }

    /// Application id carried by the envelope
    ///
    /// `context.System.application` is preferred; `session.application` is
    /// used for requests sent outside of a context block.
    pub fn application_id(&self) -> Option<&str> {
        let from_context = self
            .context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .and_then(|s| s.application.as_ref());
        let from_session = self.session.as_ref().and_then(|s| s.application.as_ref());

        from_context
            .or(from_session)
            .map(|app| app.application_id.as_str())
    }

    /// Attach an application id to the envelope (context block)
    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.context = Some(Context {
            system: Some(SystemState {
                application: Some(Application {
                    application_id: application_id.into(),
                }),
            }),
        });
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Context {
    #[serde(rename = "System", default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemState>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
}

/// The `request` block of an envelope
///
/// Kept as a flat structure so request types the skill does not know about
/// (audio player events, display events...) still deserialize and keep their
/// type name for routing and logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Present on `IntentRequest`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Present on `SessionEndedRequest`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RequestError>,
}

impl Request {
    fn of_type(request_type: &str) -> Self {
        Self {
            request_type: request_type.to_string(),
            request_id: None,
            timestamp: None,
            locale: None,
            intent: None,
            reason: None,
            error: None,
        }
    }

    pub fn launch() -> Self {
        Self::of_type(LAUNCH_REQUEST)
    }

    pub fn intent(intent: Intent) -> Self {
        Self {
            intent: Some(intent),
            ..Self::of_type(INTENT_REQUEST)
        }
    }

    pub fn session_ended(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::of_type(SESSION_ENDED_REQUEST)
        }
    }

    /// Any other request type, e.g. `AudioPlayer.PlaybackStarted`
    pub fn other(request_type: impl Into<String>) -> Self {
        Self::of_type(&request_type.into())
    }

    /// Intent name when this is an `IntentRequest`
    pub fn intent_name(&self) -> Option<&str> {
        if self.request_type != INTENT_REQUEST {
            return None;
        }
        self.intent.as_ref().map(|i| i.name.as_str())
    }

    /// Short description for logs and errors: `IntentRequest(AMAZON.HelpIntent)`
    pub fn describe(&self) -> String {
        match self.intent_name() {
            Some(name) => format!("{}({})", self.request_type, name),
            None => self.request_type.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestError {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: BTreeMap<String, Slot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: BTreeMap::new(),
            confirmation_status: None,
        }
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.insert(slot.name.clone(), slot);
        self
    }
}

/// A named intent parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub name: String,
    /// Raw words as transcribed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<Resolutions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

impl Slot {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            resolutions: None,
            confirmation_status: None,
        }
    }

    /// Add a successful resolution from the given authority
    pub fn resolved(mut self, authority: impl Into<String>, canonical: impl Into<String>) -> Self {
        let resolution = Resolution {
            authority: authority.into(),
            status: ResolutionStatus {
                code: ResolutionStatus::SUCCESS.to_string(),
            },
            values: vec![ValueWrapper {
                value: SlotValue {
                    name: canonical.into(),
                    id: None,
                },
            }],
        };
        self.resolutions
            .get_or_insert_with(Resolutions::default)
            .resolutions_per_authority
            .push(resolution);
        self
    }

    /// Canonical value picked by the platform's synonym matching
    ///
    /// This is the first value of the first authority, the same entry the
    /// platform lists first. No match yields `None`.
    pub fn first_resolved_value(&self) -> Option<&str> {
        self.resolutions
            .as_ref()?
            .resolutions_per_authority
            .first()?
            .values
            .first()
            .map(|v| v.value.name.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resolutions {
    #[serde(default)]
    pub resolutions_per_authority: Vec<Resolution>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resolution {
    #[serde(default)]
    pub authority: String,
    pub status: ResolutionStatus,
    #[serde(default)]
    pub values: Vec<ValueWrapper>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionStatus {
    pub code: String,
}

impl ResolutionStatus {
    pub const SUCCESS: &'static str = "ER_SUCCESS_MATCH";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValueWrapper {
    pub value: SlotValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotValue {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Outbound response envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: Response,
}

impl ResponseEnvelope {
    pub fn new(response: Response) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            response,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

impl Response {
    /// Plain text of the output speech, SSML markup removed
    pub fn speech_text(&self) -> Option<String> {
        self.output_speech.as_ref().map(OutputSpeech::plain_text)
    }

    /// Plain text of the reprompt speech
    pub fn reprompt_text(&self) -> Option<String> {
        self.reprompt
            .as_ref()
            .map(|r| r.output_speech.plain_text())
    }

    /// Stream of the first `AudioPlayer.Play` directive, if any
    pub fn play_stream(&self) -> Option<&Stream> {
        self.directives.iter().find_map(|d| match d {
            Directive::Play { audio_item, .. } => Some(&audio_item.stream),
            Directive::Stop => None,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    /// Wrap text in a `<speak>` element, escaping XML special characters
    pub fn ssml(text: &str) -> Self {
        OutputSpeech::Ssml {
            ssml: format!("<speak>{}</speak>", escape_ssml(text)),
        }
    }

    /// Text content without the `<speak>` wrapper
    pub fn plain_text(&self) -> String {
        match self {
            OutputSpeech::PlainText { text } => text.clone(),
            OutputSpeech::Ssml { ssml } => {
                let inner = ssml
                    .trim()
                    .strip_prefix("<speak>")
                    .and_then(|s| s.strip_suffix("</speak>"))
                    .unwrap_or(ssml);
                unescape_ssml(inner)
            }
        }
    }
}

fn escape_ssml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape_ssml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Instruction for the client device
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "AudioPlayer.Play", rename_all = "camelCase")]
    Play {
        play_behavior: PlayBehavior,
        audio_item: AudioItem,
    },
    #[serde(rename = "AudioPlayer.Stop")]
    Stop,
}

impl Directive {
    /// Replace the whole queue with a stream starting at offset 0
    pub fn play(token: impl Into<String>, url: impl Into<String>) -> Self {
        Directive::Play {
            play_behavior: PlayBehavior::ReplaceAll,
            audio_item: AudioItem {
                stream: Stream {
                    token: token.into(),
                    url: url.into(),
                    offset_in_milliseconds: 0,
                },
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayBehavior {
    ReplaceAll,
    Enqueue,
    ReplaceEnqueued,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioItem {
    pub stream: Stream,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub token: String,
    pub url: String,
    pub offset_in_milliseconds: u64,
}
