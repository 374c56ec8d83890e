use super::{RADIO_PLAY_INTENT, STATION_SLOT, STREAM_TOKEN};
use crate::error::{Error, Result};
use crate::handler::{HandlerInput, RequestHandler, RequestMatcher, is_intent_name};
use crate::models::{Directive, Response};
use crate::registry::StationRegistry;
use std::sync::Arc;
use tracing::info;

/// Starts the stream of the requested station
///
/// The station is read from the slot's synonym resolution rather than from
/// the raw words: spoken station names are rarely transcribed exactly, the
/// platform's resolution gives the canonical registry name.
#[derive(Debug, Clone)]
pub struct RadioPlayIntentHandler {
    matcher: RequestMatcher,
    registry: Arc<StationRegistry>,
}

impl RadioPlayIntentHandler {
    pub fn new(registry: Arc<StationRegistry>) -> Self {
        Self {
            matcher: is_intent_name(RADIO_PLAY_INTENT),
            registry,
        }
    }

    fn resolved_station<'a>(&self, input: &HandlerInput<'a>) -> Result<&'a str> {
        input
            .slot(STATION_SLOT)
            .and_then(|slot| slot.first_resolved_value())
            .ok_or_else(|| Error::UnresolvedSlot(STATION_SLOT.to_string()))
    }
}

impl RequestHandler for RadioPlayIntentHandler {
    fn name(&self) -> &str {
        "RadioPlayIntentHandler"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        self.matcher.matches(input)
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        let station = self.resolved_station(input)?;
        info!(station = %station, "In RadioPlayIntentHandler");

        let url = self.registry.lookup(station)?;

        Ok(input
            .response_builder()
            .speak(station)
            .add_directive(Directive::play(STREAM_TOKEN, url))
            .set_should_end_session(true)
            .build())
    }
}
