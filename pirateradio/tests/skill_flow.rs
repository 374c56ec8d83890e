//! End-to-end dispatch through the fully configured skill

use pirateradio::handlers::{ERROR_MESSAGE, GOODBYE_MESSAGE, STREAM_TOKEN, WELCOME_MESSAGE};
use pirateradio::models::{
    Intent, PlayBehavior, Request, RequestEnvelope, ResponseEnvelope, Slot,
};
use pirateradio::{Directive, Error, Skill, StationRegistry, help_message, skill_builder};
use serde_json::json;
use std::sync::Arc;

fn registry() -> Arc<StationRegistry> {
    Arc::new(
        StationRegistry::from_json_str(
            r#"{"kiss": "http://stream/kiss", "rix fm": "http://stream/rix"}"#,
        )
        .unwrap(),
    )
}

fn skill() -> Skill {
    skill_builder(registry()).build()
}

fn intent(name: &str) -> RequestEnvelope {
    RequestEnvelope::new(Request::intent(Intent::new(name)))
}

fn play(spoken: &str, resolved: Option<&str>) -> RequestEnvelope {
    let mut slot = Slot::new("station", spoken);
    if let Some(canonical) = resolved {
        slot = slot.resolved("amzn1.er-authority.stations", canonical);
    }
    RequestEnvelope::new(Request::intent(
        Intent::new("RadioPlayIntent").with_slot(slot),
    ))
}

fn invoke(envelope: &RequestEnvelope) -> ResponseEnvelope {
    skill().invoke(envelope).unwrap()
}

#[test]
fn test_launch() {
    let out = invoke(&RequestEnvelope::new(Request::launch())).response;
    assert_eq!(out.speech_text().as_deref(), Some(WELCOME_MESSAGE));
    assert_eq!(
        out.reprompt_text(),
        Some(help_message(&registry()))
    );
    assert_eq!(out.should_end_session, Some(false));
    assert!(out.directives.is_empty());
}

#[test]
fn test_help_lists_stations() {
    let out = invoke(&intent("AMAZON.HelpIntent")).response;
    let expected =
        "You can play kiss, or rix fm. Just say. Play. And the station you'd like to listen to.";
    assert_eq!(out.speech_text().as_deref(), Some(expected));
    assert_eq!(out.reprompt_text().as_deref(), Some(expected));
    assert_eq!(out.should_end_session, Some(false));
}

#[test]
fn test_stop_family_stops_audio() {
    for name in ["AMAZON.CancelIntent", "AMAZON.StopIntent", "AMAZON.PauseIntent"] {
        let out = invoke(&intent(name)).response;
        assert_eq!(out.speech_text().as_deref(), Some(GOODBYE_MESSAGE), "{}", name);
        assert_eq!(out.directives, vec![Directive::Stop], "{}", name);
        assert_eq!(out.should_end_session, Some(true), "{}", name);
    }
}

#[test]
fn test_fallback_keeps_session_open() {
    let out = invoke(&intent("AMAZON.FallbackIntent")).response;
    assert_eq!(
        out.speech_text().as_deref(),
        Some("Sorry. I cannot help with that.")
    );
    assert_eq!(
        out.reprompt_text().as_deref(),
        Some("What can I help you with?")
    );
    assert_eq!(out.should_end_session, Some(false));
}

#[test]
fn test_session_ended_gives_empty_response() {
    let out = invoke(&RequestEnvelope::new(Request::session_ended("USER_INITIATED"))).response;
    assert!(out.output_speech.is_none());
    assert!(out.reprompt.is_none());
    assert!(out.directives.is_empty());
    assert_eq!(out.should_end_session, None);
}

#[test]
fn test_play_known_station() {
    let out = invoke(&play("kis", Some("Kiss"))).response;
    assert_eq!(out.speech_text().as_deref(), Some("Kiss"));
    assert_eq!(out.should_end_session, Some(true));

    match out.directives.as_slice() {
        [Directive::Play {
            play_behavior,
            audio_item,
        }] => {
            assert_eq!(*play_behavior, PlayBehavior::ReplaceAll);
            assert_eq!(audio_item.stream.url, "http://stream/kiss");
            assert_eq!(audio_item.stream.token, STREAM_TOKEN);
            assert_eq!(audio_item.stream.offset_in_milliseconds, 0);
        }
        other => panic!("unexpected directives: {:?}", other),
    }
}

#[test]
fn test_play_station_with_spaces() {
    let out = invoke(&play("rix", Some("Rix FM"))).response;
    assert_eq!(
        out.play_stream().map(|s| s.url.as_str()),
        Some("http://stream/rix")
    );
}

#[test]
fn test_play_unknown_station_apologizes() {
    let out = invoke(&play("nowhere", Some("Radio Nowhere"))).response;
    assert_eq!(out.speech_text().as_deref(), Some(ERROR_MESSAGE));
    assert_eq!(out.reprompt_text().as_deref(), Some(ERROR_MESSAGE));
    assert_eq!(out.should_end_session, Some(false));
    assert!(out.directives.is_empty());
}

#[test]
fn test_play_unresolved_slot_apologizes() {
    let out = invoke(&play("kiss", None)).response;
    assert_eq!(out.speech_text().as_deref(), Some(ERROR_MESSAGE));
    assert_eq!(out.should_end_session, Some(false));
}

#[test]
fn test_unmatched_request_apologizes() {
    let out = invoke(&RequestEnvelope::new(Request::other(
        "AudioPlayer.PlaybackStarted",
    )))
    .response;
    assert_eq!(out.speech_text().as_deref(), Some(ERROR_MESSAGE));
    assert_eq!(out.should_end_session, Some(false));

    let out = invoke(&intent("AMAZON.NavigateHomeIntent")).response;
    assert_eq!(out.speech_text().as_deref(), Some(ERROR_MESSAGE));
}

#[test]
fn test_platform_json_round_trip() {
    let body = json!({
        "version": "1.0",
        "session": {
            "new": true,
            "sessionId": "amzn1.echo-api.session.1",
            "application": { "applicationId": "amzn1.ask.skill.pirate" }
        },
        "context": {
            "System": {
                "application": { "applicationId": "amzn1.ask.skill.pirate" }
            }
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.1",
            "timestamp": "2026-10-19T10:00:00Z",
            "locale": "en-US",
            "intent": {
                "name": "RadioPlayIntent",
                "confirmationStatus": "NONE",
                "slots": {
                    "station": {
                        "name": "station",
                        "value": "kiss",
                        "confirmationStatus": "NONE",
                        "resolutions": {
                            "resolutionsPerAuthority": [{
                                "authority": "amzn1.er-authority.echo-sdk.stations",
                                "status": { "code": "ER_SUCCESS_MATCH" },
                                "values": [{ "value": { "name": "kiss", "id": "1" } }]
                            }]
                        }
                    }
                }
            }
        }
    });

    let skill = skill_builder(registry())
        .with_skill_id("amzn1.ask.skill.pirate")
        .build();
    let out = serde_json::to_value(skill.invoke_json(body).unwrap()).unwrap();

    assert_eq!(out["version"], "1.0");
    assert_eq!(out["response"]["shouldEndSession"], true);
    assert_eq!(out["response"]["outputSpeech"]["type"], "SSML");
    assert_eq!(out["response"]["outputSpeech"]["ssml"], "<speak>kiss</speak>");

    let directive = &out["response"]["directives"][0];
    assert_eq!(directive["type"], "AudioPlayer.Play");
    assert_eq!(directive["playBehavior"], "REPLACE_ALL");
    assert_eq!(
        directive["audioItem"]["stream"],
        json!({
            "token": "this-is-the-audio-token",
            "url": "http://stream/kiss",
            "offsetInMilliseconds": 0
        })
    );
}

#[test]
fn test_foreign_skill_id_is_rejected() {
    let skill = skill_builder(registry())
        .with_skill_id("amzn1.ask.skill.pirate")
        .build();
    let envelope = RequestEnvelope::new(Request::launch()).with_application_id("amzn1.ask.skill.other");
    assert!(matches!(
        skill.invoke(&envelope),
        Err(Error::SkillIdMismatch { .. })
    ));
}
