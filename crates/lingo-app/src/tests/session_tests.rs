use lingo_translator::{ProviderError, TransportCode, TranslateError};

use super::support::{FakeProvider, session_with};
use crate::session::{SessionError, describe_failure};

#[tokio::test]
async fn empty_input_never_reaches_providers() {
    let (provider, calls) = FakeProvider::ok("a", "Hola");
    let mut session = session_with(vec![provider], "es");

    for input in ["", "   ", "\n\t"] {
        session.set_input(input.to_string());
        let err = session.translate_text().await.unwrap_err();
        assert!(matches!(err, SessionError::EmptyInput));
        assert_eq!(err.user_message(), "Please enter some text to translate");
        assert_eq!(err.title(), "Error");
    }

    assert_eq!(calls.get(), 0);
    assert!(!session.state().is_loading);
}

#[tokio::test]
async fn falls_back_and_records_history() {
    let timeout = ProviderError::new("timeout of 10000ms exceeded").with_code(TransportCode::Timeout);
    let (a, _) = FakeProvider::failing("google", timeout);
    let (b, _) = FakeProvider::ok("mymemory", "Hola");
    let mut session = session_with(vec![a, b], "es");

    session.set_input("Hello".to_string());
    let record = session.translate_text().await.unwrap();

    assert_eq!(record.original, "Hello");
    assert_eq!(record.translated, "Hola");
    assert_eq!(record.language, "Spanish");

    let state = session.state();
    assert_eq!(state.translated_text, "Hola");
    assert!(!state.is_loading);
    assert_eq!(state.history, vec![record]);
}

#[tokio::test]
async fn blank_primary_result_uses_fallback() {
    let (a, a_calls) = FakeProvider::ok("google", "");
    let (b, b_calls) = FakeProvider::ok("mymemory", "Bonjour");
    let mut session = session_with(vec![a, b], "fr");

    session.set_input("Hi".to_string());
    let record = session.translate_text().await.unwrap();

    assert_eq!(record.translated, "Bonjour");
    assert_eq!(record.language, "French");
    assert_eq!((a_calls.get(), b_calls.get()), (1, 1));
}

#[tokio::test]
async fn eleven_translations_keep_ten_newest() {
    let (provider, _) = FakeProvider::ok("a", "ok");
    let mut session = session_with(vec![provider], "de");

    for n in 1..=11 {
        session.set_input(format!("text {n}"));
        session.translate_text().await.unwrap();
    }

    let originals: Vec<_> = session
        .state()
        .history
        .iter()
        .map(|r| r.original.clone())
        .collect();
    let expected: Vec<_> = (2..=11).rev().map(|n| format!("text {n}")).collect();
    assert_eq!(originals, expected);

    // Reloading from storage gives the same view
    assert_eq!(session.load_history().await.len(), 10);
}

#[tokio::test]
async fn failure_surfaces_last_error_and_keeps_state() {
    let (a, _) = FakeProvider::failing("google", ProviderError::new("first failure"));
    let (b, _) = FakeProvider::failing(
        "mymemory",
        ProviderError::new("Request failed with status code 429").with_status(429),
    );
    let mut session = session_with(vec![a, b], "es");

    session.set_input("Hello".to_string());
    let err = session.translate_text().await.unwrap_err();

    assert_eq!(err.title(), "Translation Error");
    assert_eq!(err.user_message(), "Request failed with status code 429");
    assert!(!session.state().is_loading);
    assert!(session.state().history.is_empty());
    assert!(session.state().translated_text.is_empty());
}

#[tokio::test]
async fn no_usable_result_reports_unavailable() {
    let (a, _) = FakeProvider::ok("a", "  ");
    let mut session = session_with(vec![a], "es");

    session.set_input("Hello".to_string());
    let err = session.translate_text().await.unwrap_err();

    assert!(matches!(
        err,
        SessionError::Translation(TranslateError::Unavailable)
    ));
    assert!(err.user_message().starts_with("All translation services are currently unavailable"));
}

#[test]
fn failure_message_priority() {
    let explicit = ProviderError::new("boom")
        .with_code(TransportCode::Network)
        .with_status(429);
    assert_eq!(describe_failure(&explicit), "boom");

    let network = ProviderError::new("").with_code(TransportCode::Timeout).with_status(429);
    assert_eq!(
        describe_failure(&network),
        "Network error. Please check your internet connection and try again."
    );

    let rate_limited = ProviderError::new("").with_status(429);
    assert_eq!(
        describe_failure(&rate_limited),
        "Too many requests. Please wait a moment and try again."
    );

    let decode = ProviderError::new("").with_code(TransportCode::Decode);
    assert_eq!(
        describe_failure(&decode),
        "Failed to translate text. Please try again."
    );
}

#[tokio::test]
async fn select_language_rejects_unknown_codes() {
    let mut session = session_with(vec![], "en");

    assert_eq!(session.select_language("ja").map(|l| l.name.clone()), Some("Japanese".to_string()));
    assert!(session.select_language("klingon").is_none());
    assert_eq!(session.state().selected_language.code, "ja");
}

#[tokio::test]
async fn clear_text_keeps_history_and_clear_history_empties_it() {
    let (provider, _) = FakeProvider::ok("a", "Ciao");
    let mut session = session_with(vec![provider], "it");

    session.set_input("Hello".to_string());
    session.translate_text().await.unwrap();

    session.clear_text();
    assert!(session.state().input_text.is_empty());
    assert!(session.state().translated_text.is_empty());
    assert_eq!(session.state().history.len(), 1);

    assert!(session.clear_history().await.is_empty());
    assert!(session.load_history().await.is_empty());
}

#[tokio::test]
async fn copy_and_speak_are_notices_only() {
    let session = session_with(vec![], "es");

    assert_eq!(
        session.copy_to_clipboard("Hola"),
        "Copied! Text copied to clipboard"
    );
    assert_eq!(session.speak(""), "Nothing to speak");
    assert_eq!(session.speak("Hola"), "Speaking (Spanish): Hola");
}
