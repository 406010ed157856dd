use dnalens_client::{AnalysisBackend, AnalysisRequest, ClientError, ClientConfig, HttpAnalysisClient};
use dnalens_core::{validate_sequence, AnalysisReport, ResultSource};
use dnalens_session::{
    ChatSession, CredentialStore, MessageKind, Session, SqliteCredentialStore, VOICE_TRANSCRIPT,
};
use pretty_assertions::assert_eq;

struct Unreachable;

impl AnalysisBackend for Unreachable {
    fn analyze(&self, _request: &AnalysisRequest<'_>) -> Result<AnalysisReport, ClientError> {
        Err(ClientError::Remote("service unavailable".into()))
    }
}

const PROMOTER: &str = ">promoter sample\nGCGCGCGCTATAAAAGGCGCGCAATTGGCCGCGCGCGTATAAAGGGCGCGCGCATATATGCGCGCGCAT\n";

#[test]
fn test_fallback_session_with_persistent_key() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("dnalens.db");

    let mut store = SqliteCredentialStore::open(&db).unwrap();
    store.set("AIza-example").unwrap();
    drop(store);

    let store = SqliteCredentialStore::open(&db).unwrap();
    let mut session = Session::new(Unreachable, store);
    assert_eq!(session.api_key().as_deref(), Some("AIza-example"));

    let validation = validate_sequence(PROMOTER);
    assert!(validation.is_valid);
    assert!(validation.was_fasta);

    let outcome = session.analyze(&validation).unwrap();
    assert!(outcome.is_fallback());
    assert_eq!(outcome.fallback_reason(), Some("Analysis service error: service unavailable"));
    assert_eq!(outcome.result().source, ResultSource::Fallback);
    assert_eq!(outcome.result().sequence, validation.cleaned_sequence);

    let mut chat = ChatSession::new();
    chat.send_voice().unwrap();
    assert!(session.add_note(VOICE_TRANSCRIPT));
    assert_eq!(chat.messages()[1].kind, MessageKind::Voice);
    assert_eq!(session.history().latest().unwrap().voice_notes.len(), 1);
}

#[test]
fn test_gemini_without_key_degrades_to_fallback() {
    let client = HttpAnalysisClient::new(ClientConfig::default()).unwrap();
    let store = SqliteCredentialStore::open_in_memory().unwrap();
    let mut session = Session::new(client, store);

    let outcome = session.analyze(&validate_sequence(PROMOTER)).unwrap();
    assert!(outcome.is_fallback());
    assert_eq!(outcome.fallback_reason(), Some("No API key configured"));
    assert_eq!(session.history().len(), 1);
}
