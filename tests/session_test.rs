use tunescope::session::*;
use tunescope::types::TokenResponse;

// Helper to build token endpoint payloads
fn token_response(access: &str, refresh: Option<&str>, expires_in: i64) -> TokenResponse {
    TokenResponse {
        access_token: access.to_string(),
        refresh_token: refresh.map(|token| token.to_string()),
        expires_in,
        scope: None,
    }
}

#[test]
fn test_exchange_populates_session() {
    let response = token_response("access-1", Some("refresh-1"), 3600);
    let session = Session::from_token_response(&response, 1_000);

    assert_eq!(session.access_token, "access-1");
    assert_eq!(session.refresh_token, "refresh-1");
    assert_eq!(session.expires_at, 4_600);
}

#[test]
fn test_refresh_replaces_access_token_and_expiry() {
    let session = Session::from_token_response(&token_response("old", Some("r"), 60), 0);
    let refreshed = session.refreshed(&token_response("new", Some("r2"), 120), 500);

    assert_eq!(refreshed.access_token, "new");
    assert_eq!(refreshed.refresh_token, "r2");
    assert_eq!(refreshed.expires_at, 620);
}

#[test]
fn test_refresh_keeps_stored_refresh_token_when_omitted() {
    let session = Session::from_token_response(&token_response("old", Some("keep-me"), 60), 0);
    let refreshed = session.refreshed(&token_response("new", None, 120), 500);

    assert_eq!(refreshed.access_token, "new");
    assert_eq!(refreshed.refresh_token, "keep-me");
}

#[test]
fn test_token_state_boundary() {
    let session = Session::from_token_response(&token_response("a", Some("r"), 100), 0);

    // Valid up to and including the expiry instant
    assert_eq!(session.token_state(99), TokenState::Valid);
    assert_eq!(session.token_state(100), TokenState::Valid);
    assert_eq!(session.token_state(101), TokenState::Expired);
}

#[test]
fn test_gate_decisions() {
    assert_eq!(gate(None, 0), Gate::Login);

    let session = Session::from_token_response(&token_response("tok", Some("r"), 10), 0);
    assert_eq!(gate(Some(&session), 5), Gate::Proceed("tok".to_string()));
    assert_eq!(gate(Some(&session), 11), Gate::Refresh);
}

#[test]
fn test_gate_expired_session_never_proceeds() {
    let session = Session::from_token_response(&token_response("tok", Some("r"), 100), 0);

    for now in [101, 1_000, i64::MAX] {
        assert_eq!(gate(Some(&session), now), Gate::Refresh);
    }
}

#[test]
fn test_session_cookie_contents() {
    let cookie = build_session_cookie("abc123");

    assert!(cookie.starts_with("session_id=abc123"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
}

#[test]
fn test_extract_cookie_value() {
    let header = "theme=dark; session_id=abc123; lang=en";

    assert_eq!(
        extract_cookie_value(header, SESSION_COOKIE),
        Some("abc123".to_string())
    );
    assert_eq!(extract_cookie_value("theme=dark", SESSION_COOKIE), None);
    assert_eq!(extract_cookie_value("", SESSION_COOKIE), None);
}

#[tokio::test]
async fn test_session_store_lifecycle() {
    let store = SessionStore::new();
    assert!(store.get("missing").await.is_none());

    let session = Session::from_token_response(&token_response("a", Some("r"), 10), 0);
    store.insert("sid".to_string(), session).await;
    assert_eq!(store.get("sid").await.map(|s| s.access_token).as_deref(), Some("a"));

    store.remove("sid").await;
    assert!(store.get("sid").await.is_none());
}
