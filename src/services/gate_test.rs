use super::*;
use crate::state::test_helpers::{ADMIN_TOKEN, MockApi, USER_TOKEN};

// =============================================================================
// present
// =============================================================================

#[test]
fn present_filters_missing_and_empty() {
    assert_eq!(present(None), None);
    assert_eq!(present(Some("")), None);
    assert_eq!(present(Some("abc")), Some("abc"));
}

// =============================================================================
// Public
// =============================================================================

#[tokio::test]
async fn public_without_token_is_allowed() {
    let api = MockApi::seeded();
    assert_eq!(decide(&api, None, Capability::Public).await, AuthDecision::Allow(None));
    assert_eq!(decide(&api, Some(""), Capability::Public).await, AuthDecision::Allow(None));
}

#[tokio::test]
async fn public_with_any_token_redirects_home() {
    let api = MockApi::seeded();
    for token in [USER_TOKEN, "tok-unknown", " "] {
        assert_eq!(decide(&api, Some(token), Capability::Public).await, AuthDecision::RedirectHome);
    }
}

#[tokio::test]
async fn public_never_calls_the_api() {
    let api = MockApi::seeded();
    let _ = decide(&api, Some(USER_TOKEN), Capability::Public).await;
    let _ = decide(&api, None, Capability::Public).await;
    assert!(api.calls().is_empty());
}

// =============================================================================
// Authenticated
// =============================================================================

#[tokio::test]
async fn authenticated_without_token_redirects_sign_in() {
    let api = MockApi::seeded();
    for token in [None, Some("")] {
        let decision = decide(&api, token, Capability::Authenticated).await;
        assert_eq!(decision, AuthDecision::RedirectSignIn { clear_token: false });
    }
    assert!(api.calls().is_empty(), "no token means no validation call");
}

#[tokio::test]
async fn authenticated_with_valid_token_carries_profile() {
    let api = MockApi::seeded();
    match decide(&api, Some(USER_TOKEN), Capability::Authenticated).await {
        AuthDecision::Allow(Some(profile)) => assert_eq!(profile.name, "Ada"),
        other => panic!("expected allow, got {other:?}"),
    }
    assert_eq!(api.calls(), vec!["profile"]);
}

#[tokio::test]
async fn authenticated_with_rejected_token_clears_it() {
    let api = MockApi::seeded();
    let decision = decide(&api, Some("tok-expired"), Capability::Authenticated).await;
    assert_eq!(decision, AuthDecision::RedirectSignIn { clear_token: true });
}

#[tokio::test]
async fn authenticated_network_failure_fails_closed() {
    let api = MockApi::seeded().offline();
    let decision = decide(&api, Some(USER_TOKEN), Capability::Authenticated).await;
    assert_eq!(decision, AuthDecision::RedirectSignIn { clear_token: false });
}

// =============================================================================
// Admin
// =============================================================================

#[tokio::test]
async fn admin_without_token_redirects_sign_in() {
    let api = MockApi::seeded();
    let decision = decide(&api, None, Capability::Admin).await;
    assert!(matches!(decision, AuthDecision::RedirectSignIn { .. }));
}

#[tokio::test]
async fn admin_non_admin_profile_redirects_root() {
    let api = MockApi::seeded();
    assert_eq!(decide(&api, Some(USER_TOKEN), Capability::Admin).await, AuthDecision::RedirectRoot);
}

#[tokio::test]
async fn admin_profile_is_allowed() {
    let api = MockApi::seeded();
    match decide(&api, Some(ADMIN_TOKEN), Capability::Admin).await {
        AuthDecision::Allow(Some(profile)) => assert!(profile.is_admin),
        other => panic!("expected allow, got {other:?}"),
    }
}

#[tokio::test]
async fn admin_network_failure_redirects_sign_in() {
    let api = MockApi::seeded().offline();
    let decision = decide(&api, Some(ADMIN_TOKEN), Capability::Admin).await;
    assert_eq!(decision, AuthDecision::RedirectSignIn { clear_token: false });
}

#[tokio::test]
async fn admin_with_rejected_token_redirects_sign_in() {
    let api = MockApi::seeded();
    let decision = decide(&api, Some("tok-forged"), Capability::Admin).await;
    assert_eq!(decision, AuthDecision::RedirectSignIn { clear_token: true });
}
