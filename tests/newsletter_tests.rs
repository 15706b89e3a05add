// Host-side tests for newsletter input handling and response mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod newsletter {
        include!("../src/core/newsletter.rs");
    }
}

use site::newsletter::*;

#[test]
fn prepare_sanitizes_before_validating() {
    assert_eq!(
        prepare("  Fan@Example.COM \n"),
        Ok("fan@example.com".to_string())
    );
}

#[test]
fn prepare_rejects_blank_and_malformed_input() {
    assert_eq!(prepare(""), Err(SignupError::Empty));
    assert_eq!(prepare("   "), Err(SignupError::Empty));
    for bad in ["fan", "fan@", "@example.com", "fan@example", "fan@example.c", "fan @example.com"] {
        assert_eq!(prepare(bad), Err(SignupError::Invalid), "{bad:?}");
    }
}

#[test]
fn validation_enforces_length_limit() {
    let domain = "@example.com";
    let fits = format!("{}{}", "a".repeat(MAX_EMAIL_LEN - domain.len()), domain);
    let too_long = format!("a{}", fits);
    assert!(is_valid(&fits));
    assert!(!is_valid(&too_long));
}

#[test]
fn accepts_common_address_shapes() {
    for good in ["a.b+tag@sub.example.de", "x_y%z@mail-host.io", "1@2.co"] {
        assert!(is_valid(good), "{good:?}");
    }
}

#[test]
fn insert_body_is_single_row_array() {
    assert_eq!(
        insert_body("fan@example.com").unwrap(),
        r#"[{"email":"fan@example.com"}]"#
    );
}

#[test]
fn duplicate_detection_by_code_or_message() {
    let by_code = classify_response(409, r#"{"code":"23505","message":"conflict"}"#);
    assert_eq!(by_code, SignupError::AlreadySubscribed);

    let by_message = classify_response(
        400,
        r#"{"message":"duplicate key value violates unique constraint \"emails_email_key\""}"#,
    );
    assert_eq!(by_message, SignupError::AlreadySubscribed);
}

#[test]
fn other_remote_errors_keep_the_message() {
    let err = classify_response(401, r#"{"code":"PGRST301","message":"JWT expired"}"#);
    assert_eq!(err, SignupError::Remote("JWT expired".to_string()));
    assert_eq!(err.to_string(), "Something went wrong. Please try again later.");
}

#[test]
fn non_json_bodies_fall_back_to_status() {
    assert_eq!(classify_response(409, ""), SignupError::AlreadySubscribed);
    assert_eq!(
        classify_response(502, "<html>Bad Gateway</html>"),
        SignupError::Remote("HTTP 502".to_string())
    );
}

#[test]
fn endpoint_requires_both_parts() {
    assert!(SignupEndpoint::from_parts(None, Some("key")).is_none());
    assert!(SignupEndpoint::from_parts(Some("https://db.example.co"), Some("  ")).is_none());

    let endpoint = SignupEndpoint::from_parts(Some(" https://db.example.co/ "), Some("anon")).unwrap();
    assert_eq!(endpoint.table_url("emails"), "https://db.example.co/rest/v1/emails");

    let headers = endpoint.headers();
    assert_eq!(headers[0], ("apikey", "anon".to_string()));
    assert_eq!(headers[1], ("Authorization", "Bearer anon".to_string()));
    assert_eq!(headers[2], ("Content-Type", "application/json".to_string()));
    assert_eq!(headers[3], ("Prefer", "return=minimal".to_string()));
}

#[test]
fn submit_guard_blocks_overlapping_submissions() {
    let mut guard = SubmitGuard::default();
    assert!(guard.try_begin());
    assert!(!guard.try_begin());
    assert!(!guard.try_begin());
    guard.finish();
    assert!(guard.try_begin());
}

#[test]
fn messages_are_user_facing() {
    assert_eq!(SignupError::Empty.to_string(), "Please enter an email address.");
    assert_eq!(
        SignupError::AlreadySubscribed.to_string(),
        "You're already subscribed to our newsletter!"
    );
}
