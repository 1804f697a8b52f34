use authguard::{AuthGuard, Session, StaticTokenVerifier, TokenVerifier, UserRecord};
use secrecy::SecretString;
use serde_json::{Value, json};
use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use std::thread;

fn verifier() -> Arc<dyn TokenVerifier> {
    Arc::new(StaticTokenVerifier::new(SecretString::from(
        "valid_token".to_string(),
    )))
}

fn guard() -> AuthGuard {
    AuthGuard::new(Arc::new(Session::new()), verifier())
}

fn test_user() -> Value {
    json!({
        "uid": "test_user_123",
        "email": "test@example.com",
        "displayName": "Test User",
    })
}

#[test]
fn unauthenticated_without_user() {
    let guard = guard();
    assert!(!guard.is_authenticated());
    assert_eq!(guard.current_user(), None);
}

#[test]
fn authenticated_with_valid_user() {
    let guard = guard();
    guard.session().set_current_user(test_user());
    assert!(guard.is_authenticated());

    let user = guard.authenticated_user();
    assert_eq!(
        user,
        Some(
            UserRecord::new("test_user_123")
                .with_email("test@example.com")
                .with_display_name("Test User")
        )
    );
}

#[test]
fn malformed_session_data_degrades_to_unauthenticated() {
    let guard = guard();
    let malformed = [
        json!("invalid_user_data"),
        json!({}),
        json!({ "email": "test@example.com" }),
        json!({ "uid": "" }),
        json!({ "uid": [123] }),
        json!(null),
        json!([{ "uid": "test_user_123" }]),
    ];
    for value in malformed {
        guard.session().set_current_user(value.clone());
        assert!(!guard.is_authenticated(), "{value}");
        assert_eq!(guard.authenticated_user(), None, "{value}");
    }
}

#[test]
fn non_empty_scalar_identifiers_authenticate() {
    let guard = guard();
    for (value, uid) in [
        (json!({ "uid": "   " }), "   "),
        (json!({ "uid": 12345 }), "12345"),
        (json!({ "uid": "a", "email": null }), "a"),
    ] {
        guard.session().set_current_user(value.clone());
        assert!(guard.is_authenticated(), "{value}");
        assert_eq!(guard.rejection(), None, "{value}");
        assert_eq!(
            guard.authenticated_user().map(|user| user.uid).as_deref(),
            Some(uid)
        );
    }
}

#[test]
fn null_user_is_an_empty_session() {
    let guard = guard();
    guard.session().set_current_user(test_user());
    guard.session().set_current_user(Value::Null);
    assert_eq!(guard.current_user(), None);
    assert_eq!(guard.rejection(), None);
    assert!(!guard.is_authenticated());
}

#[test]
fn current_user_round_trips_any_value() {
    let guard = guard();
    for value in [test_user(), json!("invalid_user_data"), json!({}), json!(42)] {
        guard.session().set_current_user(value.clone());
        assert_eq!(guard.current_user(), Some(value));
    }
}

#[test]
fn token_verification() {
    let guard = guard();
    assert!(guard.verify_token(Some("valid_token")));
    assert!(!guard.verify_token(Some("invalid_token")));
    assert!(!guard.verify_token(Some("")));
    assert!(!guard.verify_token(None));
}

#[test]
fn injected_identity_provider() {
    let issued = Arc::new(AtomicBool::new(false));
    let provider = {
        let issued = Arc::clone(&issued);
        move |token: Option<&str>| issued.load(Ordering::SeqCst) && token == Some("idp-token")
    };
    let guard = AuthGuard::new(Arc::new(Session::new()), Arc::new(provider));

    assert!(!guard.verify_token(Some("idp-token")));
    issued.store(true, Ordering::SeqCst);
    assert!(guard.verify_token(Some("idp-token")));
    assert!(!guard.verify_token(None));
}

#[test]
fn wrapped_operation_follows_session_changes() {
    let guard = guard();
    let protected = guard.require_authentication(|| "Protected content");

    assert_eq!(protected.invoke(), None);

    guard.session().set_current_user(test_user());
    assert_eq!(protected.invoke(), Some("Protected content"));

    guard.session().set_current_user(json!({}));
    assert_eq!(protected.invoke(), None);
}

#[derive(Debug)]
struct Greeting<'a> {
    name: &'a str,
    role: Option<&'a str>,
}

fn greet(greeting: Greeting<'_>) -> String {
    let role = greeting.role.unwrap_or("user");
    format!("Hello {}, you are a {role}", greeting.name)
}

#[test]
fn wrapped_operation_forwards_named_arguments() {
    let guard = guard();
    guard.session().set_current_user(test_user());

    let guarded_greet = guard.require_authentication(greet);

    let admin = guarded_greet.call(Greeting {
        name: "Alice",
        role: Some("admin"),
    });
    let admin = admin.unwrap_or_default();
    assert!(admin.contains("Alice"));
    assert!(admin.contains("admin"));

    let default_role = guarded_greet.call(Greeting {
        name: "Bob",
        role: None,
    });
    assert_eq!(default_role.as_deref(), Some("Hello Bob, you are a user"));

    guard.session().sign_out();
    let skipped = guarded_greet.call(Greeting {
        name: "Mallory",
        role: Some("admin"),
    });
    assert_eq!(skipped, None);
}

#[test]
fn wrapped_operation_is_not_invoked_when_unauthenticated() {
    let guard = guard();
    let calls = AtomicUsize::new(0);
    let counted = guard.require_authentication(|amount: usize| calls.fetch_add(amount, Ordering::SeqCst));

    assert_eq!(counted.call(5), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    guard.session().sign_in(&UserRecord::new("test_user_123"));
    assert_eq!(counted.call(5), Some(0));
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[test]
fn independent_sessions_do_not_interfere() {
    let first = guard();
    let second = guard();
    first.session().set_current_user(test_user());
    assert!(first.is_authenticated());
    assert!(!second.is_authenticated());
}

#[test]
fn concurrent_sign_in_and_out() {
    let guard = guard();
    let ran = Arc::new(AtomicUsize::new(0));
    let protected = {
        let ran = Arc::clone(&ran);
        Arc::new(guard.require_authentication(move || {
            ran.fetch_add(1, Ordering::SeqCst);
        }))
    };

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let session = Arc::clone(guard.session());
            thread::spawn(move || {
                for n in 0..200 {
                    if (i + n) % 2 == 0 {
                        session.sign_in(&UserRecord::new(format!("user-{i}-{n}")));
                    } else if n % 3 == 0 {
                        session.set_current_user("corrupted");
                    } else {
                        session.sign_out();
                    }
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let protected = Arc::clone(&protected);
            thread::spawn(move || {
                let mut allowed = 0usize;
                for _ in 0..200 {
                    if protected.invoke().is_some() {
                        allowed += 1;
                    }
                }
                allowed
            })
        })
        .collect();

    for writer in writers {
        assert!(writer.join().is_ok());
    }
    let allowed: usize = readers
        .into_iter()
        .map(|reader| reader.join().unwrap_or(0))
        .sum();

    assert_eq!(allowed, ran.load(Ordering::SeqCst));
}
