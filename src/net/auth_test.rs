use std::cell::Cell;

use super::*;

#[test]
fn grant_paths_match_token_endpoint() {
    assert_eq!(password_grant_path(), "token?grant_type=password");
    assert_eq!(refresh_grant_path(), "token?grant_type=refresh_token");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(500), "request failed: 500");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("at-1"), "Bearer at-1");
}

#[test]
fn sign_up_request_always_claims_student_role() {
    let request = sign_up_request("Ada", "ada@example.com", "password123");
    assert_eq!(request.data.role, "student");
    assert_eq!(request.data.full_name, "Ada");
    assert_eq!(request.email, "ada@example.com");
}

#[test]
fn change_names_are_stable() {
    assert_eq!(change_name(&AuthChange::SignedOut), "signed_out");
}

#[test]
fn emit_reaches_every_subscriber() {
    let hits = Rc::new(Cell::new(0));
    for _ in 0..2 {
        let hits = hits.clone();
        subscribe(Rc::new(move |change| {
            if *change == AuthChange::SignedOut {
                hits.set(hits.get() + 1);
            }
        }));
    }
    emit(&AuthChange::SignedOut);
    assert_eq!(hits.get(), 2);
}

#[test]
fn listener_may_subscribe_during_emit() {
    let nested = Rc::new(Cell::new(false));
    let flag = nested.clone();
    subscribe(Rc::new(move |_| {
        let flag = flag.clone();
        subscribe(Rc::new(move |_| flag.set(true)));
    }));
    emit(&AuthChange::SignedOut);
    emit(&AuthChange::SignedOut);
    assert!(nested.get());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_has_no_session() {
    let client = AuthClient::new(AuthConfig::default());
    let session = futures::executor::block_on(client.get_session());
    assert_eq!(session, Ok(None));
    let signed_in = futures::executor::block_on(client.sign_in_with_password("a@b.com", "pw"));
    assert_eq!(signed_in, Err(AuthError::Unavailable));
}
