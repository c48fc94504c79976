use crate::LoginRequest;

fn request(email: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: "password".to_string(),
    }
}

#[test]
fn test_plain_address_is_plausible() {
    assert!(request("client@test.com").has_plausible_email());
}

#[test]
fn test_address_shapes_without_both_parts_are_rejected() {
    for email in ["", "client", "@test.com", "client@", "a@b@c"] {
        assert!(!request(email).has_plausible_email(), "{email:?} accepted");
    }
}

#[test]
fn test_address_longer_than_subject_limit_is_rejected() {
    let local = "a".repeat(portal_auth::MAX_SUBJECT_LENGTH);

    assert!(!request(&format!("{local}@test.com")).has_plausible_email());
}
