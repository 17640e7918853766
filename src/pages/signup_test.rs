use super::*;

#[test]
fn validate_signup_input_trims_name_and_email() {
    assert_eq!(
        validate_signup_input(" Ann ", " a@x.com ", "pw"),
        Ok(SignupInput { name: "Ann".to_owned(), email: "a@x.com".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(validate_signup_input("", "a@x.com", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_signup_input("Ann", "  ", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_signup_input("Ann", "a@x.com", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_signup_input_rejects_implausible_email() {
    assert_eq!(validate_signup_input("Ann", "ann", "pw"), Err(INVALID_EMAIL));
    assert_eq!(validate_signup_input("Ann", "@x.com", "pw"), Err(INVALID_EMAIL));
    assert_eq!(validate_signup_input("Ann", "a@", "pw"), Err(INVALID_EMAIL));
    assert_eq!(validate_signup_input("Ann", "a@b@c", "pw"), Err(INVALID_EMAIL));
}
