use super::*;

#[test]
fn http_sanitizes_empty_body() {
    assert_eq!(ApiError::http(500, "  \n"), ApiError::Http { status: 500, message: "Request failed.".to_owned() });
}

#[test]
fn http_truncates_long_body() {
    let body = "x".repeat(500);
    let ApiError::Http { message, .. } = ApiError::http(502, &body) else {
        panic!("expected http error");
    };
    assert_eq!(message.len(), MAX_ERROR_CHARS);
}

#[test]
fn user_message_hides_transport_details() {
    assert_eq!(ApiError::Network("dns failure".to_owned()).user_message(), "Unable to reach the server.");
    assert_eq!(ApiError::http(401, "bad creds").user_message(), "Invalid email or password.");
    assert_eq!(ApiError::http(422, " email taken ").user_message(), "email taken");
}

#[test]
fn display_includes_status() {
    assert_eq!(ApiError::http(404, "missing").to_string(), "request failed (404): missing");
}
