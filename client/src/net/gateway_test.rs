use super::*;

// =============================================================
// normalize_response
// =============================================================

#[test]
fn normalize_response_returns_success_body() {
    let value = normalize_response(200, r#"{"success":true,"token":"t"}"#).unwrap();
    assert_eq!(value["token"], "t");
}

#[test]
fn normalize_response_maps_status_with_server_message() {
    let err = normalize_response(401, r#"{"success":false,"message":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) });
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
}

#[test]
fn normalize_response_maps_status_with_html_body() {
    let err = normalize_response(502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502, message: None });
    assert_eq!(err.user_message("Login failed"), "Login failed");
}

#[test]
fn normalize_response_treats_success_false_as_rejection() {
    let err = normalize_response(200, r#"{"success":false,"message":"Email taken"}"#).unwrap_err();
    assert_eq!(err, ApiError::Rejected { message: Some("Email taken".to_owned()) });
}

#[test]
fn normalize_response_reports_malformed_json() {
    let err = normalize_response(200, "{not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn normalize_response_accepts_empty_body() {
    assert_eq!(normalize_response(204, "").unwrap(), Value::Null);
}

// =============================================================
// ApiError messages
// =============================================================

#[test]
fn user_message_ignores_blank_server_message() {
    let err = ApiError::Rejected { message: Some("   ".to_owned()) };
    assert_eq!(err.user_message("Registration failed"), "Registration failed");
}

#[test]
fn user_message_uses_fallback_for_transport_errors() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.server_message(), None);
    assert_eq!(err.user_message("Login failed"), "Login failed");
}

// =============================================================
// Request helpers
// =============================================================

#[test]
fn join_url_avoids_double_slashes() {
    assert_eq!(join_url("http://localhost:5000/api/", "/auth/me"), "http://localhost:5000/api/auth/me");
    assert_eq!(join_url("/api", "auth/login"), "/api/auth/login");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn api_request_builders_set_method_body_and_bearer() {
    let req = ApiRequest::put("/auth/change-password", &serde_json::json!({ "a": 1 }))
        .unwrap()
        .with_bearer("tok");
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.body, Some(serde_json::json!({ "a": 1 })));
    assert_eq!(req.bearer.as_deref(), Some("tok"));

    let get = ApiRequest::get("/auth/me");
    assert_eq!(get.method, Method::Get);
    assert!(get.body.is_none());
    assert!(get.bearer.is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_gateway_is_unavailable_outside_the_browser() {
    let gateway = HttpGateway::new("/api");
    let result = futures::executor::block_on(gateway.send(ApiRequest::get("/auth/me")));
    assert_eq!(result, Err(ApiError::Unavailable));
}
