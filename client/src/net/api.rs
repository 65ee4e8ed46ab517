//! Typed helpers for the storefront REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper builds one [`ApiRequest`], hands it to a [`Gateway`] and
//! decodes the JSON envelope. Session bookkeeping stays in
//! `state::session`; nothing here touches stored tokens.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::gateway::{ApiError, ApiRequest, Gateway};
use super::types::{
    AuthResponse, Credentials, ForgotPasswordReply, MeResponse, MessageResponse, Order, OrderResponse,
    OrderSummary, OrdersResponse, PasswordChange, PasswordReset, Registration, UserProfile,
};

const ME_ENDPOINT: &str = "/auth/me";
const LOGIN_ENDPOINT: &str = "/auth/login";
const REGISTER_ENDPOINT: &str = "/auth/register";
const FORGOT_PASSWORD_ENDPOINT: &str = "/auth/forgot-password";
const CHANGE_PASSWORD_ENDPOINT: &str = "/auth/change-password";
const MY_ORDERS_ENDPOINT: &str = "/orders/myorders";

// Path parameters are percent-encoded so `?`, `#` and `%` stay inside the segment.
fn reset_password_endpoint(token: &str) -> String {
    format!("/auth/reset-password/{}", urlencoding::encode(token))
}

fn order_endpoint(order_id: &str) -> String {
    format!("/orders/{}", urlencoding::encode(order_id))
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

/// Fetch the user that owns `token` via `GET /auth/me`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the envelope has no user.
pub async fn fetch_current_user<G: Gateway>(gateway: &G, token: &str) -> Result<UserProfile, ApiError> {
    let value = gateway.send(ApiRequest::get(ME_ENDPOINT).with_bearer(token)).await?;
    let resp: MeResponse = decode(value)?;
    if !resp.success {
        return Err(ApiError::Rejected { message: None });
    }
    resp.data.ok_or_else(|| ApiError::Decode("missing user".to_owned()))
}

/// Exchange credentials for a token via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects the credentials.
pub async fn login<G: Gateway>(gateway: &G, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    let value = gateway.send(ApiRequest::post(LOGIN_ENDPOINT, credentials)?).await?;
    decode(value)
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects the registration.
pub async fn register<G: Gateway>(gateway: &G, registration: &Registration) -> Result<AuthResponse, ApiError> {
    let value = gateway.send(ApiRequest::post(REGISTER_ENDPOINT, registration)?).await?;
    decode(value)
}

/// Ask the server to send a reset link via `POST /auth/forgot-password`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn forgot_password<G: Gateway>(gateway: &G, email: &str) -> Result<ForgotPasswordReply, ApiError> {
    let value = gateway
        .send(ApiRequest::post(FORGOT_PASSWORD_ENDPOINT, &EmailBody { email })?)
        .await?;
    decode(value)
}

/// Set a new password with a reset token via `POST /auth/reset-password/:token`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the token is rejected.
pub async fn reset_password<G: Gateway>(
    gateway: &G,
    reset_token: &str,
    passwords: &PasswordReset,
) -> Result<MessageResponse, ApiError> {
    let value = gateway
        .send(ApiRequest::post(reset_password_endpoint(reset_token), passwords)?)
        .await?;
    decode(value)
}

/// Change the signed-in user's password via `PUT /auth/change-password`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the current password is wrong.
pub async fn change_password<G: Gateway>(
    gateway: &G,
    token: &str,
    passwords: &PasswordChange,
) -> Result<MessageResponse, ApiError> {
    let value = gateway
        .send(ApiRequest::put(CHANGE_PASSWORD_ENDPOINT, passwords)?.with_bearer(token))
        .await?;
    decode(value)
}

/// Fetch one of the signed-in user's orders via `GET /orders/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the envelope has no order.
pub async fn fetch_order<G: Gateway>(gateway: &G, token: &str, order_id: &str) -> Result<Order, ApiError> {
    let value = gateway
        .send(ApiRequest::get(order_endpoint(order_id)).with_bearer(token))
        .await?;
    let resp: OrderResponse = decode(value)?;
    if !resp.success {
        return Err(ApiError::Rejected { message: None });
    }
    resp.data.ok_or_else(|| ApiError::Decode("missing order".to_owned()))
}

/// List the signed-in user's orders via `GET /orders/myorders`.
///
/// Accepts both the `{success, data}` envelope and a bare JSON array.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not an order list.
pub async fn fetch_my_orders<G: Gateway>(gateway: &G, token: &str) -> Result<Vec<OrderSummary>, ApiError> {
    let value = gateway.send(ApiRequest::get(MY_ORDERS_ENDPOINT).with_bearer(token)).await?;
    match decode(value)? {
        OrdersResponse::List(orders) => Ok(orders),
        OrdersResponse::Envelope { success: false, .. } => Err(ApiError::Rejected { message: None }),
        OrdersResponse::Envelope { data, .. } => Ok(data),
    }
}
