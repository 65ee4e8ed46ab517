//! Shared wire DTOs for the storefront client/API boundary.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON with Mongo-style `_id` keys. These types
//! mirror that shape so serde round-trips stay lossless; unknown user fields
//! are kept in `extra` because the profile record is owned by the server.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated customer as returned by `/auth/me`, `/auth/login` and
/// `/auth/register`.
///
/// The record is server-owned and every known field defaults; the envelope,
/// not the profile shape, decides whether a sign-in succeeded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server-side user identifier.
    #[serde(default, alias = "_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Contact phone, if the customer provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Account role (e.g. `"user"`, `"admin"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Any other fields the server attaches, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Login request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body. `confirm_password` never leaves the client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

/// Body for `POST /auth/reset-password/:token`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    pub password: String,
    pub confirm_password: String,
}

/// Body for `PUT /auth/change-password`. `confirm_password` is client-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

/// Envelope returned by `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, alias = "user")]
    pub data: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope returned by `GET /auth/me`.
#[derive(Clone, Debug, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    #[serde(default, alias = "user")]
    pub data: Option<UserProfile>,
}

/// Generic `{success, message}` envelope used by the password endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply from `POST /auth/forgot-password`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordReply {
    #[serde(default)]
    pub message: String,
    /// Only echoed by servers running without outbound mail.
    #[serde(default)]
    pub reset_token: Option<String>,
}

/// Envelope returned by `GET /orders/:id`.
#[derive(Clone, Debug, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    #[serde(default, alias = "order")]
    pub data: Option<Order>,
}

/// Reply from `GET /orders/myorders`: either the usual envelope or a bare list.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum OrdersResponse {
    List(Vec<OrderSummary>),
    Envelope {
        success: bool,
        #[serde(default, alias = "orders")]
        data: Vec<OrderSummary>,
    },
}

/// One row of the account order history.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_f64_from_number")]
    pub total_price: f64,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub status: String,
}

/// A placed order as consumed by the invoice view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    #[serde(alias = "orderItems")]
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_f64_from_number")]
    pub items_price: f64,
    #[serde(default, deserialize_with = "deserialize_f64_from_number")]
    pub shipping_price: f64,
    #[serde(default, deserialize_with = "deserialize_f64_from_number")]
    pub tax_price: f64,
    #[serde(deserialize_with = "deserialize_f64_from_number")]
    pub total_price: f64,
    #[serde(default)]
    pub status: String,
}

/// A single line on an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    #[serde(alias = "qty", deserialize_with = "deserialize_u32_from_number")]
    pub quantity: u32,
    #[serde(deserialize_with = "deserialize_f64_from_number")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Delivery address attached to an order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Accepts JSON numbers and numeric strings; some backends serialize decimals
/// as strings.
fn deserialize_f64_from_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .filter(|f| f.is_finite())
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| D::Error::custom(format!("invalid numeric string {raw:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_f64_from_number(deserializer)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    if value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) {
        return Ok(value as u32);
    }
    Err(D::Error::custom(format!("value {value} is not a valid quantity")))
}
