use super::*;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_accepts_mongo_id_and_keeps_extra_fields() {
    let user: UserProfile = serde_json::from_value(serde_json::json!({
        "_id": "64f0c2",
        "name": "Ada",
        "email": "ada@example.com",
        "role": "user",
        "createdAt": "2024-01-02T03:04:05Z"
    }))
    .unwrap();
    assert_eq!(user.id, "64f0c2");
    assert_eq!(user.role.as_deref(), Some("user"));
    assert!(user.phone.is_none());
    assert_eq!(user.extra.get("createdAt"), Some(&serde_json::json!("2024-01-02T03:04:05Z")));
}

#[test]
fn user_profile_tolerates_missing_name_and_email() {
    let user: UserProfile = serde_json::from_value(serde_json::json!({ "_id": "u1" })).unwrap();
    assert_eq!(user.id, "u1");
    assert!(user.name.is_empty());
    assert!(user.email.is_empty());
    assert!(user.extra.is_empty());
}

#[test]
fn user_profile_rejects_non_object() {
    let parsed = serde_json::from_value::<UserProfile>(serde_json::json!("ada@example.com"));
    assert!(parsed.is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn registration_omits_confirmation_on_the_wire() {
    let body = Registration {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "name": "Ada", "email": "ada@example.com", "password": "secret1" })
    );
}

#[test]
fn password_change_uses_camel_case_and_skips_confirmation() {
    let body = PasswordChange {
        current_password: "old-pass".to_owned(),
        new_password: "new-pass".to_owned(),
        confirm_password: "new-pass".to_owned(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "currentPassword": "old-pass", "newPassword": "new-pass" })
    );
}

#[test]
fn password_reset_sends_both_fields() {
    let body = PasswordReset { password: "abcdef".to_owned(), confirm_password: "abcdef".to_owned() };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["confirmPassword"], "abcdef");
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn auth_response_accepts_user_alias() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "success": true,
        "token": "t-1",
        "user": { "id": "u1", "name": "Ada", "email": "ada@example.com" }
    }))
    .unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.map(|u| u.name).as_deref(), Some("Ada"));
}

#[test]
fn forgot_password_reply_reads_reset_token() {
    let reply: ForgotPasswordReply =
        serde_json::from_value(serde_json::json!({ "success": true, "message": "sent", "resetToken": "abc" }))
            .unwrap();
    assert_eq!(reply.reset_token.as_deref(), Some("abc"));
    assert_eq!(reply.message, "sent");
}

// =============================================================
// Order
// =============================================================

#[test]
fn order_accepts_string_prices_and_qty_alias() {
    let order: Order = serde_json::from_value(serde_json::json!({
        "_id": "ord-1",
        "createdAt": "2024-03-05T10:00:00Z",
        "orderItems": [{ "name": "Tote", "qty": 2, "price": "19.50" }],
        "shippingAddress": { "fullName": "Ada", "address": "1 Main St", "city": "Springfield", "postalCode": "12345", "country": "US" },
        "paymentMethod": "Card",
        "itemsPrice": 39,
        "totalPrice": "39.00"
    }))
    .unwrap();
    assert_eq!(order.items[0].quantity, 2);
    assert!((order.items[0].price - 19.5).abs() < f64::EPSILON);
    assert!((order.total_price - 39.0).abs() < f64::EPSILON);
    assert!((order.tax_price).abs() < f64::EPSILON);
    assert_eq!(order.shipping_address.postal_code, "12345");
}

#[test]
fn order_item_rejects_fractional_quantity() {
    let parsed = serde_json::from_value::<OrderItem>(serde_json::json!({ "name": "Tote", "quantity": 1.5, "price": 1 }));
    assert!(parsed.is_err());
}

// =============================================================
// Order history
// =============================================================

#[test]
fn orders_response_accepts_bare_list() {
    let resp: OrdersResponse = serde_json::from_value(serde_json::json!([
        { "_id": "ord-1", "createdAt": "2024-03-05T10:00:00Z", "totalPrice": "39.00", "isPaid": true }
    ]))
    .unwrap();
    let OrdersResponse::List(orders) = resp else {
        panic!("expected bare list");
    };
    assert_eq!(orders[0].id, "ord-1");
    assert!(orders[0].is_paid);
    assert!((orders[0].total_price - 39.0).abs() < f64::EPSILON);
}

#[test]
fn orders_response_accepts_envelope_with_orders_alias() {
    let resp: OrdersResponse = serde_json::from_value(serde_json::json!({
        "success": true,
        "orders": [{ "_id": "ord-2" }]
    }))
    .unwrap();
    let OrdersResponse::Envelope { success, data } = resp else {
        panic!("expected envelope");
    };
    assert!(success);
    assert_eq!(data[0].id, "ord-2");
    assert!(data[0].status.is_empty());
}
