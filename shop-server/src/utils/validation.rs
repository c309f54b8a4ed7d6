//! Input validation helpers
//!
//! Request bodies arrive as loose wire types (every field optional, numbers
//! as raw JSON values) and are turned into store drafts here. Every failure
//! is a 400 naming the offending field.

use serde_json::{Number, Value};
use shared::models::{CartItemInput, CustomerInput, OrderCreate, ProductCreate};

use crate::db::models::{CartItem, Customer, OrderDraft, ProductDraft};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::OrderStatus;

// ── Text length limits ──────────────────────────────────────────────

/// Product names, customer names, cart item titles
pub const MAX_NAME_LEN: usize = 200;

/// Category labels, phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Notes
pub const MAX_NOTE_LEN: usize = 500;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Field helpers ───────────────────────────────────────────────────

/// Required text: present, non-blank after trimming, within the limit.
/// Returns the trimmed value.
pub fn validate_required_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> AppResult<String> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(AppError::required(field));
    }
    if trimmed.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            trimmed.len()
        ))
        .with_detail("field", field));
    }
    Ok(trimmed.to_string())
}

/// Optional text: trimmed, blank collapses to `None`.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> AppResult<Option<String>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) if v.len() > max_len => Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field)),
        Some(v) => Ok(Some(v.to_string())),
    }
}

/// Numeric field given as a JSON number or a numeric string.
pub fn parse_number(value: Option<&Value>, field: &str) -> AppResult<f64> {
    let parsed = match value {
        None | Some(Value::Null) => return Err(AppError::required(field)),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    parsed.filter(|n| n.is_finite()).ok_or_else(|| {
        AppError::with_message(ErrorCode::ValidationFailed, format!("{field} must be a number"))
            .with_detail("field", field)
    })
}

// ── Products ────────────────────────────────────────────────────────

/// Validate a product create body
pub fn validate_product(body: ProductCreate, now: i64) -> AppResult<ProductDraft> {
    let name = validate_required_text(body.name.as_deref(), "name", MAX_NAME_LEN)?;
    let price = parse_number(body.price.as_ref(), "price").map_err(|e| {
        if e.code == ErrorCode::ValidationFailed {
            AppError::new(ErrorCode::ProductInvalidPrice).with_detail("field", "price")
        } else {
            e
        }
    })?;
    if price < 0.0 {
        return Err(
            AppError::with_message(ErrorCode::ValueOutOfRange, "price must not be negative")
                .with_detail("field", "price"),
        );
    }
    let image_url = validate_required_text(body.image_url.as_deref(), "imageUrl", MAX_URL_LEN)?;
    let category =
        validate_required_text(body.category.as_deref(), "category", MAX_SHORT_TEXT_LEN)?;

    Ok(ProductDraft {
        name,
        price,
        image_url,
        category,
        created_at: now,
        updated_at: now,
    })
}

// ── Orders ──────────────────────────────────────────────────────────

fn validate_customer(customer: Option<CustomerInput>) -> AppResult<Customer> {
    let customer = customer.ok_or_else(|| AppError::required("customer"))?;
    Ok(Customer {
        name: validate_required_text(customer.name.as_deref(), "customer.name", MAX_NAME_LEN)?,
        address: validate_required_text(
            customer.address.as_deref(),
            "customer.address",
            MAX_ADDRESS_LEN,
        )?,
        phone: validate_required_text(
            customer.phone.as_deref(),
            "customer.phone",
            MAX_SHORT_TEXT_LEN,
        )?,
        notes: validate_optional_text(customer.notes.as_deref(), "customer.notes", MAX_NOTE_LEN)?,
    })
}

fn invalid_item(field: String, msg: &str) -> AppError {
    AppError::validation(format!("{field} {msg}")).with_detail("field", field)
}

fn validate_cart_item(index: usize, item: CartItemInput) -> AppResult<CartItem> {
    let field = |name: &str| format!("cart[{index}].{name}");

    let id = match item.id {
        None | Some(Value::Null) => return Err(AppError::required(&field("id"))),
        Some(Value::Number(n)) => n,
        Some(_) => return Err(invalid_item(field("id"), "must be a number")),
    };

    let title = validate_required_text(item.title.as_deref(), &field("title"), MAX_NAME_LEN)?;

    // Price is stored as text; numbers are accepted and rendered as-is
    let price = match item.price {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(_) => return Err(invalid_item(field("price"), "must be text")),
    };

    let quantity = match item.quantity {
        None | Some(Value::Null) => return Err(AppError::required(&field("quantity"))),
        Some(Value::Number(n)) => whole_number(&n)
            .ok_or_else(|| invalid_item(field("quantity"), "must be an integer"))?,
        Some(_) => return Err(invalid_item(field("quantity"), "must be an integer")),
    };
    if quantity < 1 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{} must be at least 1", field("quantity")),
        )
        .with_detail("field", field("quantity")));
    }

    Ok(CartItem {
        id,
        title,
        price,
        quantity,
    })
}

/// `2` and `2.0` are both whole numbers
fn whole_number(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Validate an order create body
///
/// The total is taken as given; it is not recomputed from the cart.
pub fn validate_order(body: OrderCreate, now: i64) -> AppResult<OrderDraft> {
    let customer = validate_customer(body.customer)?;

    let cart = body.cart.ok_or_else(|| AppError::required("cart"))?;
    if cart.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty).with_detail("field", "cart"));
    }
    let cart = cart
        .into_iter()
        .enumerate()
        .map(|(i, item)| validate_cart_item(i, item))
        .collect::<AppResult<Vec<_>>>()?;

    let total = parse_number(body.total.as_ref(), "total")?;
    if total <= 0.0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "total must be greater than 0",
        )
        .with_detail("field", "total"));
    }

    Ok(OrderDraft {
        customer,
        cart,
        total,
        status: OrderStatus::Pending,
        date: now,
        created_at: now,
        updated_at: now,
    })
}

/// Parse the status of a PUT /orders/{id} body
pub fn validate_status(status: Option<&str>) -> AppResult<OrderStatus> {
    let status = status.ok_or_else(|| AppError::required("status"))?;
    status.parse::<OrderStatus>().map_err(|_| {
        let allowed: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
        AppError::with_message(
            ErrorCode::OrderInvalidStatus,
            format!("status must be one of: {}", allowed.join(", ")),
        )
        .with_detail("field", "status")
        .with_detail("value", status)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_760_000_000_000;

    fn product(value: Value) -> ProductCreate {
        serde_json::from_value(value).unwrap()
    }

    fn order(value: Value) -> OrderCreate {
        serde_json::from_value(value).unwrap()
    }

    fn valid_order() -> Value {
        json!({
            "customer": { "name": "Ada", "address": "1 Loop St", "phone": "555-0100" },
            "cart": [{ "id": 1, "title": "Lamp", "price": "19.90", "quantity": 2 }],
            "total": 39.8
        })
    }

    #[test]
    fn test_required_text_trims() {
        assert_eq!(
            validate_required_text(Some("  Lamp "), "name", MAX_NAME_LEN).unwrap(),
            "Lamp"
        );
        let err = validate_required_text(Some("   "), "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        let err = validate_required_text(None, "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_required_text_too_long() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(Some(&long), "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_parse_number_accepts_numeric_strings() {
        assert_eq!(parse_number(Some(&json!(12.5)), "price").unwrap(), 12.5);
        assert_eq!(parse_number(Some(&json!(" 7 ")), "price").unwrap(), 7.0);
        assert!(parse_number(Some(&json!("abc")), "price").is_err());
        assert!(parse_number(Some(&json!(true)), "price").is_err());
        assert!(parse_number(Some(&json!("NaN")), "price").is_err());
        assert_eq!(
            parse_number(None, "price").unwrap_err().code,
            ErrorCode::RequiredField
        );
    }

    #[test]
    fn test_validate_product() {
        let draft = validate_product(
            product(json!({
                "name": "Lamp", "price": "19.90", "imageUrl": "/images/lamp.png", "category": "home"
            })),
            NOW,
        )
        .unwrap();
        assert_eq!(draft.price, 19.9);
        assert_eq!(draft.created_at, NOW);
        assert_eq!(draft.updated_at, NOW);
    }

    #[test]
    fn test_validate_product_errors() {
        let err = validate_product(
            product(json!({"name": "Lamp", "price": 1, "category": "home"})),
            NOW,
        )
        .unwrap_err();
        assert_eq!(err.message, "imageUrl is required");

        let err = validate_product(
            product(json!({"name": "Lamp", "price": "cheap", "imageUrl": "x", "category": "c"})),
            NOW,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);

        let err = validate_product(
            product(json!({"name": "Lamp", "price": -1, "imageUrl": "x", "category": "c"})),
            NOW,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_validate_order() {
        let draft = validate_order(order(valid_order()), NOW).unwrap();
        assert_eq!(draft.status, OrderStatus::Pending);
        assert_eq!(draft.date, NOW);
        assert_eq!(draft.cart[0].price.as_deref(), Some("19.90"));
        assert_eq!(draft.cart[0].quantity, 2);
        assert_eq!(draft.total, 39.8);
    }

    #[test]
    fn test_validate_order_numeric_cart_price_becomes_text() {
        let mut body = valid_order();
        body["cart"][0]["price"] = json!(19.9);
        let draft = validate_order(order(body), NOW).unwrap();
        assert_eq!(draft.cart[0].price.as_deref(), Some("19.9"));
    }

    #[test]
    fn test_validate_order_missing_phone() {
        let mut body = valid_order();
        body["customer"]["phone"] = json!("");
        let err = validate_order(order(body), NOW).unwrap_err();
        assert_eq!(err.message, "customer.phone is required");
    }

    #[test]
    fn test_validate_order_empty_cart() {
        let mut body = valid_order();
        body["cart"] = json!([]);
        let err = validate_order(order(body), NOW).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
    }

    #[test]
    fn test_validate_order_total_must_be_positive() {
        for total in [json!(0), json!(-5), json!("0")] {
            let mut body = valid_order();
            body["total"] = total;
            let err = validate_order(order(body), NOW).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        }
        let mut body = valid_order();
        body.as_object_mut().unwrap().remove("total");
        let err = validate_order(order(body), NOW).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_validate_order_bad_quantity() {
        let mut body = valid_order();
        body["cart"][0]["quantity"] = json!(0);
        let err = validate_order(order(body), NOW).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        let mut body = valid_order();
        body["cart"][0]["quantity"] = json!(1.5);
        assert!(validate_order(order(body), NOW).is_err());

        let mut body = valid_order();
        body["cart"][0]["quantity"] = json!(2.0);
        assert_eq!(validate_order(order(body), NOW).unwrap().cart[0].quantity, 2);
    }

    #[test]
    fn test_validate_order_cart_item_needs_numeric_id() {
        let mut body = valid_order();
        body["cart"][0]["id"] = json!("sku-1");
        let err = validate_order(order(body), NOW).unwrap_err();
        assert_eq!(err.details.unwrap()["field"], "cart[0].id");
    }

    #[test]
    fn test_validate_status() {
        assert_eq!(
            validate_status(Some("completed")).unwrap(),
            OrderStatus::Completed
        );
        let err = validate_status(Some("shipped")).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidStatus);
        assert!(err.message.contains("pending, processing, completed, cancelled"));
        assert_eq!(
            validate_status(None).unwrap_err().code,
            ErrorCode::RequiredField
        );
    }
}
