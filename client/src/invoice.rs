//! Invoice generation for completed orders.
//!
//! SYSTEM CONTEXT
//! ==============
//! The invoice page renders a preview from [`render_invoice_html`] and hands
//! the same document to [`print_invoice`], which opens it in a new window
//! and triggers the browser print dialog.

#[cfg(test)]
#[path = "invoice_test.rs"]
mod invoice_test;

use std::fmt::Write as _;

use crate::net::types::{Order, UserProfile};
use crate::util::format::{date_stamp, format_currency, format_date};

pub const STORE_NAME: &str = "Bagvo";

const INVOICE_CSS: &str = "\
body{font-family:Helvetica,Arial,sans-serif;color:#222;margin:40px}\
h1{margin:0 0 4px}\
.invoice__meta,.invoice__parties{display:flex;justify-content:space-between;margin-bottom:24px}\
table{width:100%;border-collapse:collapse}\
th,td{padding:8px;border-bottom:1px solid #ddd;text-align:left}\
td.num,th.num{text-align:right}\
.invoice__totals td{border:none}\
.invoice__grand td{font-weight:bold;border-top:2px solid #222}\
@media print{body{margin:0}}";

/// `INV-YYYYMMDD-XXXXXX`: order date plus the last six id characters.
pub fn invoice_number(order_id: &str, created_at: &str) -> String {
    let stamp = date_stamp(created_at).unwrap_or_else(|| "00000000".to_owned());
    let id: Vec<char> = order_id.trim().chars().filter(char::is_ascii_alphanumeric).collect();
    let suffix: String = id[id.len().saturating_sub(6)..].iter().collect();
    format!("INV-{stamp}-{}", suffix.to_ascii_uppercase())
}

/// Client route of the invoice view for `order_id`.
pub fn invoice_path(order_id: &str) -> String {
    format!("/account/orders/{}/invoice", urlencoding::encode(order_id.trim()))
}

/// Escape text for safe interpolation into HTML content and attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Total for one line.
pub fn line_total(quantity: u32, price: f64) -> f64 {
    f64::from(quantity) * price
}

/// Render a standalone, print-ready HTML document for `order`.
pub fn render_invoice_html(order: &Order, customer: &UserProfile) -> String {
    let number = escape_html(&invoice_number(&order.id, &order.created_at));
    let addr = &order.shipping_address;
    let recipient = if addr.full_name.trim().is_empty() { &customer.name } else { &addr.full_name };

    let mut rows = String::new();
    for item in &order.items {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            escape_html(&item.name),
            item.quantity,
            format_currency(item.price),
            format_currency(line_total(item.quantity, item.price)),
        );
    }

    let payment = if order.is_paid {
        match &order.paid_at {
            Some(paid_at) => format!("Paid on {}", escape_html(&format_date(paid_at))),
            None => "Paid".to_owned(),
        }
    } else {
        "Unpaid".to_owned()
    };

    let mut html = String::with_capacity(2048 + rows.len());
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
         <title>Invoice {number}</title><style>{INVOICE_CSS}</style></head><body>\
         <div class=\"invoice\">\
         <div class=\"invoice__meta\"><div><h1>{STORE_NAME}</h1><p>Invoice</p></div>\
         <div><p><strong>Invoice #:</strong> {number}</p><p><strong>Date:</strong> {date}</p>\
         <p><strong>Order ID:</strong> {order_id}</p></div></div>\
         <div class=\"invoice__parties\"><div><h3>Bill To</h3><p>{recipient}</p><p>{email}</p></div>\
         <div><h3>Ship To</h3><p>{address}</p><p>{city} {postal}</p><p>{country}</p></div></div>\
         <table><thead><tr><th>Item</th><th class=\"num\">Qty</th><th class=\"num\">Price</th>\
         <th class=\"num\">Total</th></tr></thead><tbody>{rows}</tbody></table>\
         <table class=\"invoice__totals\"><tbody>\
         <tr><td>Subtotal</td><td class=\"num\">{items}</td></tr>\
         <tr><td>Shipping</td><td class=\"num\">{shipping}</td></tr>\
         <tr><td>Tax</td><td class=\"num\">{tax}</td></tr>\
         <tr class=\"invoice__grand\"><td>Total</td><td class=\"num\">{total}</td></tr>\
         </tbody></table>\
         <p><strong>Payment method:</strong> {method} ({payment})</p>\
         <p>Thank you for shopping with {STORE_NAME}.</p></div></body></html>",
        date = escape_html(&format_date(&order.created_at)),
        order_id = escape_html(&order.id),
        recipient = escape_html(recipient),
        email = escape_html(&customer.email),
        address = escape_html(&addr.address),
        city = escape_html(&addr.city),
        postal = escape_html(&addr.postal_code),
        country = escape_html(&addr.country),
        items = format_currency(order.items_price),
        shipping = format_currency(order.shipping_price),
        tax = format_currency(order.tax_price),
        total = format_currency(order.total_price),
        method = escape_html(&order.payment_method),
    );
    html
}

/// Open `html` in a new window and start printing.
///
/// # Errors
///
/// Returns an error string if the window cannot be opened (for example when
/// a popup blocker intervenes).
pub fn print_invoice(html: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("no window")?;
        let popup = window
            .open_with_url_and_target("", "_blank")
            .map_err(|_| "could not open print window".to_owned())?
            .ok_or("print window was blocked")?;
        let doc = popup
            .document()
            .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
            .ok_or("print window has no document")?;
        // Parse as a fresh document so the doctype and <html> root survive.
        doc.open().map_err(|_| "could not open print document".to_owned())?;
        doc.write_1(html).map_err(|_| "could not write print document".to_owned())?;
        doc.close().map_err(|_| "could not close print document".to_owned())?;
        popup.focus().map_err(|_| "could not focus print window".to_owned())?;
        popup.print().map_err(|_| "print failed".to_owned())?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = html;
        Err("not available on server".to_owned())
    }
}
