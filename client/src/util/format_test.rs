use super::*;

#[test]
fn format_currency_pads_cents_and_groups_thousands() {
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(5.5), "$5.50");
    assert_eq!(format_currency(999.999), "$1,000.00");
    assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
}

#[test]
fn format_currency_handles_negatives_and_non_finite() {
    assert_eq!(format_currency(-12.3), "-$12.30");
    assert_eq!(format_currency(-0.001), "$0.00");
    assert_eq!(format_currency(f64::NAN), "$0.00");
}

#[test]
fn format_date_renders_long_form() {
    assert_eq!(format_date("2024-03-05T10:00:00Z"), "March 5, 2024");
    assert_eq!(format_date("2023-12-31T23:59:59.123+02:00"), "December 31, 2023");
    assert_eq!(format_date("2024-01-09"), "January 9, 2024");
}

#[test]
fn format_date_passes_through_unparsable_input() {
    assert_eq!(format_date("yesterday"), "yesterday");
}

#[test]
fn date_stamp_is_zero_padded() {
    assert_eq!(date_stamp("2024-03-05T10:00:00Z").as_deref(), Some("20240305"));
    assert_eq!(date_stamp("nope"), None);
}
