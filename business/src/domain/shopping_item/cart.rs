use serde::Serialize;

use super::model::ShoppingItem;

/// Derived totals over the purchased items of one list.
///
/// Carries both the numeric total and its display text so the
/// rounding/formatting rule stays explicit and testable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub total_items: usize,
    pub total_price: f64,
    pub formatted_total: String,
}

/// Interprets a stored price text. A decimal comma is accepted alongside a
/// decimal point; missing or unparseable text counts as zero.
pub fn parse_price(text: Option<&str>) -> f64 {
    text.map(|t| t.trim().replace(',', "."))
        .and_then(|t| t.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Interprets a stored quantity text as a whole count, zero when missing or
/// unparseable.
pub fn parse_quantity(text: Option<&str>) -> i64 {
    text.and_then(|t| t.trim().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Renders a total as fixed two-decimal text with a decimal comma.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

/// Folds the current items into a cart summary. Recomputed on every call;
/// nothing is cached across mutations.
///
/// Business rules:
/// - only items with `purchased == true` participate;
/// - each contributes `price * quantity`, both read leniently, so one
///   malformed entry contributes zero instead of poisoning the total;
/// - an item with malformed details still counts towards `total_items`.
pub fn summarize(items: &[ShoppingItem]) -> CartSummary {
    let mut total_items = 0;
    let mut total_price = 0.0;

    for item in items.iter().filter(|item| item.purchased) {
        total_items += 1;
        total_price +=
            parse_price(item.price.as_deref()) * parse_quantity(item.quantity.as_deref()) as f64;
    }

    CartSummary {
        total_items,
        total_price,
        formatted_total: format_price(total_price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn purchased(name: &str, quantity: &str, price: &str) -> ShoppingItem {
        let mut item = ShoppingItem::new(name).unwrap();
        item.mark_purchased(quantity.to_string(), price.to_string());
        item
    }

    #[test]
    fn should_parse_decimal_comma_price() {
        assert_eq!(parse_price(Some("5,50")), 5.5);
    }

    #[test]
    fn should_parse_decimal_point_price() {
        assert_eq!(parse_price(Some("10.25")), 10.25);
    }

    #[test]
    fn should_default_to_zero_on_malformed_price() {
        assert_eq!(parse_price(Some("x")), 0.0);
        assert_eq!(parse_price(Some("")), 0.0);
        assert_eq!(parse_price(None), 0.0);
    }

    #[test]
    fn should_default_to_zero_on_malformed_quantity() {
        assert_eq!(parse_quantity(Some("abc")), 0);
        assert_eq!(parse_quantity(None), 0);
    }

    #[test]
    fn should_sum_price_times_quantity_over_purchased_items() {
        let items = vec![
            purchased("A", "2", "10,00"),
            purchased("B", "1", "5,25"),
        ];

        let summary = summarize(&items);

        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.total_price, 25.25);
        assert_eq!(summary.formatted_total, "25,25");
    }

    #[test]
    fn should_contribute_sixteen_fifty_for_three_at_five_fifty() {
        let items = vec![purchased("Juice", "3", "5,50")];

        let summary = summarize(&items);

        assert_eq!(summary.total_items, 1);
        assert_eq!(summary.total_price, 16.5);
        assert_eq!(summary.formatted_total, "16,50");
    }

    #[test]
    fn should_count_item_with_malformed_details_but_add_nothing() {
        let items = vec![purchased("Bread", "abc", "x")];

        let summary = summarize(&items);

        assert_eq!(summary.total_items, 1);
        assert_eq!(summary.total_price, 0.0);
        assert_eq!(summary.formatted_total, "0,00");
    }

    #[test]
    fn should_ignore_pending_items_even_with_stale_details() {
        let mut stale = purchased("Eggs", "2", "3,00");
        stale.unmark_purchased();
        let items = vec![stale, purchased("Rice", "1", "4,00")];

        let summary = summarize(&items);

        assert_eq!(summary.total_items, 1);
        assert_eq!(summary.total_price, 4.0);
    }

    #[test]
    fn should_summarize_empty_collection_to_zero() {
        let summary = summarize(&[]);

        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.formatted_total, "0,00");
    }

    proptest! {
        #[test]
        fn parsing_never_panics(text in ".*") {
            let _ = parse_price(Some(&text));
            let _ = parse_quantity(Some(&text));
        }

        #[test]
        fn total_matches_cents_arithmetic(quantity in 0i64..1_000, cents in 0i64..100_000) {
            let price = format!("{},{:02}", cents / 100, cents % 100);
            let items = vec![purchased("P", &quantity.to_string(), &price)];

            let summary = summarize(&items);

            let expected = quantity as f64 * (cents as f64 / 100.0);
            prop_assert!((summary.total_price - expected).abs() < 1e-6);
        }
    }
}
