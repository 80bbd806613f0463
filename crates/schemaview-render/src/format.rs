use crate::RenderConfig;
use schemaview_types::{display_text, is_truthy};
use serde_json::Value;

/// Listing price normalization and formatting
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFormat {
    pub rounding: u64,
    pub thousands_separator: String,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl PriceFormat {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            rounding: config.price_rounding,
            thousands_separator: config.thousands_separator.clone(),
        }
    }

    /// Display text for a `price` field, or None when no price is present
    ///
    /// Numeric prices are rounded and grouped; anything else is shown as-is.
    pub fn format_price(&self, price: &Value) -> Option<String> {
        if !is_truthy(price) {
            return None;
        }

        let resolved = resolve_price(price);
        match resolved.as_f64() {
            Some(amount) => Some(self.format_amount(amount)),
            None => Some(display_text(resolved)),
        }
    }

    pub fn format_amount(&self, amount: f64) -> String {
        let rounded = if self.rounding > 0 {
            let step = self.rounding as f64;
            // Half rounds toward positive infinity
            (amount / step + 0.5).floor() * step
        } else {
            (amount + 0.5).floor()
        };
        let digits = format!("{:.0}", rounded.abs());
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!("{}{}", sign, group_digits(&digits, &self.thousands_separator))
    }
}

/// Unwrap `{"price": ..}` / `{"value": ..}` offers down to the amount
pub fn resolve_price(price: &Value) -> &Value {
    match price {
        Value::Object(offer) => offer
            .get("price")
            .filter(|v| is_truthy(v))
            .or_else(|| offer.get("value").filter(|v| is_truthy(v)))
            .unwrap_or(price),
        _ => price,
    }
}

/// Format an integer with a separator between each group of three digits
pub fn group_thousands(value: i64, separator: &str) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string(), separator);
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, ","), "0");
        assert_eq!(group_thousands(999, ","), "999");
        assert_eq!(group_thousands(1000, ","), "1,000");
        assert_eq!(group_thousands(500_000, ","), "500,000");
        assert_eq!(group_thousands(12_345_678, "."), "12.345.678");
        assert_eq!(group_thousands(-1_500_000, ","), "-1,500,000");
    }

    #[test]
    fn test_numeric_price_rounds_to_nearest_hundred_thousand() {
        let format = PriceFormat::default();
        assert_eq!(format.format_price(&json!(450000)).as_deref(), Some("500,000"));
        assert_eq!(format.format_price(&json!(420000)).as_deref(), Some("400,000"));
        assert_eq!(format.format_price(&json!(1_249_999.99)).as_deref(), Some("1,200,000"));
    }

    #[test]
    fn test_amounts_beyond_i64_keep_their_digits() {
        let format = PriceFormat::default();
        assert_eq!(format.format_amount(1e19), "10,000,000,000,000,000,000");
        assert_eq!(
            format.format_price(&json!(2.5e20)).as_deref(),
            Some("250,000,000,000,000,000,000")
        );
    }

    #[test]
    fn test_negative_and_unrounded_amounts() {
        let format = PriceFormat {
            rounding: 0,
            thousands_separator: ",".to_string(),
        };
        assert_eq!(format.format_amount(1234.4), "1,234");
        assert_eq!(format.format_amount(-1_500_000.0), "-1,500,000");
    }

    #[test]
    fn test_offer_objects_are_unwrapped() {
        let format = PriceFormat::default();
        assert_eq!(
            format.format_price(&json!({"value": 450000})).as_deref(),
            Some("500,000")
        );
        assert_eq!(
            format.format_price(&json!({"price": 420000, "value": 999999})).as_deref(),
            Some("400,000")
        );
        assert_eq!(
            format.format_price(&json!({"price": 0, "value": 450000})).as_deref(),
            Some("500,000")
        );
    }

    #[test]
    fn test_non_numeric_prices_shown_as_is() {
        let format = PriceFormat::default();
        assert_eq!(
            format.format_price(&json!("Contact agent")).as_deref(),
            Some("Contact agent")
        );
        assert_eq!(
            format.format_price(&json!({"value": "$1.2M"})).as_deref(),
            Some("$1.2M")
        );
        assert_eq!(
            format.format_price(&json!({"currency": "USD"})).as_deref(),
            Some(r#"{"currency":"USD"}"#)
        );
    }

    #[test]
    fn test_missing_price_is_none() {
        let format = PriceFormat::default();
        assert_eq!(format.format_price(&Value::Null), None);
        assert_eq!(format.format_price(&json!("")), None);
        assert_eq!(format.format_price(&json!(0)), None);
    }

    #[test]
    fn test_rounding_disabled() {
        let format = PriceFormat {
            rounding: 0,
            thousands_separator: " ".to_string(),
        };
        assert_eq!(format.format_price(&json!(452_310)).as_deref(), Some("452 310"));
    }
}
