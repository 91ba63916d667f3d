use crate::domain::models::event::EventCost;

/// Format a monetary amount with its currency the way the en-GB locale
/// renders the common codes. Unknown codes fall back to `"CODE amount"`
/// rather than failing; no currency at all yields the bare number.
pub fn format_cost(amount: f64, currency: Option<&str>) -> String {
    let code = match currency {
        Some(code) => code,
        None => return format_plain(amount),
    };
    match code {
        "GBP" => format!("£{:.2}", amount),
        "USD" => format!("US${:.2}", amount),
        "EUR" => format!("€{:.2}", amount),
        _ => format!("{} {}", code, format_plain(amount)),
    }
}

/// Full cost line for an event, including the concession price when one
/// is set, e.g. "£12.00 (£8.00 concession)".
pub fn format_cost_line(cost: &EventCost) -> String {
    let currency = cost.currency.as_deref();
    match cost.concession {
        Some(concession) => format!(
            "{} ({} concession)",
            format_cost(cost.amount, currency),
            format_cost(concession, currency),
        ),
        None => format_cost(cost.amount, currency),
    }
}

/// Integral amounts print without a decimal part, mirroring how the
/// original rendered currency-less numbers.
fn format_plain(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_gbp() {
        assert_eq!(format_cost(10.0, Some("GBP")), "£10.00");
        assert_eq!(format_cost(0.0, Some("GBP")), "£0.00");
        assert_eq!(format_cost(9.99, Some("GBP")), "£9.99");
    }

    #[test]
    fn test_formats_usd_and_eur() {
        assert_eq!(format_cost(25.5, Some("USD")), "US$25.50");
        assert_eq!(format_cost(8.0, Some("EUR")), "€8.00");
    }

    #[test]
    fn test_plain_number_without_currency() {
        assert_eq!(format_cost(15.0, None), "15");
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let formatted = format_cost(5.0, Some("XYZ"));
        assert!(formatted.contains("XYZ"));
        assert!(formatted.contains('5'));
    }

    #[test]
    fn test_cost_line_with_concession() {
        let cost = EventCost {
            amount: 12.0,
            concession: Some(8.0),
            currency: Some("GBP".to_string()),
        };
        assert_eq!(format_cost_line(&cost), "£12.00 (£8.00 concession)");
    }

    #[test]
    fn test_cost_line_without_concession() {
        let cost = EventCost {
            amount: 12.0,
            concession: None,
            currency: Some("GBP".to_string()),
        };
        assert_eq!(format_cost_line(&cost), "£12.00");
    }
}
