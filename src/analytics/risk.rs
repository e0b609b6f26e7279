use crate::models::Direction;

/// Parse a user-entered decimal field. Empty or non-numeric input yields
/// None, as do `NaN` and the infinities, which `f64::from_str` would accept
/// but which have no place in a price or P/L field.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Derive the displayed risk/reward ratio from the planned prices.
///
/// Only the first comma-separated take-profit target participates. Returns
/// `"1:X.XX"`, or the empty string when any input fails to parse or the
/// resulting risk or reward is not strictly positive (a non-positive leg means
/// the setup is incomplete or inverted, not an error).
pub fn risk_reward_ratio(
    entry_price: &str,
    stop_loss_price: &str,
    take_profit_targets: &str,
    direction: Direction,
) -> String {
    let first_target = take_profit_targets.split(',').next().unwrap_or("");

    let (entry, stop, target) = match (
        parse_decimal(entry_price),
        parse_decimal(stop_loss_price),
        parse_decimal(first_target),
    ) {
        (Some(e), Some(s), Some(t)) => (e, s, t),
        _ => return String::new(),
    };

    let (risk, reward) = match direction {
        Direction::Long => (entry - stop, target - entry),
        Direction::Short => (stop - entry, entry - target),
    };

    if risk > 0.0 && reward > 0.0 {
        format!("1:{:.2}", reward / risk)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_ratio() {
        assert_eq!(risk_reward_ratio("100", "90", "130", Direction::Long), "1:3.00");
    }

    #[test]
    fn test_short_ratio() {
        assert_eq!(risk_reward_ratio("100", "110", "70", Direction::Short), "1:3.00");
    }

    #[test]
    fn test_only_first_target_counts() {
        assert_eq!(
            risk_reward_ratio("100", "95", "110, 120, 140", Direction::Long),
            "1:2.00"
        );
    }

    #[test]
    fn test_non_numeric_input_yields_empty() {
        assert_eq!(risk_reward_ratio("", "90", "130", Direction::Long), "");
        assert_eq!(risk_reward_ratio("100", "abc", "130", Direction::Long), "");
        assert_eq!(risk_reward_ratio("100", "90", "", Direction::Long), "");
    }

    #[test]
    fn test_non_finite_input_yields_empty() {
        // f64::from_str accepts these spellings; a price field must not
        assert_eq!(risk_reward_ratio("NaN", "90", "130", Direction::Long), "");
        assert_eq!(risk_reward_ratio("100", "90", "inf", Direction::Long), "");
        assert_eq!(risk_reward_ratio("100", "-infinity", "130", Direction::Long), "");
    }

    #[test]
    fn test_non_positive_risk_yields_empty() {
        // Stop above entry on a long: risk <= 0
        assert_eq!(risk_reward_ratio("100", "105", "130", Direction::Long), "");
        // Stop below entry on a short
        assert_eq!(risk_reward_ratio("100", "95", "70", Direction::Short), "");
    }

    #[test]
    fn test_non_positive_reward_yields_empty() {
        // Target below entry on a long: reward <= 0
        assert_eq!(risk_reward_ratio("100", "90", "100", Direction::Long), "");
        assert_eq!(risk_reward_ratio("100", "90", "80", Direction::Long), "");
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // risk = 3, reward = 10 -> 3.3333...
        assert_eq!(risk_reward_ratio("100", "97", "110", Direction::Long), "1:3.33");
    }

    #[test]
    fn test_whitespace_around_target_is_tolerated() {
        assert_eq!(
            risk_reward_ratio("100", "90", " 130 ,150", Direction::Long),
            "1:3.00"
        );
    }
}
