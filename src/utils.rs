/// Rounds the exact binary value to `decimals` places, ties to even
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let rounded = format!("{:.*}", decimals, value)
        .parse::<f64>()
        .unwrap_or(value);
    // avoid printing "-0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Rounds to cents
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(3.0), 3.0);
        assert_eq!(round2(-1.234), -1.23);
    }

    #[test]
    fn rounds_stored_value_not_scaled_value() {
        // 2.675 is stored as 2.67499999..., 0.085 as 0.08500000...
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(0.015), 0.01);
        assert_eq!(round2(0.085), 0.09);
        assert_eq!(round2(0.005), 0.01);
    }

    #[test]
    fn exact_ties_go_to_even() {
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn negative_zero_is_normalised() {
        let value = round2(-0.001);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
        assert!(round_to(-0.5, 0).is_sign_positive());
    }
}
