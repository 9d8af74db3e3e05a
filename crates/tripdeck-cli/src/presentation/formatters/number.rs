/// Mileage totals render with two decimals ("15.50"), matching the
/// service's own reports.
pub fn format_miles(miles: f64) -> String {
    format!("{:.2}", miles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_miles() {
        assert_eq!(format_miles(15.5), "15.50");
        assert_eq!(format_miles(0.0), "0.00");
        assert_eq!(format_miles(1234.567), "1234.57");
    }
}
