use chrono::NaiveDate;

/// Calendar format used by every export: `YYYY-MM-DD`.
pub fn format_fecha(fecha: NaiveDate) -> String {
    fecha.format("%Y-%m-%d").to_string()
}

/// Inclusive range check used by the date-filtered report.
pub fn in_rango(fecha: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    fecha >= start && fecha <= end
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{format_fecha, in_rango};

    fn fecha(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(format_fecha(fecha(2024, 3, 5)), "2024-03-05");
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let start = fecha(2024, 1, 1);
        let end = fecha(2024, 12, 31);

        assert!(in_rango(start, start, end));
        assert!(in_rango(end, start, end));
        assert!(!in_rango(fecha(2023, 12, 31), start, end));
        assert!(!in_rango(fecha(2025, 1, 1), start, end));
    }
}
