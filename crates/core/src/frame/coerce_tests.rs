//! Tests for date normalization and the numeric-coercion pass.

#[cfg(test)]
mod tests {
    use crate::frame::{
        coerce_numeric_to_zero, normalize_date_column, parse_date_text, Frame, Value,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_text_formats() {
        assert_eq!(parse_date_text("2023-01-15"), Some(date(2023, 1, 15)));
        assert_eq!(parse_date_text("2023/01/15"), Some(date(2023, 1, 15)));
        assert_eq!(parse_date_text("01/15/2023"), Some(date(2023, 1, 15)));
        assert_eq!(
            parse_date_text("2023-01-15T10:30:00"),
            Some(date(2023, 1, 15))
        );
        assert_eq!(
            parse_date_text(" 2023-01-15 10:30:00 "),
            Some(date(2023, 1, 15))
        );
        assert_eq!(parse_date_text("not a date"), None);
        assert_eq!(parse_date_text(""), None);
    }

    #[test]
    fn test_normalize_date_column() {
        let mut frame = Frame::from_columns(vec![(
            "date".to_string(),
            vec![
                Value::from("2023-01-15"),
                Value::Date(date(2023, 2, 1)),
                Value::from("garbage"),
                Value::Int(20230101),
            ],
        )])
        .unwrap();

        normalize_date_column(&mut frame, "date");

        assert_eq!(frame.value(0, "date"), Some(&Value::Date(date(2023, 1, 15))));
        assert_eq!(frame.value(1, "date"), Some(&Value::Date(date(2023, 2, 1))));
        assert_eq!(frame.value(2, "date"), Some(&Value::Null));
        assert_eq!(frame.value(3, "date"), Some(&Value::Null));
    }

    #[test]
    fn test_normalize_date_column_missing_is_noop() {
        let mut frame =
            Frame::from_columns(vec![("spend".to_string(), vec![Value::Int(1)])]).unwrap();
        normalize_date_column(&mut frame, "date");
        assert_eq!(frame.column_names(), vec!["spend"]);
    }

    #[test]
    fn test_coerce_fills_integer_columns_with_int_zero() {
        let mut frame = Frame::from_columns(vec![(
            "clicks".to_string(),
            vec![Value::Int(10), Value::Null],
        )])
        .unwrap();
        coerce_numeric_to_zero(&mut frame);
        assert_eq!(frame.value(1, "clicks"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_coerce_widens_decimal_columns() {
        let mut frame = Frame::from_columns(vec![(
            "spend".to_string(),
            vec![Value::Number(dec!(1.5)), Value::Int(2), Value::Null],
        )])
        .unwrap();
        coerce_numeric_to_zero(&mut frame);
        assert_eq!(frame.value(0, "spend"), Some(&Value::Number(dec!(1.5))));
        assert_eq!(frame.value(1, "spend"), Some(&Value::Number(dec!(2))));
        assert_eq!(
            frame.value(2, "spend"),
            Some(&Value::Number(rust_decimal::Decimal::ZERO))
        );
    }

    #[test]
    fn test_coerce_fills_all_null_columns() {
        let mut frame = Frame::from_columns(vec![(
            "bounce_rate".to_string(),
            vec![Value::Null, Value::Null],
        )])
        .unwrap();
        coerce_numeric_to_zero(&mut frame);
        assert_eq!(
            frame.value(0, "bounce_rate"),
            Some(&Value::Number(rust_decimal::Decimal::ZERO))
        );
    }

    #[test]
    fn test_coerce_leaves_text_and_date_columns_alone() {
        let mut frame = Frame::from_columns(vec![
            (
                "campaign_name".to_string(),
                vec![Value::from("Summer Sale 2023"), Value::Null],
            ),
            (
                "date".to_string(),
                vec![Value::Date(date(2023, 1, 1)), Value::Null],
            ),
        ])
        .unwrap();
        coerce_numeric_to_zero(&mut frame);
        assert_eq!(frame.value(1, "campaign_name"), Some(&Value::Null));
        assert_eq!(frame.value(1, "date"), Some(&Value::Null));
    }
}
