//! Tests for the Frame table model.

#[cfg(test)]
mod tests {
    use crate::frame::{ColumnKind, Frame, FrameError, Value};
    use rust_decimal_macros::dec;

    fn sample_frame() -> Frame {
        Frame::from_columns(vec![
            (
                "campaign_id".to_string(),
                vec![Value::Int(1), Value::Int(2)],
            ),
            (
                "campaign_name".to_string(),
                vec![Value::from("Summer Sale 2023"), Value::from("Back to School")],
            ),
            (
                "spend".to_string(),
                vec![Value::Number(dec!(100.50)), Value::Null],
            ),
        ])
        .unwrap()
    }

    // ============================================================================
    // Construction
    // ============================================================================

    #[test]
    fn test_from_columns_preserves_order() {
        let frame = sample_frame();
        assert_eq!(
            frame.column_names(),
            vec!["campaign_id", "campaign_name", "spend"]
        );
        assert_eq!(frame.row_count(), 2);
        assert_eq!(frame.column_count(), 3);
    }

    #[test]
    fn test_from_columns_rejects_duplicate_names() {
        let result = Frame::from_columns(vec![
            ("spend".to_string(), vec![Value::Int(1)]),
            ("spend".to_string(), vec![Value::Int(2)]),
        ]);
        assert!(matches!(result, Err(FrameError::DuplicateColumn(name)) if name == "spend"));
    }

    #[test]
    fn test_from_columns_rejects_ragged_lengths() {
        let result = Frame::from_columns(vec![
            ("a".to_string(), vec![Value::Int(1), Value::Int(2)]),
            ("b".to_string(), vec![Value::Int(1)]),
        ]);
        assert!(matches!(
            result,
            Err(FrameError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_frame_has_no_rows() {
        let frame = Frame::new();
        assert_eq!(frame.row_count(), 0);
        assert!(frame.is_empty());
    }

    // ============================================================================
    // Access and mutation
    // ============================================================================

    #[test]
    fn test_value_accessor() {
        let frame = sample_frame();
        assert_eq!(frame.value(0, "campaign_id"), Some(&Value::Int(1)));
        assert_eq!(frame.value(1, "spend"), Some(&Value::Null));
        assert_eq!(frame.value(2, "spend"), None);
        assert_eq!(frame.value(0, "missing"), None);
    }

    #[test]
    fn test_set_column_replaces_in_place() {
        let mut frame = sample_frame();
        frame
            .set_column("spend", vec![Value::Int(1), Value::Int(2)])
            .unwrap();
        // Position unchanged, values replaced.
        assert_eq!(
            frame.column_names(),
            vec!["campaign_id", "campaign_name", "spend"]
        );
        assert_eq!(frame.value(0, "spend"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_set_column_appends_new() {
        let mut frame = sample_frame();
        frame
            .set_column("clicks", vec![Value::Int(5), Value::Int(6)])
            .unwrap();
        assert_eq!(frame.column_count(), 4);
        assert_eq!(frame.column_names().last(), Some(&"clicks"));
    }

    #[test]
    fn test_set_column_rejects_wrong_length() {
        let mut frame = sample_frame();
        let result = frame.set_column("clicks", vec![Value::Int(5)]);
        assert!(matches!(result, Err(FrameError::LengthMismatch { .. })));
    }

    #[test]
    fn test_rename_column() {
        let mut frame = sample_frame();
        frame.rename_column("spend", "cost").unwrap();
        assert!(frame.has_column("cost"));
        assert!(!frame.has_column("spend"));
        assert_eq!(frame.value(0, "cost"), Some(&Value::Number(dec!(100.50))));
        // Order unchanged.
        assert_eq!(
            frame.column_names(),
            vec!["campaign_id", "campaign_name", "cost"]
        );
    }

    #[test]
    fn test_rename_column_rejects_taken_name() {
        let mut frame = sample_frame();
        let result = frame.rename_column("spend", "campaign_id");
        assert!(matches!(result, Err(FrameError::DuplicateColumn(_))));
    }

    #[test]
    fn test_rename_missing_column() {
        let mut frame = sample_frame();
        let result = frame.rename_column("nope", "other");
        assert!(matches!(result, Err(FrameError::UnknownColumn(_))));
    }

    #[test]
    fn test_select_rows_projects_in_order() {
        let frame = sample_frame();
        let selected = frame.select_rows(&[1, 0]);
        assert_eq!(selected.row_count(), 2);
        assert_eq!(selected.value(0, "campaign_id"), Some(&Value::Int(2)));
        assert_eq!(selected.value(1, "campaign_id"), Some(&Value::Int(1)));
    }

    // ============================================================================
    // Column kinds
    // ============================================================================

    #[test]
    fn test_column_kind_inference() {
        let frame = Frame::from_columns(vec![
            ("ints".to_string(), vec![Value::Int(1), Value::Null]),
            (
                "decimals".to_string(),
                vec![Value::Number(dec!(1.5)), Value::Int(2)],
            ),
            (
                "dates".to_string(),
                vec![
                    Value::Date(chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
                    Value::Null,
                ],
            ),
            ("text".to_string(), vec![Value::from("a"), Value::Int(1)]),
            ("empty".to_string(), vec![Value::Null, Value::Null]),
        ])
        .unwrap();

        assert_eq!(frame.column("ints").unwrap().kind(), ColumnKind::Integer);
        assert_eq!(
            frame.column("decimals").unwrap().kind(),
            ColumnKind::Decimal
        );
        assert_eq!(frame.column("dates").unwrap().kind(), ColumnKind::Date);
        assert_eq!(frame.column("text").unwrap().kind(), ColumnKind::Text);
        assert_eq!(frame.column("empty").unwrap().kind(), ColumnKind::Empty);
        assert!(frame.column("empty").unwrap().kind().is_numeric());
        assert!(!frame.column("dates").unwrap().kind().is_numeric());
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::Int(3).as_decimal(), Some(dec!(3)));
        assert_eq!(Value::Number(dec!(2.5)).as_decimal(), Some(dec!(2.5)));
        assert_eq!(Value::from("x").as_decimal(), None);
        assert!(Value::Null.is_null());
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Number(dec!(10.00)).to_string(), "10.00");
    }
}
