//! Tests for overview KPIs and funnel totals.

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::errors::Error;
    use crate::frame::{Frame, Value};
    use crate::reports::{funnel_stages, overview_kpis};

    fn metrics_frame() -> Frame {
        let mut frame = Frame::new();
        frame
            .push_column(
                "conversion_rate",
                vec![Value::Number(dec!(10)), Value::Number(dec!(20))],
            )
            .unwrap();
        frame
            .push_column("cpa", vec![Value::Number(dec!(2)), Value::Number(dec!(4))])
            .unwrap();
        frame
            .push_column(
                "spend",
                vec![Value::Number(dec!(100)), Value::Number(dec!(100))],
            )
            .unwrap();
        frame
            .push_column(
                "revenue",
                vec![Value::Number(dec!(150)), Value::Number(dec!(250))],
            )
            .unwrap();
        frame
    }

    #[test]
    fn test_overview_kpis_basic() {
        let kpis = overview_kpis(&metrics_frame()).unwrap();

        assert_eq!(kpis.conversion_rate, Some(dec!(15.00)));
        assert_eq!(kpis.cpa, Some(dec!(3.00)));
        assert_eq!(kpis.roi, Some(dec!(100.00)));
        assert_eq!(kpis.total_revenue, Some(dec!(400.00)));
    }

    #[test]
    fn test_overview_kpis_means_skip_missing_cells() {
        let mut frame = Frame::new();
        frame
            .push_column(
                "conversion_rate",
                vec![Value::Number(dec!(10)), Value::Null, Value::Number(dec!(20))],
            )
            .unwrap();

        let kpis = overview_kpis(&frame).unwrap();

        assert_eq!(kpis.conversion_rate, Some(dec!(15.00)));
    }

    #[test]
    fn test_overview_kpis_absent_columns_are_none() {
        let mut frame = Frame::new();
        frame
            .push_column("revenue", vec![Value::Number(dec!(90))])
            .unwrap();

        let kpis = overview_kpis(&frame).unwrap();

        assert_eq!(kpis.conversion_rate, None);
        assert_eq!(kpis.cpa, None);
        assert_eq!(kpis.roi, None);
        assert_eq!(kpis.total_revenue, Some(dec!(90)));
    }

    #[test]
    fn test_overview_kpis_zero_spend_leaves_roi_undefined() {
        let mut frame = Frame::new();
        frame
            .push_column("spend", vec![Value::Number(dec!(0))])
            .unwrap();
        frame
            .push_column("revenue", vec![Value::Number(dec!(50))])
            .unwrap();

        let kpis = overview_kpis(&frame).unwrap();

        assert_eq!(kpis.roi, None);
    }

    #[test]
    fn test_overview_kpis_empty_table_errors() {
        let result = overview_kpis(&Frame::new());

        assert!(matches!(result, Err(Error::Report(_))));
    }

    #[test]
    fn test_funnel_totals_and_conversions() {
        let mut frame = Frame::new();
        frame
            .push_column("impressions", vec![Value::Int(1000), Value::Int(1000)])
            .unwrap();
        frame
            .push_column("clicks", vec![Value::Int(150), Value::Int(50)])
            .unwrap();
        frame
            .push_column("installs", vec![Value::Int(40), Value::Int(10)])
            .unwrap();
        frame
            .push_column("purchases", vec![Value::Int(20), Value::Int(5)])
            .unwrap();

        let stages = funnel_stages(&frame);

        let names: Vec<&str> = stages.iter().map(|stage| stage.stage.as_str()).collect();
        assert_eq!(names, vec!["Impressions", "Clicks", "Installs", "Purchases"]);
        assert_eq!(stages[0].value, dec!(2000));
        assert_eq!(stages[0].conversion_from_previous, None);
        assert_eq!(stages[1].value, dec!(200));
        assert_eq!(stages[1].conversion_from_previous, Some(dec!(10.00)));
        assert_eq!(stages[2].conversion_from_previous, Some(dec!(25.00)));
        assert_eq!(stages[3].conversion_from_previous, Some(dec!(50.00)));
    }

    #[test]
    fn test_funnel_skips_absent_stages() {
        let mut frame = Frame::new();
        frame
            .push_column("impressions", vec![Value::Int(500)])
            .unwrap();
        frame.push_column("installs", vec![Value::Int(50)]).unwrap();

        let stages = funnel_stages(&frame);

        let names: Vec<&str> = stages.iter().map(|stage| stage.stage.as_str()).collect();
        assert_eq!(names, vec!["Impressions", "Installs"]);
        assert_eq!(stages[1].conversion_from_previous, Some(dec!(10.00)));
    }

    #[test]
    fn test_funnel_zero_stage_leaves_next_conversion_undefined() {
        let mut frame = Frame::new();
        frame.push_column("impressions", vec![Value::Int(0)]).unwrap();
        frame.push_column("clicks", vec![Value::Int(10)]).unwrap();

        let stages = funnel_stages(&frame);

        assert_eq!(stages[1].conversion_from_previous, None);
    }

    #[test]
    fn test_funnel_without_stage_columns_is_empty() {
        let mut frame = Frame::new();
        frame
            .push_column("revenue", vec![Value::Number(dec!(10))])
            .unwrap();

        assert!(funnel_stages(&frame).is_empty());
    }
}
