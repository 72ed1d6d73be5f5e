//! Tests for load orchestration and sample substitution.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::errors::{DatabaseError, Error, Result};
    use crate::frame::{Frame, Value};
    use crate::ingest::IngestError;
    use crate::sources::{
        DatasetSource, LoadOptions, LoadService, LoadWarning, RawDatasets, SourceKind,
    };
    use crate::utils::DateRange;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        )
        .unwrap()
    }

    /// Source that always fails with the given error constructor.
    struct FailingSource {
        kind: SourceKind,
        error: fn() -> Error,
    }

    #[async_trait]
    impl DatasetSource for FailingSource {
        fn kind(&self) -> SourceKind {
            self.kind
        }

        async fn fetch(&self, _range: &DateRange) -> Result<RawDatasets> {
            Err((self.error)())
        }
    }

    /// Source that serves one fixed row per table.
    struct FixedSource;

    #[async_trait]
    impl DatasetSource for FixedSource {
        fn kind(&self) -> SourceKind {
            SourceKind::Spreadsheet
        }

        async fn fetch(&self, _range: &DateRange) -> Result<RawDatasets> {
            let campaign = Frame::from_columns(vec![
                ("campaign_id".to_string(), vec![Value::Int(1)]),
                ("impressions".to_string(), vec![Value::Int(1000)]),
                ("clicks".to_string(), vec![Value::Int(50)]),
            ])?;
            let sales = Frame::from_columns(vec![
                ("campaign_id".to_string(), vec![Value::Int(1)]),
                ("purchases".to_string(), vec![Value::Int(5)]),
            ])?;
            Ok(RawDatasets { campaign, sales })
        }
    }

    #[tokio::test]
    async fn test_load_keeps_requested_origin_on_success() {
        let service = LoadService::new(Arc::new(FixedSource), LoadOptions::default());

        let loaded = service.load(&range()).await.unwrap();

        assert_eq!(loaded.origin, SourceKind::Spreadsheet);
        assert!(loaded.warnings.is_empty());
        assert!(!loaded.is_substituted());
        assert_eq!(loaded.data.combined.row_count(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_source_substitutes_sample_data() {
        let source = FailingSource {
            kind: SourceKind::Database,
            error: || DatabaseError::ConnectionFailed("pool exhausted".to_string()).into(),
        };
        let service = LoadService::new(Arc::new(source), LoadOptions::default());

        let loaded = service.load(&range()).await.unwrap();

        assert_eq!(loaded.origin, SourceKind::Sample);
        assert!(loaded.is_substituted());
        assert!(loaded.warnings.iter().any(|warning| matches!(
            warning,
            LoadWarning::SourceSubstituted {
                requested: SourceKind::Database,
                ..
            }
        )));
        // One day x 5 campaigns x 3 platforms x 6 regions
        assert_eq!(loaded.data.combined.row_count(), 90);
    }

    #[tokio::test]
    async fn test_substitution_reason_carries_the_source_error() {
        let source = FailingSource {
            kind: SourceKind::Database,
            error: || DatabaseError::ConnectionFailed("pool exhausted".to_string()).into(),
        };
        let service = LoadService::new(Arc::new(source), LoadOptions::default());

        let loaded = service.load(&range()).await.unwrap();

        match &loaded.warnings[0] {
            LoadWarning::SourceSubstituted { reason, .. } => {
                assert!(reason.contains("pool exhausted"));
            }
        }
    }

    #[tokio::test]
    async fn test_disabled_fallback_propagates_the_error() {
        let source = FailingSource {
            kind: SourceKind::Database,
            error: || DatabaseError::ConnectionFailed("pool exhausted".to_string()).into(),
        };
        let options = LoadOptions {
            fallback_to_sample: false,
            ..LoadOptions::default()
        };
        let service = LoadService::new(Arc::new(source), options);

        let error = service.load(&range()).await.unwrap_err();

        assert!(matches!(error, Error::Database(_)));
    }

    #[tokio::test]
    async fn test_malformed_input_is_never_substituted() {
        let source = FailingSource {
            kind: SourceKind::Spreadsheet,
            error: || {
                IngestError::RowArity {
                    row: 2,
                    expected: 3,
                    actual: 2,
                }
                .into()
            },
        };
        let service = LoadService::new(Arc::new(source), LoadOptions::default());

        let error = service.load(&range()).await.unwrap_err();

        assert!(matches!(error, Error::Ingest(_)));
    }
}
