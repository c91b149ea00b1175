use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
pub(crate) struct PlagiarismReportQuery {
    /// Overrides the configured similarity threshold for this report.
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0, message = "threshold must be between 0 and 1"))]
    pub(crate) threshold: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_optional() {
        let query: PlagiarismReportQuery = serde_json::from_str("{}").unwrap();
        assert!(query.threshold.is_none());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn threshold_outside_unit_interval_is_invalid() {
        for value in [-0.1, 1.5] {
            let query = PlagiarismReportQuery { threshold: Some(value) };
            assert!(query.validate().is_err(), "{value} accepted");
        }
        assert!(PlagiarismReportQuery { threshold: Some(0.0) }.validate().is_ok());
        assert!(PlagiarismReportQuery { threshold: Some(1.0) }.validate().is_ok());
    }
}
