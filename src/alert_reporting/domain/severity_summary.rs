use super::Alert;

/// Count of alerts per advisory severity
///
/// GitHub reports `critical`, `high`, `medium` and `low`; `moderate` is
/// accepted as an alias of `medium`. Anything else lands in `other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeveritySummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub other: usize,
}

impl SeveritySummary {
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        let mut summary = Self::default();
        for alert in alerts {
            match alert
                .security_advisory()
                .severity()
                .to_ascii_lowercase()
                .as_str()
            {
                "critical" => summary.critical += 1,
                "high" => summary.high += 1,
                "medium" | "moderate" => summary.medium += 1,
                "low" => summary.low += 1,
                _ => summary.other += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert_reporting::domain::{Dependency, SecurityAdvisory};

    fn alert_with_severity(severity: &str) -> Alert {
        Alert::new(
            Dependency::default(),
            SecurityAdvisory::new(severity.to_string(), String::new(), vec![]),
            String::new(),
            "open".to_string(),
        )
    }

    #[test]
    fn test_counts_by_severity() {
        let alerts: Vec<Alert> = ["critical", "HIGH", "high", "moderate", "medium", "low", ""]
            .iter()
            .map(|s| alert_with_severity(s))
            .collect();

        let summary = SeveritySummary::from_alerts(&alerts);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.high, 2);
        assert_eq!(summary.medium, 2);
        assert_eq!(summary.low, 1);
        assert_eq!(summary.other, 1);
        assert_eq!(summary.total(), 7);
    }

    #[test]
    fn test_empty() {
        assert_eq!(SeveritySummary::from_alerts(&[]).total(), 0);
    }
}
