use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_unit() -> String {
    "USD".to_string()
}

/// One line item of spend attributed to a named service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub service: String,
    /// Signed amount, negative for credits.
    pub amount: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl CostRecord {
    pub fn new(service: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            amount,
            unit: unit.into(),
            date: None,
        }
    }

    pub fn is_credit(&self) -> bool {
        self.amount < 0.0
    }
}

/// Result body of a test-connection call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTestResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Aggregate returned by the multi-cloud summary endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DashboardSummary {
    pub total_cost: f64,
    pub cost_by_provider: BTreeMap<String, f64>,
    #[serde(default)]
    pub cost_by_service: Vec<CostRecord>,
    pub period: String,
    pub last_updated: String,
}

impl DashboardSummary {
    /// Percentage of the summary total attributed to `amount`.
    pub fn share_of_total(&self, amount: f64) -> f64 {
        percentage(amount, self.total_cost)
    }

    /// Services in the order the backend ranked them, capped at `limit`.
    pub fn top_services(&self, limit: usize) -> &[CostRecord] {
        let end = self.cost_by_service.len().min(limit);
        &self.cost_by_service[..end]
    }
}

/// `amount / total * 100`, or `0` when the total is zero. Never returns -0.0.
pub fn percentage(amount: f64, total: f64) -> f64 {
    if total == 0.0 || amount == 0.0 {
        0.0
    } else {
        amount / total * 100.0
    }
}

/// Formats an amount in dollars, marking negatives as credits.
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2} (credit)", amount.abs())
    } else {
        format!("${:.2}", amount.abs())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostStats {
    pub total: f64,
    pub record_count: usize,
    pub top_service: Option<CostRecord>,
    pub daily_average: Option<f64>,
}

/// The record list currently held by a page, with the aggregates it displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Costs {
    data: Vec<CostRecord>,
}

impl Costs {
    pub fn new(data: Vec<CostRecord>) -> Self {
        Self { data }
    }

    pub fn records(&self) -> &[CostRecord] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Sum of every record's amount; zero for an empty list.
    pub fn total(&self) -> f64 {
        // `Iterator::sum` on floats starts from -0.0
        self.data.iter().fold(0.0, |total, r| total + r.amount)
    }

    /// Percentage share of each record, in record order.
    pub fn shares(&self) -> Vec<f64> {
        let total = self.total();
        self.data.iter().map(|r| percentage(r.amount, total)).collect()
    }

    pub fn has_dates(&self) -> bool {
        self.data.iter().any(|r| r.date.is_some())
    }

    pub fn top_service(&self) -> Option<&CostRecord> {
        self.data.iter().max_by(|a, b| {
            a.amount
                .partial_cmp(&b.amount)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// The `limit` most expensive records, highest first.
    pub fn top_services(&self, limit: usize) -> Vec<CostRecord> {
        let mut sorted = self.data.clone();
        sorted.sort_by(|a, b| {
            b.amount
                .partial_cmp(&a.amount)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted.truncate(limit);
        sorted
    }

    /// Total divided by the number of days in the inclusive range.
    pub fn daily_average(&self, start_date: &str, end_date: &str) -> Option<f64> {
        let days = days_in_range(start_date, end_date)?;
        Some(self.total() / days as f64)
    }

    pub fn stats(&self, start_date: &str, end_date: &str) -> CostStats {
        CostStats {
            total: self.total(),
            record_count: self.len(),
            top_service: self.top_service().cloned(),
            daily_average: self.daily_average(start_date, end_date),
        }
    }

    /// Service names and amounts for the cost-by-service chart.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        let x_data = self.data.iter().map(|r| r.service.clone()).collect();
        let y_data = self.data.iter().map(|r| r.amount).collect();
        (x_data, y_data)
    }
}

/// Number of days from `start` to `end` inclusive, if both parse and are ordered.
pub fn days_in_range(start: &str, end: &str) -> Option<i64> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").ok()?;
    let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").ok()?;
    let days = (end - start).num_days() + 1;
    (days > 0).then_some(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Costs {
        Costs::new(vec![
            CostRecord::new("EC2", 45.20, "USD"),
            CostRecord::new("S3", 5.75, "USD"),
            CostRecord::new("Support", -0.95, "USD"),
        ])
    }

    #[test]
    fn test_total_of_empty_list_is_zero() {
        assert_eq!(Costs::default().total(), 0.0);
    }

    #[test]
    fn test_total_includes_credits() {
        let costs = Costs::new(vec![
            CostRecord::new("A", 10.0, "USD"),
            CostRecord::new("B", -3.0, "USD"),
        ]);
        assert_eq!(costs.total(), 7.0);
    }

    #[test]
    fn test_shares_over_zero_total() {
        let costs = Costs::new(vec![
            CostRecord::new("A", 5.0, "USD"),
            CostRecord::new("B", -5.0, "USD"),
        ]);
        assert_eq!(costs.shares(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_top_service_and_ranking() {
        let costs = sample();
        assert_eq!(costs.top_service().unwrap().service, "EC2");

        let top = costs.top_services(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].service, "EC2");
        assert_eq!(top[1].service, "S3");
    }

    #[test]
    fn test_daily_average() {
        let costs = Costs::new(vec![CostRecord::new("EC2", 31.0, "USD")]);
        assert_eq!(costs.daily_average("2025-07-01", "2025-07-31"), Some(1.0));
        assert_eq!(costs.daily_average("2025-07-31", "2025-07-01"), None);
        assert_eq!(costs.daily_average("not-a-date", "2025-07-01"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5), "$12.50");
        assert_eq!(format_amount(-3.0), "-$3.00 (credit)");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(-0.0), "$0.00");
    }

    #[test]
    fn test_zero_is_never_negative() {
        assert!(Costs::default().total().is_sign_positive());
        assert_eq!(format_amount(Costs::default().total()), "$0.00");
        assert_eq!(format!("{:.1}%", percentage(0.0, -5.0)), "0.0%");
        assert_eq!(format!("{:.1}%", percentage(-0.0, 5.0)), "0.0%");
    }

    #[test]
    fn test_record_unit_defaults_to_usd() {
        let record: CostRecord = serde_json::from_str(r#"{"service":"BigQuery","amount":2.5}"#)
            .unwrap();
        assert_eq!(record.unit, "USD");
        assert_eq!(record.date, None);
    }

    #[test]
    fn test_summary_share_guard() {
        let summary = DashboardSummary {
            total_cost: 0.0,
            cost_by_provider: BTreeMap::from([("aws".to_string(), 0.0)]),
            cost_by_service: vec![],
            period: "2025-07-01 to 2025-07-29".to_string(),
            last_updated: "2025-07-29T10:00:00".to_string(),
        };
        assert_eq!(summary.share_of_total(0.0), 0.0);
        assert!(summary.top_services(10).is_empty());
    }
}
