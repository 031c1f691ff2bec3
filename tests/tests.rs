#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use cloudspy_dashboard::hooks::use_connection_test::ConnectionStatus;
    use cloudspy_dashboard::hooks::use_page::Page;
    use cloudspy_dashboard::models::{
        cost::{ConnectionTestResult, CostRecord, Costs, DashboardSummary, format_amount},
        error::AppError,
        form::{ProviderForm, SummaryForm},
        provider::{CredentialField, Provider},
        view_state::{CostViewState, TokenCounter},
    };
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 29).unwrap()
    }

    // Helper function to create a typical AWS response
    fn create_test_costs() -> Costs {
        Costs::new(vec![
            CostRecord::new("Amazon EC2", 45.20, "USD"),
            CostRecord::new("Amazon S3", 5.75, "USD"),
            CostRecord::new("AWS Support", -3.00, "USD"),
        ])
    }

    // ===== Cost Record Tests =====

    #[test]
    fn test_cost_record_deserialization() {
        let record: CostRecord = serde_json::from_value(json!({
            "service": "Compute Engine",
            "amount": 12.5,
            "unit": "USD",
            "date": "2025-07-01"
        }))
        .unwrap();

        assert_eq!(record.service, "Compute Engine");
        assert_eq!(record.amount, 12.5);
        assert_eq!(record.date.as_deref(), Some("2025-07-01"));
    }

    #[test]
    fn test_cost_record_unit_defaults_to_usd() {
        let record: CostRecord =
            serde_json::from_value(json!({"service": "Storage", "amount": 1.0})).unwrap();
        assert_eq!(record.unit, "USD");
        assert!(record.date.is_none());
    }

    #[test]
    fn test_cost_record_credit() {
        assert!(CostRecord::new("Credit", -1.0, "USD").is_credit());
        assert!(!CostRecord::new("EC2", 0.0, "USD").is_credit());
    }

    // ===== Costs Tests =====

    #[test]
    fn test_costs_total_includes_credits() {
        let costs = create_test_costs();
        assert!((costs.total() - 47.95).abs() < 1e-9);
    }

    #[test]
    fn test_costs_top_service() {
        let costs = create_test_costs();
        assert_eq!(costs.top_service().unwrap().service, "Amazon EC2");

        let top = costs.top_services(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[1].service, "Amazon S3");
    }

    #[test]
    fn test_costs_shares_with_zero_total() {
        let costs = Costs::new(vec![
            CostRecord::new("A", 5.0, "USD"),
            CostRecord::new("B", -5.0, "USD"),
        ]);
        assert_eq!(costs.shares(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_costs_stats_daily_average() {
        let costs = Costs::new(vec![CostRecord::new("EC2", 31.0, "USD")]);
        let stats = costs.stats("2025-07-01", "2025-07-31");
        assert_eq!(stats.record_count, 1);
        assert_eq!(stats.daily_average, Some(1.0));

        let stats = costs.stats("2025-07-31", "2025-07-01");
        assert_eq!(stats.daily_average, None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5), "$12.50");
        assert_eq!(format_amount(-3.0), "-$3.00 (credit)");
    }

    // ===== Dashboard Summary Tests =====

    #[test]
    fn test_dashboard_summary_deserialization() {
        let summary: DashboardSummary = serde_json::from_value(json!({
            "total_cost": 200.0,
            "cost_by_provider": {"aws": 150.0, "gcp": 50.0},
            "cost_by_service": [
                {"service": "EC2", "amount": 120.0, "unit": "USD"},
                {"service": "BigQuery", "amount": 50.0, "unit": "USD"}
            ],
            "period": "2025-07-01 to 2025-07-29",
            "last_updated": "2025-07-29T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(summary.cost_by_provider.len(), 2);
        assert_eq!(summary.share_of_total(summary.cost_by_provider["aws"]), 75.0);
        assert_eq!(summary.top_services(1)[0].service, "EC2");
        assert_eq!(summary.top_services(10).len(), 2);
    }

    // ===== Form Tests =====

    #[test]
    fn test_provider_form_defaults() {
        let form = ProviderForm::new(Provider::Azure, today());
        assert_eq!(form.get(CredentialField::StartDate), "2025-07-01");
        assert_eq!(form.get(CredentialField::EndDate), "2025-07-29");
        assert_eq!(form.get(CredentialField::Granularity), "Monthly");
    }

    #[test]
    fn test_required_guard_per_provider() {
        for (provider, label) in [
            (Provider::Aws, "Role ARN"),
            (Provider::Azure, "Subscription ID"),
            (Provider::Gcp, "Project ID"),
        ] {
            let form = ProviderForm::new(provider, today());
            assert_eq!(form.check_required(), Err(AppError::MissingField(label)));
            assert_eq!(
                form.check_required().unwrap_err().to_string(),
                format!("{label} is required")
            );
        }
    }

    #[test]
    fn test_summary_form_params_order() {
        let form = SummaryForm::new(today());
        let keys: Vec<_> = form.params().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys[0], "start_date");
        assert_eq!(keys[1], "end_date");
        assert_eq!(keys.last(), Some(&"gcp_service_account_key"));
    }

    // ===== Connection Status Tests =====

    #[test]
    fn test_connection_status_success_default_message() {
        let status = ConnectionStatus::from_result(Ok(ConnectionTestResult {
            success: true,
            message: None,
        }));
        assert_eq!(
            status.message().as_deref(),
            Some("✅ Connection successful!")
        );
    }

    #[test]
    fn test_connection_status_failure() {
        let status = ConnectionStatus::from_result(Ok(ConnectionTestResult {
            success: false,
            message: Some("AccessDenied".to_string()),
        }));
        assert_eq!(
            status,
            ConnectionStatus::Failed("Connection failed: AccessDenied".to_string())
        );

        let status = ConnectionStatus::from_result(Err(AppError::Transport(
            "Failed to test GCP connection".to_string(),
        )));
        assert_eq!(
            status.message().as_deref(),
            Some("❌ Connection failed: Failed to test GCP connection")
        );
    }

    #[test]
    fn test_connection_result_missing_success_is_false() {
        let result: ConnectionTestResult =
            serde_json::from_value(json!({"message": "hi"})).unwrap();
        assert!(!result.success);
    }

    // ===== View State Tests =====

    #[test]
    fn test_cost_view_state_default_is_empty() {
        let state = CostViewState::default();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert!(state.costs.is_empty());
        assert_eq!(format_amount(state.total_cost()), "$0.00");
    }

    #[test]
    fn test_cost_view_state_latest_token_wins() {
        let tokens = TokenCounter::default();
        let mut state = CostViewState::default();

        let first = tokens.issue();
        state.start(first);
        let second = tokens.issue();
        state.start(second);

        assert!(state.complete(
            second,
            Ok(json!([{"service": "S3", "amount": 5.75, "unit": "USD"}]))
        ));
        assert!(!state.complete(first, Ok(json!([]))));

        assert_eq!(state.costs.len(), 1);
        assert!(!state.loading);
    }

    #[test]
    fn test_cost_view_state_error_clears_records() {
        let tokens = TokenCounter::default();
        let mut state = CostViewState::default();

        let token = tokens.issue();
        state.start(token);
        state.complete(token, Ok(json!([{"service": "S3", "amount": 1.0}])));

        let token = tokens.issue();
        state.start(token);
        state.complete(token, Ok(json!({"error": "Invalid credentials"})));

        assert!(state.costs.is_empty());
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_cost_view_state_null_body() {
        let tokens = TokenCounter::default();
        let mut state = CostViewState::default();

        let token = tokens.issue();
        state.start(token);
        state.complete(token, Ok(serde_json::Value::Null));

        assert_eq!(
            state.error.as_deref(),
            Some("Unexpected response from server")
        );
    }

    #[test]
    fn test_cost_view_state_equality() {
        let mut a = CostViewState::default();
        let b = CostViewState::default();
        assert_eq!(a, b);

        a.reject(&AppError::MissingField("Role ARN"));
        assert_ne!(a, b);
    }

    // ===== Page Tests =====

    #[test]
    fn test_page_navigation_order() {
        let pages = Page::all();
        assert_eq!(pages.len(), 5);
        assert_eq!(pages[0], Page::Home);
        assert_eq!(pages[2], Page::Provider(Provider::Aws));
        assert_eq!(pages[4].label(), "GCP");
    }

    #[test]
    fn test_page_serialization() {
        let json = serde_json::to_string(&Page::Provider(Provider::Azure)).unwrap();
        let page: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(page, Page::Provider(Provider::Azure));
    }
}
