use serde::{Deserialize, Serialize};

/// Public clouds whose cost data the dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Provider {
    #[default]
    Aws,
    Azure,
    Gcp,
}

impl Provider {
    /// Returns the lowercase code used in API paths.
    pub fn code(&self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::Azure => "azure",
            Provider::Gcp => "gcp",
        }
    }

    /// Returns the short display name used in messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Aws => "AWS",
            Provider::Azure => "Azure",
            Provider::Gcp => "GCP",
        }
    }

    /// Returns the heading used on the provider's page.
    pub fn title(&self) -> &'static str {
        match self {
            Provider::Aws => "AWS Cost Analysis",
            Provider::Azure => "Azure Cost Analysis",
            Provider::Gcp => "Google Cloud Cost Analysis",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Provider::Aws => "☁️",
            Provider::Azure => "🔷",
            Provider::Gcp => "🌐",
        }
    }

    /// Returns the static description of this provider's page and endpoints.
    pub fn descriptor(&self) -> &'static ProviderDescriptor {
        match self {
            Provider::Aws => &AWS,
            Provider::Azure => &AZURE,
            Provider::Gcp => &GCP,
        }
    }

    /// All supported providers, in navigation order.
    pub fn all() -> &'static [Provider] {
        &[Provider::Aws, Provider::Azure, Provider::Gcp]
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How a field is rendered in the credentials form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Secret,
    Multiline,
    Date,
    Select,
}

/// Every form field that can end up in a query string or credentials body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CredentialField {
    StartDate,
    EndDate,
    RoleArn,
    AccessKey,
    SecretKey,
    SubscriptionId,
    TenantId,
    ClientId,
    ClientSecret,
    ProjectId,
    ServiceAccountKey,
    Granularity,
}

impl CredentialField {
    /// Returns the parameter name sent to the backend.
    pub fn key(&self) -> &'static str {
        match self {
            CredentialField::StartDate => "start_date",
            CredentialField::EndDate => "end_date",
            CredentialField::RoleArn => "role_arn",
            CredentialField::AccessKey => "access_key",
            CredentialField::SecretKey => "secret_key",
            CredentialField::SubscriptionId => "subscription_id",
            CredentialField::TenantId => "tenant_id",
            CredentialField::ClientId => "client_id",
            CredentialField::ClientSecret => "client_secret",
            CredentialField::ProjectId => "project_id",
            CredentialField::ServiceAccountKey => "service_account_key",
            CredentialField::Granularity => "granularity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CredentialField::StartDate => "Start Date",
            CredentialField::EndDate => "End Date",
            CredentialField::RoleArn => "Role ARN",
            CredentialField::AccessKey => "Access Key",
            CredentialField::SecretKey => "Secret Key",
            CredentialField::SubscriptionId => "Subscription ID",
            CredentialField::TenantId => "Tenant ID",
            CredentialField::ClientId => "Client ID",
            CredentialField::ClientSecret => "Client Secret",
            CredentialField::ProjectId => "Project ID",
            CredentialField::ServiceAccountKey => "Service Account Key",
            CredentialField::Granularity => "Granularity",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            CredentialField::RoleArn => "arn:aws:iam::123456789012:role/CloudSpyCostRole",
            CredentialField::AccessKey => "AKIA...",
            CredentialField::SubscriptionId | CredentialField::TenantId => {
                "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
            }
            CredentialField::ClientId => "Application (client) ID",
            CredentialField::ClientSecret => "Client secret value",
            CredentialField::SecretKey => "Secret access key",
            CredentialField::ProjectId => "my-gcp-project-id",
            CredentialField::ServiceAccountKey => r#"{"type": "service_account", ...}"#,
            _ => "",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            CredentialField::StartDate | CredentialField::EndDate => InputKind::Date,
            CredentialField::SecretKey | CredentialField::ClientSecret => InputKind::Secret,
            CredentialField::ServiceAccountKey => InputKind::Multiline,
            CredentialField::Granularity => InputKind::Select,
            _ => InputKind::Text,
        }
    }
}

/// Accent colours for a provider's page and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderTheme {
    pub accent: &'static str,
    pub palette: [&'static str; 5],
}

/// Static configuration that drives the generic provider page.
#[derive(Debug, PartialEq)]
pub struct ProviderDescriptor {
    pub provider: Provider,
    /// Query fields for the costs endpoint, in the order they are sent.
    pub cost_fields: &'static [CredentialField],
    /// Fields included in the test-connection credentials body.
    pub test_fields: &'static [CredentialField],
    /// Fields that must be non-empty before a request is dispatched.
    pub required: &'static [CredentialField],
    /// Granularity values accepted by the backend; the first is the default.
    pub granularities: &'static [&'static str],
    pub theme: ProviderTheme,
}

impl ProviderDescriptor {
    /// Credential inputs shown in the form (everything but dates and granularity).
    pub fn credential_inputs(&self) -> Vec<CredentialField> {
        let mut fields: Vec<CredentialField> = self
            .cost_fields
            .iter()
            .chain(self.test_fields)
            .copied()
            .filter(|f| {
                !matches!(
                    f,
                    CredentialField::StartDate
                        | CredentialField::EndDate
                        | CredentialField::Granularity
                )
            })
            .collect();
        let mut seen = std::collections::HashSet::new();
        fields.retain(|f| seen.insert(*f));
        fields
    }

    pub fn is_required(&self, field: CredentialField) -> bool {
        self.required.contains(&field)
    }

    pub fn default_granularity(&self) -> Option<&'static str> {
        self.granularities.first().copied()
    }
}

static AWS: ProviderDescriptor = ProviderDescriptor {
    provider: Provider::Aws,
    cost_fields: &[
        CredentialField::StartDate,
        CredentialField::EndDate,
        CredentialField::RoleArn,
    ],
    test_fields: &[
        CredentialField::RoleArn,
        CredentialField::AccessKey,
        CredentialField::SecretKey,
    ],
    required: &[CredentialField::RoleArn],
    granularities: &[],
    theme: ProviderTheme {
        accent: "#ff9900",
        palette: ["#ff9900", "#ff6b35", "#f7931e", "#ffb84d", "#ffcc80"],
    },
};

static AZURE: ProviderDescriptor = ProviderDescriptor {
    provider: Provider::Azure,
    cost_fields: &[
        CredentialField::StartDate,
        CredentialField::EndDate,
        CredentialField::SubscriptionId,
        CredentialField::TenantId,
        CredentialField::ClientId,
        CredentialField::ClientSecret,
        CredentialField::Granularity,
    ],
    test_fields: &[
        CredentialField::TenantId,
        CredentialField::ClientId,
        CredentialField::ClientSecret,
        CredentialField::SubscriptionId,
    ],
    required: &[CredentialField::SubscriptionId],
    granularities: &["Monthly", "Daily"],
    theme: ProviderTheme {
        accent: "#0078d4",
        palette: ["#0078d4", "#40e0d0", "#00bcf2", "#5c2d91", "#68217a"],
    },
};

static GCP: ProviderDescriptor = ProviderDescriptor {
    provider: Provider::Gcp,
    cost_fields: &[
        CredentialField::StartDate,
        CredentialField::EndDate,
        CredentialField::ProjectId,
        CredentialField::ServiceAccountKey,
        CredentialField::Granularity,
    ],
    test_fields: &[
        CredentialField::ProjectId,
        CredentialField::ServiceAccountKey,
    ],
    required: &[CredentialField::ProjectId],
    granularities: &["MONTHLY", "DAILY"],
    theme: ProviderTheme {
        accent: "#34a853",
        palette: ["#34a853", "#4285f4", "#fbbc05", "#ea4335", "#9aa0a6"],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_matches_provider() {
        for provider in Provider::all() {
            assert_eq!(provider.descriptor().provider, *provider);
        }
    }

    #[test]
    fn test_cost_fields_start_with_date_range() {
        for provider in Provider::all() {
            let fields = provider.descriptor().cost_fields;
            assert_eq!(fields[0], CredentialField::StartDate);
            assert_eq!(fields[1], CredentialField::EndDate);
        }
    }

    #[test]
    fn test_credential_inputs_are_unique() {
        let inputs = Provider::Azure.descriptor().credential_inputs();
        assert_eq!(
            inputs,
            vec![
                CredentialField::SubscriptionId,
                CredentialField::TenantId,
                CredentialField::ClientId,
                CredentialField::ClientSecret,
            ]
        );

        let aws = Provider::Aws.descriptor().credential_inputs();
        assert_eq!(
            aws,
            vec![
                CredentialField::RoleArn,
                CredentialField::AccessKey,
                CredentialField::SecretKey,
            ]
        );
    }

    #[test]
    fn test_default_granularity() {
        assert_eq!(Provider::Aws.descriptor().default_granularity(), None);
        assert_eq!(
            Provider::Gcp.descriptor().default_granularity(),
            Some("MONTHLY")
        );
    }
}
