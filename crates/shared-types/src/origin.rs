//! Control origination vocabulary

use crate::vocabulary::{SrcMapping, StatusKey};

/// Who is responsible for implementing a control
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OriginKey {
    ServiceProviderCorporate,
    ServiceProviderSystemSpecific,
    ServiceProviderHybrid,
    ConfiguredByCustomer,
    ProvidedByCustomer,
    Shared,
    Inherited,
}

impl StatusKey for OriginKey {
    const ALL: &'static [Self] = &[
        OriginKey::ServiceProviderCorporate,
        OriginKey::ServiceProviderSystemSpecific,
        OriginKey::ServiceProviderHybrid,
        OriginKey::ConfiguredByCustomer,
        OriginKey::ProvidedByCustomer,
        OriginKey::Shared,
        OriginKey::Inherited,
    ];

    const FIELD: &'static str = "Control Origination";

    fn mapping(self) -> SrcMapping {
        match self {
            OriginKey::ServiceProviderCorporate => {
                SrcMapping::new("Service Provider Corporate", "service_provider_corporate")
            }
            OriginKey::ServiceProviderSystemSpecific => SrcMapping::new(
                "Service Provider System Specific",
                "service_provider_system_specific",
            ),
            OriginKey::ServiceProviderHybrid => {
                SrcMapping::new("Service Provider Hybrid", "service_provider_hybrid")
            }
            OriginKey::ConfiguredByCustomer => {
                SrcMapping::new("Configured by Customer", "configured_by_customer")
            }
            OriginKey::ProvidedByCustomer => {
                SrcMapping::new("Provided by Customer", "provided_by_customer")
            }
            OriginKey::Shared => SrcMapping::new("Shared", "shared"),
            OriginKey::Inherited => SrcMapping::new("Inherited from pre-existing", "inherited"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_fedramp_checkbox_labels() {
        let labels = [
            (
                "Service Provider Corporate",
                OriginKey::ServiceProviderCorporate,
            ),
            (
                "Service Provider System Specific",
                OriginKey::ServiceProviderSystemSpecific,
            ),
            (
                "Service Provider Hybrid (Corporate and System Specific)",
                OriginKey::ServiceProviderHybrid,
            ),
            (
                "Configured by Customer (Customer System Specific)",
                OriginKey::ConfiguredByCustomer,
            ),
            (
                "Provided by Customer (Customer System Specific)",
                OriginKey::ProvidedByCustomer,
            ),
            (
                "Shared (Service Provider and Customer Responsibility)",
                OriginKey::Shared,
            ),
            (
                "Inherited from pre-existing FedRAMP Authorization for Click here to enter text.",
                OriginKey::Inherited,
            ),
        ];

        for (label, expected) in labels {
            assert_eq!(
                OriginKey::detect_from_doc(&format!("\u{2610} {label}")),
                Some(expected),
                "label: {label}"
            );
        }
    }

    #[test]
    fn test_serde_uses_yaml_keywords() {
        let json = serde_json::to_string(&OriginKey::ConfiguredByCustomer).unwrap();
        assert_eq!(json, "\"configured_by_customer\"");
    }
}
