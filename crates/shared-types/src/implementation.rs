//! Implementation status vocabulary

use crate::vocabulary::{SrcMapping, StatusKey};

/// How far along the implementation of a control is
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ImplementationKey {
    Implemented,
    PartiallyImplemented,
    Planned,
    NotApplicable,
}

impl StatusKey for ImplementationKey {
    // The SSP also offers "Alternative implementation", which has no
    // OpenControl keyword and is left unmapped.
    const ALL: &'static [Self] = &[
        ImplementationKey::Implemented,
        ImplementationKey::PartiallyImplemented,
        ImplementationKey::Planned,
        ImplementationKey::NotApplicable,
    ];

    const FIELD: &'static str = "Implementation Status";

    fn mapping(self) -> SrcMapping {
        match self {
            ImplementationKey::Implemented => SrcMapping::new("Implemented", "complete"),
            ImplementationKey::PartiallyImplemented => {
                SrcMapping::new("Partially implemented", "partial")
            }
            ImplementationKey::Planned => SrcMapping::new("Planned", "planned"),
            ImplementationKey::NotApplicable => SrcMapping::new("Not applicable", "none"),
        }
    }
}
