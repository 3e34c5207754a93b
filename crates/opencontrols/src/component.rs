//! OpenControl component schema (3.x)

use serde::{Deserialize, Serialize};

/// One `component.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub schema_version: Option<String>,
    #[serde(default)]
    pub responsible_role: Option<String>,
    #[serde(default)]
    pub satisfies: Vec<Satisfies>,
}

impl Component {
    /// Parse a component from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Name shown in the SSP, falling back to the component key
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.key
        } else {
            &self.name
        }
    }
}

/// How a component satisfies one control
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Satisfies {
    #[serde(default)]
    pub standard_key: String,
    pub control_key: String,
    /// Schema 3.0 single status
    #[serde(default)]
    pub implementation_status: Option<String>,
    /// Schema 3.1 status list
    #[serde(default)]
    pub implementation_statuses: Vec<String>,
    #[serde(default)]
    pub control_origin: Option<String>,
    #[serde(default)]
    pub control_origins: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<Section>,
    #[serde(default)]
    pub narrative: Vec<Section>,
}

impl Satisfies {
    /// Implementation status keywords from either schema revision
    pub fn status_keywords(&self) -> impl Iterator<Item = &str> {
        self.implementation_status
            .iter()
            .chain(self.implementation_statuses.iter())
            .map(String::as_str)
    }

    /// Control origin keywords from either schema revision
    pub fn origin_keywords(&self) -> impl Iterator<Item = &str> {
        self.control_origin
            .iter()
            .chain(self.control_origins.iter())
            .map(String::as_str)
    }
}

/// A keyed block of text: a parameter value or a narrative part
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub text: String,
}
