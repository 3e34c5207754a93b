//! Per-control queries over the loaded components

use crate::component::{Component, Satisfies};
use crate::error::OpenControlError;
use shared_types::{ImplementationKey, OriginKey, StatusKey};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const COMPONENTS_DIR: &str = "components";
const COMPONENT_FILE: &str = "component.yaml";

/// Options for loading a workspace
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Only consider `satisfies` entries for this standard (e.g. "NIST-800-53")
    pub standard_key: Option<String>,
}

/// The set of status keys the YAML marks as checked for a control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSelection<K: StatusKey> {
    checked: BTreeSet<K>,
}

impl<K: StatusKey> StatusSelection<K> {
    /// Resolve YAML keywords, warning about any that are not in the vocabulary
    fn from_keywords<'a>(control: &str, keywords: impl Iterator<Item = &'a str>) -> Self {
        let mut checked = BTreeSet::new();
        for keyword in keywords {
            match K::from_yaml(keyword) {
                Some(key) => {
                    checked.insert(key);
                }
                None => warn!(
                    control,
                    keyword,
                    field = K::FIELD,
                    "Unknown OpenControl keyword"
                ),
            }
        }
        Self { checked }
    }

    pub fn checked(&self) -> &BTreeSet<K> {
        &self.checked
    }
}

pub type ControlOrigins = StatusSelection<OriginKey>;
pub type ImplementationStatuses = StatusSelection<ImplementationKey>;

impl StatusSelection<OriginKey> {
    pub fn checked_origins(&self) -> &BTreeSet<OriginKey> {
        &self.checked
    }
}

impl StatusSelection<ImplementationKey> {
    pub fn checked_implementation_statuses(&self) -> &BTreeSet<ImplementationKey> {
        &self.checked
    }
}

/// Aggregated OpenControl data
#[derive(Debug, Clone, Default)]
pub struct OpenControlData {
    components: Vec<Component>,
    options: LoadOptions,
}

impl OpenControlData {
    pub fn new(components: Vec<Component>, options: LoadOptions) -> Self {
        Self {
            components,
            options,
        }
    }

    /// Load `<dir>/components/*/component.yaml`
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, OpenControlError> {
        Self::load_with(dir, LoadOptions::default())
    }

    pub fn load_with(
        dir: impl AsRef<Path>,
        options: LoadOptions,
    ) -> Result<Self, OpenControlError> {
        let components_dir = dir.as_ref().join(COMPONENTS_DIR);
        if !components_dir.is_dir() {
            return Err(OpenControlError::MissingComponents(
                dir.as_ref().to_path_buf(),
            ));
        }

        let entries = std::fs::read_dir(&components_dir).map_err(|source| OpenControlError::Io {
            path: components_dir.clone(),
            source,
        })?;
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| OpenControlError::Io {
                path: components_dir.clone(),
                source,
            })?;
            let path = entry.path().join(COMPONENT_FILE);
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut components = Vec::with_capacity(paths.len());
        for path in paths {
            let yaml = std::fs::read_to_string(&path).map_err(|source| OpenControlError::Io {
                path: path.clone(),
                source,
            })?;
            let component = Component::from_yaml(&yaml).map_err(|source| OpenControlError::Yaml {
                path: path.clone(),
                source,
            })?;
            debug!(
                component = component.display_name(),
                path = %path.display(),
                "Loaded component"
            );
            components.push(component);
        }

        info!(
            count = components.len(),
            dir = %dir.as_ref().display(),
            "Loaded OpenControl components"
        );
        Ok(Self::new(components, options))
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Every (component, satisfies) pair for the control, in load order
    fn justifications<'a>(
        &'a self,
        control: &'a str,
    ) -> impl Iterator<Item = (&'a Component, &'a Satisfies)> + 'a {
        self.components.iter().flat_map(move |component| {
            component
                .satisfies
                .iter()
                .filter(move |satisfies| {
                    same_control(&satisfies.control_key, control)
                        && self
                            .options
                            .standard_key
                            .as_deref()
                            .map_or(true, |standard| satisfies.standard_key == standard)
                })
                .map(move |satisfies| (component, satisfies))
        })
    }

    /// `"<component>: <role>"` for each component with a role, joined by `"; "`.
    /// Whitespace is collapsed the same way the SSP side is read.
    pub fn get_responsible_roles(&self, control: &str) -> String {
        let mut seen: Vec<&str> = Vec::new();
        let mut roles = Vec::new();
        for (component, _) in self.justifications(control) {
            let name = component.display_name();
            if seen.contains(&name) {
                continue;
            }
            seen.push(name);
            if let Some(role) = component.responsible_role.as_deref() {
                roles.push(format!(
                    "{}: {}",
                    collapse_space(name),
                    collapse_space(role)
                ));
            }
        }
        roles.join("; ")
    }

    /// Parameter text for a document parameter id such as `AC-2(j)`.
    /// A YAML key matches when it equals the id or the id's trailing `(<key>)`.
    pub fn get_parameter(&self, control: &str, id: &str) -> String {
        let texts: Vec<&str> = self
            .justifications(control)
            .flat_map(|(_, satisfies)| satisfies.parameters.iter())
            .filter(|parameter| {
                parameter
                    .key
                    .as_deref()
                    .is_some_and(|key| parameter_key_matches(key, id))
            })
            .map(|parameter| parameter.text.trim())
            .collect();
        texts.join("; ")
    }

    /// Narrative text for a part key (`None` for a control without parts)
    pub fn get_narrative(&self, control: &str, part: Option<&str>) -> String {
        let texts: Vec<&str> = self
            .justifications(control)
            .flat_map(|(_, satisfies)| satisfies.narrative.iter())
            .filter(|section| {
                let key = section.key.as_deref().filter(|key| !key.is_empty());
                key == part
            })
            .map(|section| section.text.trim())
            .collect();
        texts.join("\n\n")
    }

    pub fn get_control_origins(&self, control: &str) -> ControlOrigins {
        StatusSelection::from_keywords(
            control,
            self.justifications(control)
                .flat_map(|(_, satisfies)| satisfies.origin_keywords()),
        )
    }

    pub fn get_implementation_statuses(&self, control: &str) -> ImplementationStatuses {
        StatusSelection::from_keywords(
            control,
            self.justifications(control)
                .flat_map(|(_, satisfies)| satisfies.status_keywords()),
        )
    }
}

/// Trim and collapse whitespace runs, e.g. the newline a `>` block scalar leaves
fn collapse_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_spaces(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// "AC-2 (1)" and "AC-2(1)" name the same control
fn same_control(a: &str, b: &str) -> bool {
    strip_spaces(a).eq_ignore_ascii_case(&strip_spaces(b))
}

fn parameter_key_matches(key: &str, id: &str) -> bool {
    let key = strip_spaces(key);
    let id = strip_spaces(id);
    key == id || id.ends_with(&format!("({})", key))
}
