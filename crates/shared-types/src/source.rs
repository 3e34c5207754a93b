use std::fmt;

/// Which side of the reconciliation a piece of text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Source {
    /// The System Security Plan (Word document)
    Ssp,
    /// The OpenControl YAML workspace
    Yaml,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Ssp => "SSP",
            Source::Yaml => "YAML",
        }
    }

    /// The opposite side
    pub fn other(&self) -> Source {
        match self {
            Source::Ssp => Source::Yaml,
            Source::Yaml => Source::Ssp,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
