use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("decode config failed, {0}")]
    Decode(#[from] serde_yaml::Error),
}

const fn default_dedot() -> bool {
    true
}

/// Controls how keys are written into the generated document.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DedotConfig {
    /// Replace dots in keys with `_`, so `app.kubernetes.io/name` stays a
    /// single field instead of becoming `app` -> `kubernetes` -> `io/name`.
    #[serde(default = "default_dedot")]
    pub dedot: bool,
}

impl Default for DedotConfig {
    fn default() -> Self {
        Self {
            dedot: default_dedot(),
        }
    }
}

/// Identity of the cluster the objects come from, reported as ECS
/// `orchestrator.cluster.*` fields.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterConfig {
    pub name: Option<String>,

    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Only these labels are added when it is not empty.
    pub include_labels: Vec<String>,

    /// Labels removed from the generated label map.
    pub exclude_labels: Vec<String>,

    /// Annotations are not added unless they are listed here.
    pub include_annotations: Vec<String>,

    pub labels: DedotConfig,

    pub annotations: DedotConfig,

    pub cluster: ClusterConfig,
}

impl Config {
    pub fn from_yaml(input: &str) -> Result<Self, Error> {
        serde_yaml::from_str(input).map_err(Into::into)
    }
}
