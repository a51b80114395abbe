/// Worklist iteration limit used when a config does not set one.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Per-analysis settings.
///
/// ```
/// use cprop_dataflow::AnalysisConfig;
///
/// let config = AnalysisConfig::new("constprop").with_max_iterations(64);
/// assert_eq!(config.id(), "constprop");
/// assert_eq!(config.max_iterations(), 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    id: String,
    #[cfg_attr(feature = "serde", serde(default = "default_max_iterations"))]
    max_iterations: usize,
}

#[cfg(feature = "serde")]
fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl AnalysisConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Configure the maximum number of worklist pops in one solver run.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}
