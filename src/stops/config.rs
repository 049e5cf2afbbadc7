use std::path::PathBuf;

/// Where the `direction` labels come from. The two sources are never mixed in
/// one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Position relative to the centroid of stops sharing a name.
    #[default]
    Geometric,
    /// `direction` tags of route relations, read from a GeoJSON file.
    Relational,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub auxiliary_path: Option<PathBuf>,
    pub strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "ybs_clean_with_id.csv".into(),
            output_path: "ybs_clean_with_id_and_direction.csv".into(),
            auxiliary_path: None,
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_input<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_relations<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.auxiliary_path = Some(path.into());
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}
