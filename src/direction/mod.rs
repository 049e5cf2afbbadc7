use std::{collections::HashMap, sync::Arc};

pub mod geometric;
pub mod relational;

pub use geometric::{Heading, Latitudinal, Longitudinal};

use crate::{
    relations::RelationIndex,
    repository::Repository,
    stops::{self, Config, Strategy},
};

/// Stop id to direction label.
pub type Directions = HashMap<Arc<str>, String>;

/// Resolves labels with the strategy chosen in `config`.
pub fn resolve(repository: &Repository, config: &Config) -> Result<Directions, stops::Error> {
    match config.strategy {
        Strategy::Geometric => geometric::resolve(repository),
        Strategy::Relational => {
            let path = config
                .auxiliary_path
                .as_ref()
                .ok_or(stops::Error::MissingAuxiliaryPath)?;
            let relations = RelationIndex::load_from_path(path)?;
            Ok(relational::resolve(repository, &relations))
        }
    }
}
