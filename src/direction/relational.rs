use std::time::Instant;

use tracing::debug;

use crate::{direction::Directions, relations::RelationIndex, repository::Repository};

/// Labels every stop in `repository` from the route relations referencing it.
/// Stops absent from the index get an empty label.
pub fn resolve(repository: &Repository, relations: &RelationIndex) -> Directions {
    debug!("Resolving relational directions...");
    let now = Instant::now();
    let mut matched = 0;
    let directions: Directions = repository
        .stops
        .iter()
        .map(|stop| {
            if relations.contains(&stop.id) {
                matched += 1;
            }
            (stop.id.clone(), relations.label(&stop.id))
        })
        .collect();
    debug!(
        "Matched {matched} of {} stops against {} relation entities in {:?}",
        repository.stops.len(),
        relations.len(),
        now.elapsed()
    );
    directions
}
