use std::path::Path;

use serde::Serialize;

use crate::{
    repository::Repository,
    shared::{self, Identifiable},
    stops::{self, DIRECTION_FIELD, GEOMETRY_FIELD, ID_FIELD, NAME_FIELD},
};

/// Display name proposed for one labelled stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamedStop {
    pub original_name: String,
    pub new_name: String,
    /// Raw geometry text, passed through.
    pub coordinates: String,
    pub direction: String,
    pub id: String,
}

impl Identifiable for RenamedStop {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.original_name
    }
}

impl RenamedStop {
    pub fn is_renamed(&self) -> bool {
        self.original_name != self.new_name
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenameStats {
    pub total: usize,
    pub renamed: usize,
    pub kept: usize,
}

impl RenameStats {
    pub fn from_stops(stops: &[RenamedStop]) -> Self {
        let renamed = stops.iter().filter(|stop| stop.is_renamed()).count();
        Self {
            total: stops.len(),
            renamed,
            kept: stops.len() - renamed,
        }
    }
}

/// Reads a labelled stops CSV and proposes new names for it.
pub fn rename_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RenamedStop>, stops::Error> {
    let path = path.as_ref();
    let repository = Repository::load_from_path(path)?;
    repository.require_fields(
        &[ID_FIELD, NAME_FIELD, GEOMETRY_FIELD, DIRECTION_FIELD],
        &path.display().to_string(),
    )?;
    Ok(rename_stops(&repository))
}

/// Stops sharing a name get `"{name} ({direction})"` when their direction is
/// non-empty; everything else keeps its name. Output follows name groups in
/// first-seen order.
pub fn rename_stops(repository: &Repository) -> Vec<RenamedStop> {
    // Grouped afresh from the labelled rows, not from whatever grouping
    // produced the labels.
    let groups = shared::group_by_name(&repository.stops);
    let mut renamed = Vec::with_capacity(repository.stops.len());
    for group in groups.iter() {
        for &idx in group.members.iter() {
            let stop = &repository.stops[idx];
            let direction = stop.direction().to_string();
            let new_name = if group.is_singleton() || direction.is_empty() {
                group.name.clone()
            } else {
                format!("{} ({direction})", group.name)
            };
            renamed.push(RenamedStop {
                original_name: group.name.clone(),
                new_name,
                coordinates: stop.geometry.to_string(),
                direction,
                id: stop.id.to_string(),
            });
        }
    }
    renamed
}
