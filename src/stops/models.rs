use std::sync::Arc;

use crate::shared::{Coordinate, GeometryError, Identifiable};

pub const ID_FIELD: &str = "@id";
pub const NAME_FIELD: &str = "name";
pub const GEOMETRY_FIELD: &str = "geometry";
pub const DIRECTION_FIELD: &str = "direction";

/// One row of a stops CSV.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StopRecord {
    pub index: usize,
    pub id: Arc<str>,
    pub name: Arc<str>,
    /// Raw `POINT (lon lat)` text, kept verbatim for output.
    pub geometry: Arc<str>,
    /// `None` when the file has no direction column at all.
    pub direction: Option<String>,
    /// Every other column in file order.
    pub passthrough: Box<[(Arc<str>, String)]>,
}

impl Identifiable for StopRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl StopRecord {
    pub fn coordinate(&self) -> Result<Coordinate, GeometryError> {
        self.geometry.parse()
    }

    pub fn direction(&self) -> &str {
        self.direction.as_deref().unwrap_or_default()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            ID_FIELD => Some(&self.id),
            NAME_FIELD => Some(&self.name),
            GEOMETRY_FIELD => Some(&self.geometry),
            DIRECTION_FIELD => self.direction.as_deref(),
            _ => self
                .passthrough
                .iter()
                .find(|(field, _)| field.as_ref() == name)
                .map(|(_, value)| value.as_str()),
        }
    }
}
