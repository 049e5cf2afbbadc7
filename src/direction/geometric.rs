use std::{fmt::Display, time::Instant};

use tracing::debug;

use crate::{
    direction::Directions,
    repository::Repository,
    shared::{CENTERED_THRESHOLD_DEGREES, Coordinate, Offset},
    stops,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latitudinal {
    North,
    South,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Longitudinal {
    East,
    West,
}

/// Where a stop sits relative to the centroid of its name group. Either term is
/// absent when the offset on that axis is within the threshold.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub north_south: Option<Latitudinal>,
    pub east_west: Option<Longitudinal>,
}

impl Heading {
    pub const CENTERED: Self = Self {
        north_south: None,
        east_west: None,
    };

    /// Strict comparison: an offset exactly on the threshold stays centered.
    pub fn from_offset(offset: Offset) -> Self {
        let north_south = if offset.latitude.abs() > CENTERED_THRESHOLD_DEGREES {
            if offset.latitude > 0.0 {
                Some(Latitudinal::North)
            } else {
                Some(Latitudinal::South)
            }
        } else {
            None
        };
        let east_west = if offset.longitude.abs() > CENTERED_THRESHOLD_DEGREES {
            if offset.longitude > 0.0 {
                Some(Longitudinal::East)
            } else {
                Some(Longitudinal::West)
            }
        } else {
            None
        };
        Self {
            north_south,
            east_west,
        }
    }

    pub fn relative_to(coordinate: &Coordinate, centroid: &Coordinate) -> Self {
        Self::from_offset(coordinate.offset_from(centroid))
    }

    pub fn is_centered(&self) -> bool {
        self.north_south.is_none() && self.east_west.is_none()
    }
}

impl Display for Latitudinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Latitudinal::North => f.write_str("North"),
            Latitudinal::South => f.write_str("South"),
        }
    }
}

impl Display for Longitudinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Longitudinal::East => f.write_str("East"),
            Longitudinal::West => f.write_str("West"),
        }
    }
}

/// `North-East`, `South`, `West`, or empty when centered.
impl Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.north_south, self.east_west) {
            (Some(ns), Some(ew)) => write!(f, "{ns}-{ew}"),
            (Some(ns), None) => write!(f, "{ns}"),
            (None, Some(ew)) => write!(f, "{ew}"),
            (None, None) => Ok(()),
        }
    }
}

/// Labels every stop by its position relative to the other stops sharing its
/// name. Stops with a unique name get an empty label.
pub fn resolve(repository: &Repository) -> Result<Directions, stops::Error> {
    debug!("Resolving geometric directions...");
    let now = Instant::now();
    let mut directions = Directions::with_capacity(repository.stops.len());
    for group in repository.groups() {
        let members = group
            .members
            .iter()
            .map(|&idx| {
                let stop = &repository.stops[idx];
                stop
                    .coordinate()
                    .map(|coordinate| (stop, coordinate))
                    .map_err(|source| stops::Error::Geometry {
                        id: stop.id.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let [(stop, _)] = members.as_slice() {
            directions.insert(stop.id.clone(), String::new());
            continue;
        }

        let coordinates: Vec<Coordinate> = members.iter().map(|(_, c)| *c).collect();
        let Some(centroid) = Coordinate::centroid(&coordinates) else {
            continue;
        };
        members.into_iter().for_each(|(stop, coordinate)| {
            let heading = Heading::relative_to(&coordinate, &centroid);
            directions.insert(stop.id.clone(), heading.to_string());
        });
    }
    debug!("Resolving geometric directions took {:?}", now.elapsed());
    Ok(directions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(latitude: f64, longitude: f64) -> Offset {
        Offset {
            latitude,
            longitude,
        }
    }

    #[test]
    fn combines_both_axes() {
        assert_eq!(Heading::from_offset(offset(0.001, 0.001)).to_string(), "North-East");
        assert_eq!(Heading::from_offset(offset(-0.001, -0.001)).to_string(), "South-West");
        assert_eq!(Heading::from_offset(offset(0.001, -0.001)).to_string(), "North-West");
    }

    #[test]
    fn single_axis() {
        assert_eq!(Heading::from_offset(offset(0.0, 0.002)).to_string(), "East");
        assert_eq!(Heading::from_offset(offset(-0.002, 0.00005)).to_string(), "South");
    }

    #[test]
    fn threshold_is_strict() {
        let heading = Heading::from_offset(offset(
            CENTERED_THRESHOLD_DEGREES,
            -CENTERED_THRESHOLD_DEGREES,
        ));
        assert!(heading.is_centered());
        assert_eq!(heading, Heading::CENTERED);
        assert_eq!(heading.to_string(), "");
    }
}
