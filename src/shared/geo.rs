use std::{fmt::Display, iter::Sum, num::ParseFloatError, str::FromStr};

use thiserror::Error;

/// Offsets at or below this many degrees (about 11 meters) count as centered.
pub const CENTERED_THRESHOLD_DEGREES: f64 = 0.0001;

const POINT_PREFIX: &str = "POINT (";
const POINT_SUFFIX: &str = ")";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("geometry {0:?} is not a POINT")]
    NotAPoint(String),
    #[error("geometry {0:?} must contain exactly two coordinates")]
    WrongArity(String),
    #[error("invalid coordinate {value:?}: {source}")]
    InvalidNumber {
        value: String,
        source: ParseFloatError,
    },
    #[error("coordinate {0:?} is not finite")]
    NonFinite(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

/// Parses the `POINT (lon lat)` text used by Overpass exports.
/// Note the axis order: longitude comes first.
impl FromStr for Coordinate {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix(POINT_PREFIX)
            .and_then(|rest| rest.strip_suffix(POINT_SUFFIX))
            .ok_or_else(|| GeometryError::NotAPoint(s.to_string()))?;

        let mut tokens = body.split_whitespace();
        let (Some(lon), Some(lat), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(GeometryError::WrongArity(s.to_string()));
        };
        Ok(Self {
            latitude: parse_degrees(lat)?,
            longitude: parse_degrees(lon)?,
        })
    }
}

fn parse_degrees(value: &str) -> Result<f64, GeometryError> {
    let degrees = value
        .parse::<f64>()
        .map_err(|source| GeometryError::InvalidNumber {
            value: value.to_string(),
            source,
        })?;
    if degrees.is_finite() {
        Ok(degrees)
    } else {
        Err(GeometryError::NonFinite(value.to_string()))
    }
}

/// Summing coordinates yields their unweighted centroid.
impl Sum for Coordinate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut count: usize = 0;
        let mut lat: f64 = 0.0;
        let mut lon: f64 = 0.0;
        iter.for_each(|coordinate| {
            count += 1;
            lat += coordinate.latitude;
            lon += coordinate.longitude;
        });
        let count = count as f64;
        Self {
            latitude: lat / count,
            longitude: lon / count,
        }
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `None` for an empty slice, where a mean is undefined.
    pub fn centroid(coordinates: &[Coordinate]) -> Option<Self> {
        if coordinates.is_empty() {
            None
        } else {
            Some(coordinates.iter().copied().sum())
        }
    }

    /// Signed offset of `self` from `origin`, in degrees.
    pub fn offset_from(&self, origin: &Self) -> Offset {
        Offset {
            latitude: self.latitude - origin.latitude,
            longitude: self.longitude - origin.longitude,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Offset {
    pub latitude: f64,
    pub longitude: f64,
}

#[test]
fn parse_point_test() {
    let coordinate: Coordinate = "POINT (-73.5 45.0)".parse().unwrap();
    assert_eq!(coordinate, Coordinate::new(45.0, -73.5));
}

#[test]
fn parse_point_surrounding_whitespace_test() {
    let coordinate: Coordinate = "  POINT (96.1345 16.8661) \n".parse().unwrap();
    assert_eq!(coordinate, Coordinate::new(16.8661, 96.1345));
}

#[test]
fn parse_point_errors_test() {
    assert!(matches!(
        "LINESTRING (1 2, 3 4)".parse::<Coordinate>(),
        Err(GeometryError::NotAPoint(_))
    ));
    assert!(matches!(
        "POINT (1 2 3)".parse::<Coordinate>(),
        Err(GeometryError::WrongArity(_))
    ));
    assert!(matches!(
        "POINT (1)".parse::<Coordinate>(),
        Err(GeometryError::WrongArity(_))
    ));
    assert!(matches!(
        "POINT (east 2)".parse::<Coordinate>(),
        Err(GeometryError::InvalidNumber { .. })
    ));
    assert!(matches!(
        "POINT (1 2".parse::<Coordinate>(),
        Err(GeometryError::NotAPoint(_))
    ));
    assert!(matches!(
        "POINT (inf NaN)".parse::<Coordinate>(),
        Err(GeometryError::NonFinite(_))
    ));
    assert!(matches!(
        "POINT (96.1 -infinity)".parse::<Coordinate>(),
        Err(GeometryError::NonFinite(value)) if value == "-infinity"
    ));
}

#[test]
fn centroid_test() {
    let coordinates = [Coordinate::new(45.001, -73.501), Coordinate::new(44.999, -73.499)];
    let centroid = Coordinate::centroid(&coordinates).unwrap();
    assert!((centroid.latitude - 45.0).abs() < 1e-9);
    assert!((centroid.longitude + 73.5).abs() < 1e-9);
    assert!(Coordinate::centroid(&[]).is_none());
}
