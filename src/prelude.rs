pub use crate::{
    direction::{Directions, Heading},
    pipeline::{LabelSummary, SampleGroup, label_stops, sample_ambiguous},
    relations::RelationIndex,
    rename::{RenameStats, RenamedStop, rename_from_path, rename_stops},
    repository::Repository,
    shared::{Coordinate, GeometryError, Group},
    stops::{Config, Error, StopReader, StopRecord, Strategy, write_directions},
};
