use std::{
    fs::File,
    io::{self, Read},
    path::Path,
    sync::Arc,
};

use csv::StringRecord;
use thiserror::Error;

use crate::shared::GeometryError;

mod config;
pub mod models;
pub mod writer;
pub use config::*;
pub use models::*;
pub use writer::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Csv file {0} is empty or missing header")]
    MissingHeader(String),
    #[error("{path} has no {field:?} field")]
    MissingField { field: &'static str, path: String },
    #[error("Stop {id} has invalid geometry: {source}")]
    Geometry { id: String, source: GeometryError },
    #[error("Relational strategy needs a relations file")]
    MissingAuxiliaryPath,
}

/// Column positions of the fields every stop must carry.
#[derive(Debug, Clone)]
pub(crate) struct Schema {
    pub(crate) headers: Box<[Arc<str>]>,
    pub(crate) id_idx: usize,
    pub(crate) name_idx: usize,
    pub(crate) geometry_idx: usize,
    pub(crate) direction_idx: Option<usize>,
}

impl Schema {
    pub(crate) fn new(headers: &StringRecord, source: &str) -> Result<Self, self::Error> {
        if headers.is_empty() || headers.iter().all(str::is_empty) {
            return Err(self::Error::MissingHeader(source.to_string()));
        }
        let position = |field: &str| headers.iter().position(|header| header == field);
        let required = |field: &'static str| {
            position(field).ok_or_else(|| self::Error::MissingField {
                field,
                path: source.to_string(),
            })
        };
        Ok(Self {
            headers: headers.iter().map(Arc::from).collect(),
            id_idx: required(ID_FIELD)?,
            name_idx: required(NAME_FIELD)?,
            geometry_idx: required(GEOMETRY_FIELD)?,
            direction_idx: position(DIRECTION_FIELD),
        })
    }

    fn is_typed(&self, idx: usize) -> bool {
        idx == self.id_idx
            || idx == self.name_idx
            || idx == self.geometry_idx
            || Some(idx) == self.direction_idx
    }

    fn to_stop(&self, index: usize, row: &StringRecord) -> StopRecord {
        let value = |idx: usize| row.get(idx).unwrap_or_default();
        let passthrough = self
            .headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.is_typed(*idx))
            .map(|(idx, header)| (header.clone(), value(idx).to_string()))
            .collect();
        StopRecord {
            index,
            id: value(self.id_idx).into(),
            name: value(self.name_idx).into(),
            geometry: value(self.geometry_idx).into(),
            direction: self.direction_idx.map(|idx| value(idx).to_string()),
            passthrough,
        }
    }
}

/// Reads stop records from a CSV source with a header row.
pub struct StopReader<R> {
    reader: csv::Reader<R>,
    schema: Schema,
}

impl StopReader<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, self::Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(file, &path.display().to_string())
    }
}

impl<R: Read> StopReader<R> {
    /// `source` names the input in error messages.
    pub fn from_reader(rdr: R, source: &str) -> Result<Self, self::Error> {
        let mut reader = csv::Reader::from_reader(rdr);
        let schema = Schema::new(reader.headers()?, source)?;
        Ok(Self { reader, schema })
    }

    pub fn headers(&self) -> &[Arc<str>] {
        &self.schema.headers
    }

    pub fn stream_stops<F>(&mut self, mut f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, StopRecord)),
    {
        let mut row = StringRecord::new();
        let mut i = 0;
        while self.reader.read_record(&mut row)? {
            f((i, self.schema.to_stop(i, &row)));
            i += 1;
        }
        Ok(())
    }
}
