use std::{collections::HashMap, io::Read, path::Path, sync::Arc, time::Instant};

use tracing::debug;

use crate::{
    shared::{self, Group},
    stops::{self, StopReader, StopRecord},
};

/// In-memory stops, in file order, with id lookup and name groups.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub headers: Box<[Arc<str>]>,
    pub stops: Box<[StopRecord]>,

    stop_lookup: HashMap<Arc<str>, usize>,
    groups: Box<[Group]>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, stops::Error> {
        let reader = StopReader::from_path(path)?;
        Self::new().load_stops(reader)
    }

    pub fn load_stops<R: Read>(mut self, mut reader: StopReader<R>) -> Result<Self, stops::Error> {
        debug!("Loading stops...");
        let now = Instant::now();
        let mut stops: Vec<StopRecord> = Vec::new();
        reader.stream_stops(|(_, stop)| stops.push(stop))?;
        self.headers = reader.headers().into();
        self.set_stops(stops);
        debug!("Loading {} stops took {:?}", self.stops.len(), now.elapsed());
        Ok(self)
    }

    /// Builds a repository from records already in memory. `headers` should
    /// list the columns the records came from.
    pub fn with_stops<I>(mut self, headers: I, stops: Vec<StopRecord>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<str>>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self.set_stops(stops);
        self
    }

    fn set_stops(&mut self, mut stops: Vec<StopRecord>) {
        let mut stop_lookup: HashMap<Arc<str>, usize> = HashMap::with_capacity(stops.len());
        stops.iter_mut().enumerate().for_each(|(i, stop)| {
            stop.index = i;
            stop_lookup.insert(stop.id.clone(), i);
        });
        self.groups = shared::group_by_name(&stops).into();
        self.stop_lookup = stop_lookup;
        self.stops = stops.into();
    }

    pub fn stop_by_id(&self, id: &str) -> Option<&StopRecord> {
        let idx = *self.stop_lookup.get(id)?;
        self.stops.get(idx)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header.as_ref() == name)
    }

    /// Fails with `MissingField` unless every one of `fields` is a column.
    pub fn require_fields(
        &self,
        fields: &[&'static str],
        source: &str,
    ) -> Result<(), stops::Error> {
        match fields.iter().find(|field| !self.has_field(field)) {
            Some(&field) => Err(stops::Error::MissingField {
                field,
                path: source.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Name groups in first-seen order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn members<'a>(&'a self, group: &'a Group) -> impl Iterator<Item = &'a StopRecord> + 'a {
        group.members.iter().map(|&idx| &self.stops[idx])
    }

    /// Groups whose name is shared by more than one stop.
    pub fn ambiguous_groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(|group| !group.is_singleton())
    }
}
