use std::{
    collections::{BTreeSet, HashMap},
    fs::File,
    io::{BufReader, Read},
    path::Path,
    sync::Arc,
    time::Instant,
};

use tracing::{debug, warn};

pub mod models;
use models::*;

use crate::stops;

pub const LABEL_SEPARATOR: &str = "; ";

/// Distinct `direction` tags of the relations referencing each point feature.
#[derive(Debug, Clone, Default)]
pub struct RelationIndex {
    tags: HashMap<Arc<str>, BTreeSet<String>>,
}

impl RelationIndex {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, stops::Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, stops::Error> {
        debug!("Loading relations...");
        let now = Instant::now();
        let collection: FeatureCollection = serde_json::from_reader(reader)?;
        let index = Self::from_features(collection.features);
        debug!("Loading relations took {:?}", now.elapsed());
        Ok(index)
    }

    /// Non-point features and points without an `@id` are skipped. A point
    /// listed twice has its tags merged.
    pub fn from_features<I>(features: I) -> Self
    where
        I: IntoIterator<Item = Feature>,
    {
        let mut skipped = 0;
        let mut anonymous = 0;
        let mut tags: HashMap<Arc<str>, BTreeSet<String>> = HashMap::new();
        features.into_iter().for_each(|feature| {
            if !feature.geometry.as_ref().is_some_and(Geometry::is_point) {
                skipped += 1;
                return;
            }
            let Some(id) = feature.properties.id else {
                anonymous += 1;
                return;
            };
            let directions = tags.entry(id.into()).or_default();
            directions.extend(
                feature
                    .properties
                    .relations
                    .into_iter()
                    .filter_map(|relation| relation.reltags?.direction),
            );
        });
        if skipped > 0 {
            warn!("Skipped {skipped} features without point geometry");
        }
        if anonymous > 0 {
            warn!("Skipped {anonymous} point features without an @id");
        }
        Self { tags }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tags.contains_key(id)
    }

    /// Sorted, deduplicated tags joined with `"; "`. Empty when the entity is
    /// unknown or none of its relations carries a direction.
    pub fn label(&self, id: &str) -> String {
        self.tags
            .get(id)
            .map(|directions| {
                directions
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(LABEL_SEPARATOR)
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(json: &str) -> RelationIndex {
        RelationIndex::from_reader(json.as_bytes()).unwrap()
    }

    #[test]
    fn untagged_relations_are_ignored() {
        let index = index(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"Point","coordinates":[96.1,16.8]},
                 "properties":{"@id":"node/1","@relations":[
                    {"role":"platform","rel":10,"reltags":{"direction":"Northbound","route":"bus"}},
                    {"role":"platform","rel":11,"reltags":{"route":"bus"}}]}}]}"#,
        );
        assert_eq!(index.label("node/1"), "Northbound");
    }

    #[test]
    fn no_relations_gives_empty_label() {
        let index = index(
            r#"{"features":[{"geometry":{"type":"Point"},"properties":{"@id":"node/2"}}]}"#,
        );
        assert!(index.contains("node/2"));
        assert_eq!(index.label("node/2"), "");
        assert_eq!(index.label("node/unknown"), "");
    }

    #[test]
    fn labels_are_sorted_and_distinct() {
        let index = index(
            r#"{"features":[{"geometry":{"type":"Point"},"properties":{"@id":"n3","@relations":[
                {"reltags":{"direction":"Westbound"}},
                {"reltags":{"direction":"Eastbound"}},
                {"reltags":{"direction":"Westbound"}},
                {"reltags":{"direction":"eastbound"}},
                {}]}}]}"#,
        );
        assert_eq!(index.label("n3"), "Eastbound; Westbound; eastbound");
    }

    #[test]
    fn non_point_features_are_skipped() {
        let index = index(
            r#"{"features":[
                {"geometry":{"type":"LineString"},"properties":{"@id":"way/4","@relations":[{"reltags":{"direction":"North"}}]}},
                {"geometry":null,"properties":{"@id":"relation/5"}}]}"#,
        );
        assert!(index.is_empty());
    }

    #[test]
    fn features_without_id_are_skipped() {
        let index = index(
            r#"{"features":[
                {"geometry":{"type":"Point"},"properties":{"@id":"n1","@relations":[{"reltags":{"direction":"Northbound"}}]}},
                {"geometry":{"type":"LineString"},"properties":{"name":"route shape"}},
                {"geometry":{"type":"Point"},"properties":{"name":"unmapped pole"}}]}"#,
        );
        assert_eq!(index.len(), 1);
        assert_eq!(index.label("n1"), "Northbound");
    }

    #[test]
    fn repeated_point_merges_tags() {
        let index = index(
            r#"{"features":[
                {"geometry":{"type":"Point"},"properties":{"@id":"n7","@relations":[
                    {"reltags":{"direction":"Southbound"}},
                    {"reltags":{"direction":"Inbound"}}]}},
                {"geometry":{"type":"Point"},"properties":{"@id":"n8"}},
                {"geometry":{"type":"Point"},"properties":{"@id":"n7","@relations":[
                    {"reltags":{"direction":"Inbound"}},
                    {"reltags":{"direction":"Eastbound"}},
                    {"reltags":{}}]}}]}"#,
        );
        assert_eq!(index.len(), 2);
        assert_eq!(index.label("n7"), "Eastbound; Inbound; Southbound");
        assert_eq!(index.label("n8"), "");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = RelationIndex::from_reader("{\"features\": [".as_bytes());
        assert!(matches!(result, Err(stops::Error::Json(_))));
    }
}
