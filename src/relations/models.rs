use serde::Deserialize;

/// Overpass-turbo GeoJSON export. Only the parts needed to find the route
/// relations of each stop are modelled; everything else is ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Feature {
    pub geometry: Option<Geometry>,
    pub properties: Properties,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Geometry {
    pub fn is_point(&self) -> bool {
        self.kind == "Point"
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Properties {
    /// Only required on the point features that are kept.
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "@relations", default)]
    pub relations: Vec<RelationRef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RelationRef {
    #[serde(default)]
    pub reltags: Option<RelationTags>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RelationTags {
    #[serde(default)]
    pub direction: Option<String>,
}
