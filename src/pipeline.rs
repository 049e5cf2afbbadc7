use std::{path::Path, time::Instant};

use tracing::info;

use crate::{
    direction,
    repository::Repository,
    stops::{self, Config},
};

/// Shown in samples for stops whose label is empty.
pub const CENTERED_PLACEHOLDER: &str = "(center/single)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelSummary {
    pub total: usize,
    pub labelled: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGroup {
    pub name: String,
    /// `(label, coordinates)` per member, in file order.
    pub members: Vec<(String, String)>,
}

/// Reads the stops, resolves their directions with the configured strategy and
/// writes the labelled copy to `config.output_path`.
pub fn label_stops(config: &Config) -> Result<LabelSummary, stops::Error> {
    let now = Instant::now();
    let repository = Repository::load_from_path(&config.input_path)?;
    info!(
        "Resolving {:?} directions for {} stops in {}",
        config.strategy,
        repository.stops.len(),
        config.input_path.display()
    );
    let directions = direction::resolve(&repository, config)?;
    let summary = LabelSummary {
        total: directions.len(),
        labelled: directions.values().filter(|label| !label.is_empty()).count(),
    };
    info!(
        "Calculated directions for {} stops (out of {} total)",
        summary.labelled, summary.total
    );

    stops::write_directions(&config.input_path, &config.output_path, &directions)?;
    info!(
        "Created {} in {:?}",
        config.output_path.display(),
        now.elapsed()
    );
    Ok(summary)
}

/// Up to `limit` names shared by several stops in the labelled file at `path`.
pub fn sample_ambiguous<P: AsRef<Path>>(
    path: P,
    limit: usize,
) -> Result<Vec<SampleGroup>, stops::Error> {
    let repository = Repository::load_from_path(path)?;
    let samples = repository
        .ambiguous_groups()
        .take(limit)
        .map(|group| SampleGroup {
            name: group.name.clone(),
            members: repository
                .members(group)
                .map(|stop| {
                    let label = match stop.direction() {
                        "" => CENTERED_PLACEHOLDER,
                        label => label,
                    };
                    (label.to_string(), point_body(&stop.geometry).to_string())
                })
                .collect(),
        })
        .collect();
    Ok(samples)
}

fn point_body(geometry: &str) -> &str {
    geometry
        .trim()
        .trim_start_matches("POINT (")
        .trim_end_matches(')')
}
