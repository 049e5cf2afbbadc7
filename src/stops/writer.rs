use std::{
    fs,
    io::{Read, Write},
    path::Path,
    time::Instant,
};

use csv::StringRecord;
use tracing::debug;

use crate::{
    direction::Directions,
    stops::{self, DIRECTION_FIELD, ID_FIELD},
};

/// Copies the stops CSV at `input` to `output`, filling the direction column
/// from `directions`. The input is re-read so unmodelled columns and their
/// order survive untouched. On error `output` is left as it was. Returns the
/// number of rows written.
pub fn write_directions<P, Q>(
    input: P,
    output: Q,
    directions: &Directions,
) -> Result<usize, stops::Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let now = Instant::now();
    let input = input.as_ref();
    // Everything is read and rendered before the output is opened, so
    // `output` may be the input itself.
    let source = fs::read(input)?;
    let mut rendered = Vec::with_capacity(source.len());
    let rows = copy_with_directions(
        source.as_slice(),
        &input.display().to_string(),
        &mut rendered,
        directions,
    )?;
    fs::write(output.as_ref(), rendered)?;
    debug!(
        "Writing {rows} rows to {} took {:?}",
        output.as_ref().display(),
        now.elapsed()
    );
    Ok(rows)
}

/// Appends `direction` only when the header lacks it, so running twice over
/// the same file is a no-op on the schema. Rows whose id has no entry get an
/// empty label.
pub fn copy_with_directions<R, W>(
    source: R,
    source_name: &str,
    sink: W,
    directions: &Directions,
) -> Result<usize, stops::Error>
where
    R: Read,
    W: Write,
{
    let mut reader = csv::Reader::from_reader(source);
    let mut headers = reader.headers()?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(stops::Error::MissingHeader(source_name.to_string()));
    }
    let id_idx = headers
        .iter()
        .position(|header| header == ID_FIELD)
        .ok_or_else(|| stops::Error::MissingField {
            field: ID_FIELD,
            path: source_name.to_string(),
        })?;
    let direction_idx = match headers.iter().position(|header| header == DIRECTION_FIELD) {
        Some(idx) => idx,
        None => {
            headers.push_field(DIRECTION_FIELD);
            headers.len() - 1
        }
    };

    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(&headers)?;

    let mut row = StringRecord::new();
    let mut out = StringRecord::with_capacity(0, headers.len());
    let mut rows = 0;
    while reader.read_record(&mut row)? {
        let label = row
            .get(id_idx)
            .and_then(|id| directions.get(id))
            .map(String::as_str)
            .unwrap_or_default();
        out.clear();
        (0..headers.len()).for_each(|idx| {
            if idx == direction_idx {
                out.push_field(label);
            } else {
                out.push_field(row.get(idx).unwrap_or_default());
            }
        });
        writer.write_record(&out)?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn copy(input: &str, directions: &Directions) -> String {
        let mut out = Vec::new();
        copy_with_directions(input.as_bytes(), "test.csv", &mut out, directions).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn appends_direction_column() {
        let input = "@id,name,geometry,ref\nn1,Main St,POINT (-73.5 45.0),7\nn2,Depot,POINT (1 2),\n";
        let directions = Directions::from([(Arc::from("n1"), "North".to_string())]);
        assert_eq!(
            copy(input, &directions),
            "@id,name,geometry,ref,direction\nn1,Main St,POINT (-73.5 45.0),7,North\nn2,Depot,POINT (1 2),,\n"
        );
    }

    #[test]
    fn reuses_existing_direction_column() {
        let input = "@id,direction,name,geometry\nn1,stale,Main St,POINT (1 2)\n";
        let directions = Directions::from([(Arc::from("n1"), "East".to_string())]);
        assert_eq!(
            copy(input, &directions),
            "@id,direction,name,geometry\nn1,East,Main St,POINT (1 2)\n"
        );
    }

    #[test]
    fn empty_input_is_missing_header() {
        let mut out = Vec::new();
        let result = copy_with_directions("".as_bytes(), "empty.csv", &mut out, &Directions::new());
        assert!(matches!(result, Err(stops::Error::MissingHeader(name)) if name == "empty.csv"));
    }

    #[test]
    fn missing_id_column() {
        let mut out = Vec::new();
        let result = copy_with_directions(
            "name,geometry\nA,POINT (1 2)\n".as_bytes(),
            "noid.csv",
            &mut out,
            &Directions::new(),
        );
        assert!(matches!(
            result,
            Err(stops::Error::MissingField { field: ID_FIELD, .. })
        ));
    }
}
