use std::{fs, path::PathBuf};

use stopsides::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR")))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("stopsides-rename-{}-{name}", std::process::id()))
}

#[test]
fn rename_labelled_output_test() {
    let labelled = temp_path("labelled.csv");
    let config = Config::new()
        .with_input(fixture("stops.csv"))
        .with_output(&labelled);
    label_stops(&config).unwrap();

    let renamed = rename_from_path(&labelled).unwrap();
    let names: Vec<_> = renamed.iter().map(|s| s.new_name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Main St (North-West)",
            "Main St (South-East)",
            "Depot",
            "Market, North Gate",
            "Market, North Gate",
            "Hledan (West)",
            "Hledan (East)",
            "Hledan",
        ]
    );
    assert_eq!(renamed[0].coordinates, "POINT (-73.5010 45.0010)");
    assert_eq!(renamed[0].id, "node/101");
    assert_eq!(renamed[0].original_name, "Main St");
    assert_eq!(
        RenameStats::from_stops(&renamed),
        RenameStats {
            total: 8,
            renamed: 4,
            kept: 4
        }
    );
    fs::remove_file(labelled).unwrap();
}

#[test]
fn rename_requires_direction_column_test() {
    let result = rename_from_path(fixture("stops.csv"));
    assert!(matches!(
        result,
        Err(Error::MissingField {
            field: "direction",
            ..
        })
    ));
}
