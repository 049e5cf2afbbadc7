use clap::Args;
use std::path::PathBuf;
use stopsides::{prelude::*, shared::group_by_name};

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Labelled stops CSV, as written by `label`
    #[arg(long, default_value = "ybs_clean_with_id_and_direction.csv")]
    input: PathBuf,
    /// How many renamed groups to show
    #[arg(long, default_value_t = 5)]
    limit: usize,
    /// Print every proposed name as JSON instead of a report
    #[arg(long)]
    json: bool,
}

pub fn rename(args: RenameArgs) -> Result<(), Error> {
    let renamed = rename_from_path(&args.input)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&renamed)?);
        return Ok(());
    }

    println!("Examples of renamed bus stops:\n");
    for group in group_by_name(&renamed)
        .iter()
        .filter(|group| !group.is_singleton())
        .take(args.limit)
    {
        println!("Original name: '{}'", group.name);
        println!("Number of locations: {}", group.members.len());
        for (i, stop) in group.members.iter().map(|&idx| &renamed[idx]).enumerate() {
            println!("  {}. New name: '{}'", i + 1, stop.new_name);
            println!("     Coordinates: {}", stop.coordinates);
        }
        println!();
    }

    let stats = RenameStats::from_stops(&renamed);
    println!("\nStatistics:");
    println!("Total bus stops: {}", stats.total);
    println!("Stops renamed with direction: {}", stats.renamed);
    println!("Stops keeping original name: {}", stats.kept);
    Ok(())
}
