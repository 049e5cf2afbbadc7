use clap::{Args, ValueEnum};
use std::path::PathBuf;
use stopsides::prelude::*;

const SAMPLE_GROUPS: usize = 3;

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum StrategyArg {
    #[default]
    Geometric,
    Relational,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Geometric => Strategy::Geometric,
            StrategyArg::Relational => Strategy::Relational,
        }
    }
}

#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Stops CSV with @id, name and geometry columns
    #[arg(long, default_value = "ybs_clean_with_id.csv")]
    input: PathBuf,
    /// Where to write the labelled copy
    #[arg(long, default_value = "ybs_clean_with_id_and_direction.csv")]
    output: PathBuf,
    #[arg(long, value_enum, default_value_t)]
    strategy: StrategyArg,
    /// GeoJSON export of stops with their route relations
    #[arg(long, required_if_eq("strategy", "relational"))]
    relations: Option<PathBuf>,
}

impl From<LabelArgs> for Config {
    fn from(args: LabelArgs) -> Self {
        let config = Config::new()
            .with_input(args.input)
            .with_output(args.output)
            .with_strategy(args.strategy.into());
        match args.relations {
            Some(path) => config.with_relations(path),
            None => config,
        }
    }
}

pub fn label(args: LabelArgs) -> Result<(), Error> {
    let config: Config = args.into();
    label_stops(&config)?;

    println!("\nSample output showing bus stops with same name but different locations:");
    for sample in sample_ambiguous(&config.output_path, SAMPLE_GROUPS)? {
        println!("\n'{}':", sample.name);
        for (label, coordinates) in sample.members {
            println!("  {label}: {coordinates}");
        }
    }
    Ok(())
}
