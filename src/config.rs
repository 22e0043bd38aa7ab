use std::path::{Path, PathBuf};

use clap::Parser;

use crate::signals::SortOrder;

#[derive(Parser, Debug)]
#[command(about = "Computes a traffic signal schedule from a scenario file")]
pub struct CommandLineArgs {
    /// Path to the scenario input file
    #[arg(long, short)]
    pub input: PathBuf,
    /// Path of the schedule output file, defaults to `<input stem>.out.txt`
    /// next to the input
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Direction of the usage sort that picks the boosted streets
    #[arg(long, value_enum, default_value_t = SortOrder::Ascending)]
    pub sort: SortOrder,
}

#[derive(Debug)]
pub struct Config {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub sort: SortOrder,
}

impl From<CommandLineArgs> for Config {
    fn from(args: CommandLineArgs) -> Self {
        let output_file = args
            .output
            .unwrap_or_else(|| default_output_path(&args.input));
        Config {
            input_file: args.input,
            output_file,
            sort: args.sort,
        }
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("schedule");
    input.with_file_name(format!("{stem}.out.txt"))
}
