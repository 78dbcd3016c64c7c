use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  # generate a single name with the default options
  fnombre

  # generate 10 names joined with a custom delimiter
  fnombre --delimiter \".\" --quantity 10

  # four-word, title-cased names from a fixed seed
  fnombre --size 4 --casing title --seed 42";

#[derive(Parser, Debug, Default)]
#[command(
    name = "fnombre",
    version,
    about = "Generate random, human-friendly names like \"gato-feliz\"",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Casing of the generated name <lower|upper|title> [default: lower]
    #[arg(short, long)]
    pub casing: Option<String>,

    /// Delimiter used to join words [default: -]
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Number of names to generate [default: 1]
    #[arg(short, long)]
    pub quantity: Option<usize>,

    /// Number of words per name, 2 to 4 [default: 2]
    #[arg(short = 'z', long)]
    pub size: Option<usize>,

    /// Seed for the random generator [default: current time]
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// TOML file with default options
    #[arg(long, env = "FNOMBRE_CONFIG")]
    pub config: Option<PathBuf>,
}
