use clap::Parser;
use std::fs;
use std::path::PathBuf;

use modstate_gen::{generate, GenError};

/// Where the schema-dump pipeline writes the global types file.
const DEFAULT_SCHEMA_PATH: &str =
    "demofile-net/src/DemoFile.Game.Deadlock/Schema/!GlobalTypes.json";

#[derive(Parser)]
#[command(name = "modstate")]
#[command(about = "Generate the ModifierState Shift/Index/Mask enums from a schema dump", long_about = None)]
struct Cli {
    /// Input schema dump (`!GlobalTypes.json`)
    #[arg(short, long, default_value = DEFAULT_SCHEMA_PATH)]
    input: PathBuf,

    /// Output `.cs` file (if omitted, prints to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), GenError> {
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input).map_err(GenError::Io)?;
    let code = generate(&text)?;

    match &cli.output {
        Some(out_path) => {
            fs::write(out_path, &code).map_err(GenError::Io)?;
            println!("Generated enums written to {}", out_path.display());
        }
        None => {
            print!("{}", code);
        }
    }
    Ok(())
}
