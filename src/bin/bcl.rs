//! `bcl` — run a JSON command script against the cube-list engine.
//!
//! A thin CLI shell over [`bcl_engine::script::run`], following the teacher's
//! `espresso` binary convention (`clap`-derived args, summary banner on
//! stderr, distinct exit codes per failure kind).

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bcl")]
#[command(about = "Run a JSON command script against the BCL cube-list engine", long_about = None)]
struct Args {
    /// Path to a JSON command script (see README for the command format)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Print a summary of the script's size before running it
    #[arg(short = 's', long = "summary")]
    summary: bool,
}

const EXIT_IO_ERROR: i32 = 1;
const EXIT_SCRIPT_ERROR: i32 = 2;

fn main() {
    env_logger::init();
    let args = Args::parse();

    let json = match fs::read_to_string(&args.script) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("error reading '{}': {}", args.script.display(), e);
            process::exit(EXIT_IO_ERROR);
        }
    };

    if args.summary {
        eprintln!("{}: {} bytes", args.script.display(), json.len());
    }

    match bcl_engine::script::run(&json) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("script error: {}", e);
            process::exit(EXIT_SCRIPT_ERROR);
        }
    }
}
