use std::{env, process::ExitCode};

use anyhow::Result;
use float_list::list::{exit_code, shell};

fn main() -> Result<ExitCode> {
    let args: Vec<_> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: float_list [script]");
        return Ok(exit_code::usage());
    }
    if args.len() == 2 {
        shell::run_file(&args[1])
    } else {
        shell::run_prompt()
    }
}
