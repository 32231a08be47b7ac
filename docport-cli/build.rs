use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI defined in src/main.rs. Build scripts can't access
// src/ modules, so the arguments are duplicated here.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("docport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Batch-convert markup files into Word documents")
        .arg(
            Arg::new("input")
                .help("Directory containing the source files")
                .required(true)
                .index(1)
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("output")
                .help("Directory that receives the converted .docx files")
                .required(true)
                .index(2)
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a docport.toml configuration file")
                .value_hint(ValueHint::FilePath),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "docport", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "docport", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "docport", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
