// Command-line interface for docport
//
// The docport binary batch-converts a directory of markup files (HTML
// fragments, whether saved as .html or mislabeled as .txt) into a parallel
// directory of .docx documents.
//
// Usage:
//  docport <input-dir> <output-dir> [--config <path>]
//
// One line is printed per file as it is processed, followed by an
// aggregate report. Exit codes: 1 when an argument is missing, the input
// directory does not exist, the configuration is unusable or the output
// directory cannot be created; 0 otherwise. Per-file failures are
// reported but never fail the process.

use clap::error::ErrorKind;
use clap::{Arg, Command, ValueHint};
use docport::batch::{convert_directory, BatchOptions, BatchReport, ConversionOutcome};
use docport::markup::parser::EncodingPolicy;
use docport_config::{DocportConfig, Loader};
use std::path::Path;

fn build_cli() -> Command {
    Command::new("docport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Batch-convert markup files into Word documents")
        .long_about(
            "docport converts a directory of markup files into Word documents.\n\n\
            Every file in <input-dir> whose extension is recognized (txt and\n\
            html by default) is parsed as HTML and rewritten as a .docx file\n\
            of the same name in <output-dir>. Headings, emphasis, links,\n\
            lists, tables and line breaks are preserved; everything else is\n\
            passed through as plain text.\n\n\
            Examples:\n  \
            docport ./articles ./converted           # convert a directory\n  \
            docport in out --config custom.toml      # with explicit settings\n  \
            RUST_LOG=warn docport in out             # show recovered faults",
        )
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
        )
}

fn main() {
    env_logger::init();

    // Usage errors exit with code 1 (clap's own exit would use 2); help
    // and version keep their conventional success exit.
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = matches
        .get_one::<String>("output")
        .expect("output is required");

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let options = batch_options_from_config(&config);

    let input_dir = Path::new(input);
    if !input_dir.is_dir() {
        eprintln!("Error: input directory '{input}' does not exist");
        std::process::exit(1);
    }

    let report = convert_directory(input_dir, Path::new(output), &options, print_progress)
        .unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            std::process::exit(1);
        });

    print!("{}", format_report(&report));
}

fn print_progress(outcome: &ConversionOutcome) {
    if outcome.success {
        println!("converted: {}", outcome.filename);
    } else {
        println!(
            "failed: {}: {}",
            outcome.filename,
            outcome.error.as_deref().unwrap_or("unknown error")
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> DocportConfig {
    let loader = Loader::new().with_optional_file("docport.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn batch_options_from_config(config: &DocportConfig) -> BatchOptions {
    let Some(encoding) = EncodingPolicy::from_label(&config.convert.encoding) else {
        eprintln!(
            "Unknown encoding label '{}' in configuration",
            config.convert.encoding
        );
        std::process::exit(1);
    };

    BatchOptions {
        extensions: config.batch.extensions.clone(),
        encoding,
    }
}

fn format_report(report: &BatchReport) -> String {
    let mut out = String::new();
    out.push_str("\n--- Report ---\n");
    out.push_str(&format!("Total files: {}\n", report.total));
    out.push_str(&format!("Converted:   {}\n", report.converted));
    out.push_str(&format!("Failed:      {}\n", report.failed));

    if report.failed > 0 {
        out.push_str("\nFailures:\n");
        for outcome in report.failures() {
            out.push_str(&format!(
                "  {}: {}\n",
                outcome.filename,
                outcome.error.as_deref().unwrap_or("unknown error")
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(filename: &str, error: Option<&str>) -> ConversionOutcome {
        ConversionOutcome {
            filename: filename.to_string(),
            success: error.is_none(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn report_without_failures_skips_the_failure_section() {
        let report = BatchReport {
            total: 2,
            converted: 2,
            failed: 0,
            outcomes: vec![outcome("a.txt", None), outcome("b.html", None)],
        };

        let text = format_report(&report);
        assert!(text.contains("Total files: 2"));
        assert!(text.contains("Converted:   2"));
        assert!(text.contains("Failed:      0"));
        assert!(!text.contains("Failures:"));
    }

    #[test]
    fn report_lists_each_failure_with_its_message() {
        let report = BatchReport {
            total: 2,
            converted: 1,
            failed: 1,
            outcomes: vec![
                outcome("ok.html", None),
                outcome("broken.txt", Some("Decode error: bad bytes")),
            ],
        };

        let text = format_report(&report);
        assert!(text.contains("Failed:      1"));
        assert!(text.contains("  broken.txt: Decode error: bad bytes"));
        assert!(!text.contains("  ok.html"));
    }

    #[test]
    fn default_config_maps_to_default_batch_options() {
        let config = docport_config::load_defaults().unwrap();
        let options = batch_options_from_config(&config);

        assert_eq!(options.extensions, vec!["txt", "html"]);
        assert_eq!(options.encoding, EncodingPolicy::Auto);
    }
}
