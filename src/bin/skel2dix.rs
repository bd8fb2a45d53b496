//! Command-line interface for skel2dix
//!
//! Usage:
//!   skel2dix words.skel                 - source-monodix fragments to words.dix
//!   skel2dix -t bi words.skel           - bilingual fragments
//!   skel2dix -t d -o out.dix words.skel - explicit output path
//!   skel2dix --stanzas table.yaml a.skel b.skel
//!
//! Diagnostics go to stderr with their line numbers; a malformed line never
//! stops a run, a missing file does.

use clap::{Arg, ArgAction, ArgMatches, Command};
use skel2dix::skel::processor::{process_file, OutputFormat, ProcessingError, ProcessingOptions};
use skel2dix::skel::render::Target;
use skel2dix::skel::stanza::StanzaTable;
use std::path::Path;

fn main() {
    let matches = Command::new("skel2dix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates apertium .dix entry fragments from skeleton word lists")
        .arg(
            Arg::new("inputs")
                .help("Skeleton files to process")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("target")
                .short('t')
                .long("target")
                .default_value("s")
                .help("Dictionary to generate: s (source monodix), d (destination monodix), bi (bilingual)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output path; defaults to the input name with a .dix extension (single input only)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .default_value("dix")
                .help("Output format: dix entry fragments, or json parse records"),
        )
        .arg(
            Arg::new("stanzas")
                .long("stanzas")
                .help("YAML file of stanza-name: category-code entries, replacing the built-in table"),
        )
        .arg(
            Arg::new("annotate")
                .short('s')
                .long("annotate-stanzas")
                .action(ArgAction::SetTrue)
                .help("Write a comment into the output whenever a stanza is entered"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), ProcessingError> {
    let target_code = matches.get_one::<String>("target").unwrap();
    let target = Target::from_code(target_code)
        .ok_or_else(|| ProcessingError::UnknownTarget(target_code.clone()))?;
    let format = OutputFormat::from_string(matches.get_one::<String>("format").unwrap())?;

    let options = ProcessingOptions {
        target,
        format,
        annotate_stanzas: matches.get_flag("annotate"),
    };

    let table = match matches.get_one::<String>("stanzas") {
        Some(path) => StanzaTable::from_yaml_file(path)?,
        None => StanzaTable::builtin().clone(),
    };

    let inputs: Vec<&String> = matches.get_many::<String>("inputs").unwrap().collect();
    let output = matches.get_one::<String>("output");
    if output.is_some() && inputs.len() > 1 {
        return Err(ProcessingError::OutputPath(
            "an explicit output path needs a single input file".to_string(),
        ));
    }

    println!("Target: {}", target);
    for input in inputs {
        let (out_path, summary) = process_file(
            Path::new(input),
            output.map(|path| Path::new(path.as_str())),
            &table,
            &options,
        )?;

        for diagnostic in &summary.diagnostics {
            eprintln!("{}", diagnostic);
        }
        println!(
            "{}: {} entries -> {}",
            input,
            summary.entries,
            out_path.display()
        );
    }

    Ok(())
}
