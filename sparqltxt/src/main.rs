//! # sparqltxt
//!
//! A CLI tool that prints SPARQL SELECT results as aligned plain-text tables.
//!
//! ## Overview
//!
//! sparqltxt is built on top of sparqltxtlib. It reads a SPARQL 1.1 Query
//! Results JSON document, renders every binding in N3 form, and prints a
//! table with a centered header and rows sorted by their rendered cells.
//!
//! ## Usage
//!
//! ```bash
//! # Render a results file
//! sparqltxt results.srj
//!
//! # Read from stdin, compress IRIs with a prefix
//! curl -H 'Accept: application/sparql-results+json' "$ENDPOINT?query=..." \
//!     | sparqltxt - --prefix ex=http://example.org/
//!
//! # Use the rdf/rdfs/xsd/owl/xml prefixes and write Latin-1 to a file
//! sparqltxt results.srj --core-prefixes --encoding latin1 --output table.txt
//! ```

mod render;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use log::debug;
use sparqltxtlib::{PrefixMap, TableOptions};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sparqltxt")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Print SPARQL SELECT results as aligned plain-text tables")
        .arg(
            Arg::new("input")
                .help("SPARQL JSON results file ('-' for stdin)")
                .default_value(render::STDIO),
        )
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .value_name("NAME=IRI")
                .action(ArgAction::Append)
                .help("Compress IRIs under IRI to NAME:local (can be specified multiple times)"),
        )
        .arg(
            Arg::new("core-prefixes")
                .long("core-prefixes")
                .action(ArgAction::SetTrue)
                .help("Bind the rdf, rdfs, xsd, owl and xml prefixes"),
        )
        .arg(
            Arg::new("encoding")
                .short('e')
                .long("encoding")
                .default_value(sparqltxtlib::output::sink::DEFAULT_ENCODING)
                .help("Output encoding (e.g. utf-8, latin1)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the table to FILE instead of stdout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log rendering details to stderr"),
        )
}

/// Initialise env_logger; RUST_LOG overrides the default filter
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Build the namespace table from matches; `None` when no prefix was requested
fn build_prefixes(matches: &ArgMatches) -> anyhow::Result<Option<PrefixMap>> {
    let core = matches.get_flag("core-prefixes");
    let bindings: Vec<&String> = matches
        .get_many::<String>("prefix")
        .map(|v| v.collect())
        .unwrap_or_default();

    if !core && bindings.is_empty() {
        return Ok(None);
    }

    let mut prefixes = if core {
        PrefixMap::core()
    } else {
        PrefixMap::new()
    };
    for binding in bindings {
        prefixes.insert_binding(binding)?;
    }
    Ok(Some(prefixes))
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or(render::STDIO);
    let encoding = matches
        .get_one::<String>("encoding")
        .map(|s| s.as_str())
        .unwrap_or(sparqltxtlib::output::sink::DEFAULT_ENCODING);
    let output = matches.get_one::<String>("output").map(|s| s.as_str());

    let prefixes = build_prefixes(matches)?;
    let result = render::read_input(input)?;
    debug!(
        "read {} result with {} rows from {}",
        result.kind,
        result.rows.len(),
        input
    );

    let mut options = TableOptions::new().encoding(encoding);
    if let Some(prefixes) = &prefixes {
        options = options.namespaces(prefixes);
    }

    render::write_output(result, &options, output)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let label = Style::new().for_stderr().red().bold().apply_to("Error:");
            eprintln!("{} {:#}", label, e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparqltxtlib::Namespaces;

    fn matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["sparqltxt"];
        argv.extend(args);
        build_command().get_matches_from(argv)
    }

    #[test]
    fn test_no_prefix_flags_means_no_table() {
        assert!(build_prefixes(&matches(&[])).unwrap().is_none());
    }

    #[test]
    fn test_prefix_flags() {
        let prefixes = build_prefixes(&matches(&[
            "-p",
            "ex=http://example.org/",
            "--prefix",
            "foaf=http://xmlns.com/foaf/0.1/",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(prefixes.len(), 2);
        assert_eq!(
            prefixes.compress("http://example.org/a"),
            Some("ex:a".to_string())
        );
    }

    #[test]
    fn test_core_prefixes_with_extra_binding() {
        let prefixes = build_prefixes(&matches(&["--core-prefixes", "-p", "ex=http://e/"]))
            .unwrap()
            .unwrap();
        assert_eq!(prefixes.len(), 6);
    }

    #[test]
    fn test_bad_prefix_binding() {
        assert!(build_prefixes(&matches(&["-p", "nonsense"])).is_err());
    }

    #[test]
    fn test_defaults() {
        let m = matches(&[]);
        assert_eq!(m.get_one::<String>("input").unwrap(), "-");
        assert_eq!(m.get_one::<String>("encoding").unwrap(), "utf-8");
        assert!(m.get_one::<String>("output").is_none());
    }
}
