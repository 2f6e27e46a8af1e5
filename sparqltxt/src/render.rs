//! Input and output plumbing for the CLI

use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::Context;
use sparqltxtlib::output::emit;
use sparqltxtlib::{read_json_results, render_text, ByteSink, QueryResult, TableOptions};

/// Path that means "standard input" or "standard output"
pub const STDIO: &str = "-";

/// Read a SPARQL JSON results document from `path` (or stdin for `-`)
pub fn read_input(path: &str) -> anyhow::Result<QueryResult> {
    if path == STDIO {
        return Ok(read_json_results(io::stdin().lock())?);
    }
    let file = File::open(path).with_context(|| format!("failed to open '{}'", path))?;
    read_json_results(BufReader::new(file)).with_context(|| format!("failed to read '{}'", path))
}

/// Render `result` and write it to `output` (or stdout when `None` or `-`).
///
/// The output file is only created once rendering has succeeded.
pub fn write_output(
    result: QueryResult,
    options: &TableOptions<'_>,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let text = render_text(result, options)?;
    match output {
        Some(path) if path != STDIO => {
            let file =
                File::create(path).with_context(|| format!("failed to create '{}'", path))?;
            let mut sink = ByteSink::new(BufWriter::new(file));
            emit(&text, &options.encoding, &mut sink)?;
        }
        _ => {
            let mut sink = ByteSink::new(io::stdout().lock());
            emit(&text, &options.encoding, &mut sink)?;
        }
    }
    Ok(())
}
