//! Render a SPARQL JSON results file with and without prefix compression.

use sparqltxtlib::{read_json_results, render_text, PrefixMap, TableOptions};
use std::env;
use std::fs::File;

fn main() {
    let path = env::args()
        .nth(1)
        .expect("usage: compare_prefixes <results.srj>");

    let result = read_json_results(File::open(&path).expect("Failed to open results"))
        .expect("Failed to read results");
    let prefixes = PrefixMap::core();

    println!("Full IRIs");
    println!("=========");
    println!();
    print!(
        "{}",
        render_text(result.clone(), &TableOptions::new()).expect("Failed to render")
    );
    println!();
    println!("Core prefixes (rdf, rdfs, xsd, owl, xml)");
    println!("========================================");
    println!();
    print!(
        "{}",
        render_text(result, &TableOptions::new().namespaces(&prefixes))
            .expect("Failed to render")
    );
}
