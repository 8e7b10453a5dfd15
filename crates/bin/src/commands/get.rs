//! Get command - resolves one path against a JSON document.

use std::{fs::File, io, io::BufReader};

use treepath::{PathResolver, PathSyntax, ResolverOptions, ResultSet, Value};

use crate::cli::GetArgs;
use crate::output::{OutputFormat, print_table};

/// Run the get command
pub fn run(args: &GetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let options = ResolverOptions {
        syntax: PathSyntax::new(args.delimiter.as_str(), args.wildcard.as_str())?,
        ..ResolverOptions::default()
    };

    let resolver = match &args.file {
        Some(path) => {
            tracing::debug!(file = %path.display(), "Reading document");
            PathResolver::from_json_reader(BufReader::new(File::open(path)?), options)?
        }
        None => PathResolver::from_json_reader(io::stdin().lock(), options)?,
    };

    let default: serde_json::Value = serde_json::from_str(&args.default)?;
    let result = resolver.get(&args.path, Value::from(default));

    match format {
        OutputFormat::Human => print_human(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
    }

    Ok(())
}

fn print_human(result: &ResultSet) {
    println!("{}", result.value().to_json_string());

    let rows: Vec<Vec<String>> = result
        .map()
        .iter()
        .map(|(path, value)| vec![path.clone(), value.to_json_string()])
        .collect();
    if !rows.is_empty() {
        println!();
        print_table(&["PATH", "VALUE"], &rows);
    }
}
