pub(crate) mod flatten;
pub(crate) mod multi;
pub(crate) mod resolve;
pub(crate) mod testdata;
pub(crate) mod themes;

use std::fs;
use std::path::Path;

use tokencss_core::TokenError;

use crate::OutputFormat;

/// A failed run: a summary line plus every collected token error.
pub(crate) struct Failure {
    pub message: String,
    pub errors: Vec<TokenError>,
}

impl Failure {
    pub fn io(context: &str, error: std::io::Error) -> Failure {
        Failure {
            message: format!("{}: {}", context, error),
            errors: Vec::new(),
        }
    }

    pub fn message(message: impl Into<String>) -> Failure {
        Failure {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn single(context: &str, error: TokenError) -> Failure {
        Failure {
            message: context.to_owned(),
            errors: vec![error],
        }
    }

    pub fn collected(context: &str, errors: Vec<TokenError>) -> Failure {
        Failure {
            message: format!("{} ({} error(s))", context, errors.len()),
            errors,
        }
    }
}

/// Print one failure to stderr in the requested format. Every collected
/// error is listed; the run never stops at the first.
pub(crate) fn report(failure: &Failure, output: OutputFormat, quiet: bool) {
    match output {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "message": failure.message,
                "errors": failure.errors,
            });
            let pretty = serde_json::to_string_pretty(&value)
                .unwrap_or_else(|_| failure.message.clone());
            eprintln!("{}", pretty);
        }
        OutputFormat::Text => {
            if !quiet {
                eprintln!("{}", failure.message);
                for error in &failure.errors {
                    eprintln!("  {}", error);
                }
            }
        }
    }
}

/// Write `data` to `out`, creating parent directories, or print it to
/// stdout when no path was given.
pub(crate) fn write_output(out: Option<&Path>, data: &str) -> Result<(), Failure> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .map_err(|e| Failure::io("creating output directory", e))?;
                }
            }
            fs::write(path, data).map_err(|e| Failure::io("writing output", e))
        }
        None => {
            println!("{}", data);
            Ok(())
        }
    }
}

/// Read and parse one token JSON source into a tree.
pub(crate) fn read_tree(source: &Path) -> Result<tokencss_core::TokenNode, Failure> {
    let raw = fs::read_to_string(source)
        .map_err(|e| Failure::io(&format!("reading {}", source.display()), e))?;
    let json: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| Failure::message(format!("parsing {}: {}", source.display(), e)))?;
    tokencss_core::TokenNode::from_json(&json)
        .map_err(|e| Failure::single(&format!("classifying {}", source.display()), e))
}
