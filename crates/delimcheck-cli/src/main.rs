use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use delimcheck_core::{Config, ConfigError, ScanResult, scan_source};
use owo_colors::OwoColorize;
use rayon::prelude::*;
use thiserror::Error;

/// A delimiter balance checker for source files
#[derive(Parser, Debug)]
#[command(name = "delimcheck", version, about)]
struct Args {
    /// Files to check (reads from stdin if none provided)
    #[arg()]
    files: Vec<PathBuf>,

    /// Read from stdin
    #[arg(long)]
    stdin: bool,

    /// Only print reports for files with problems
    #[arg(long)]
    quiet: bool,

    /// Path to a configuration file (default: delimcheck.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    if args.stdin || args.files.is_empty() {
        return match check_stdin(&config) {
            Ok(result) => {
                if !(args.quiet && result.is_balanced()) {
                    print_report(&result, None);
                }
                if result.is_balanced() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(1)
                }
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::from(2)
            }
        };
    }

    let paths = expand_paths(&args.files);

    // Scans share no state, so files are checked in parallel. Reports are
    // printed afterwards in input order.
    let reports: Vec<Result<ScanResult, Error>> = paths
        .par_iter()
        .map(|path| check_file(path, &config))
        .collect();

    let mut any_imbalance = false;
    let mut any_error = false;
    let show_path = paths.len() > 1;

    for (path, report) in paths.iter().zip(&reports) {
        match report {
            Ok(result) => {
                if !result.is_balanced() {
                    any_imbalance = true;
                }
                if args.quiet && result.is_balanced() {
                    continue;
                }
                print_report(result, show_path.then_some(path.as_path()));
            }
            Err(e @ Error::NotFound(_)) => {
                eprintln!("{e}");
                any_error = true;
            }
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                any_error = true;
            }
        }
    }

    if any_error {
        return ExitCode::from(2);
    }
    if any_imbalance {
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

/// Load configuration from the given path, or from `delimcheck.toml` in
/// the working directory if one exists.
fn load_config(args: &Args) -> Result<Config, Error> {
    let path = args.config.clone().or_else(|| {
        let default = PathBuf::from("delimcheck.toml");
        default.exists().then_some(default)
    });

    let Some(path) = path else {
        return Ok(Config::default());
    };

    let text = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

/// Expand glob patterns in the argument list, leaving plain paths as-is.
///
/// Patterns that match nothing are kept so the missing-file report still
/// names them.
fn expand_paths(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for file in files {
        let pattern = file.to_string_lossy();
        if !pattern.contains(['*', '?', '[']) {
            paths.push(file.clone());
            continue;
        }

        match glob::glob(&pattern) {
            Ok(entries) => {
                let matched: Vec<PathBuf> = entries.flatten().collect();
                if matched.is_empty() {
                    paths.push(file.clone());
                } else {
                    paths.extend(matched);
                }
            }
            Err(_) => paths.push(file.clone()),
        }
    }

    paths
}

fn check_stdin(config: &Config) -> Result<ScanResult, Error> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(scan_source(&source, config))
}

fn check_file(path: &Path, config: &Config) -> Result<ScanResult, Error> {
    let source = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::NotFound(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;
    Ok(scan_source(&source, config))
}

/// Print a scan report, optionally preceded by the file path.
///
/// Reports are colored only when stdout is a terminal, so piped output
/// keeps the plain message text.
fn print_report(result: &ScanResult, path: Option<&Path>) {
    if let Some(path) = path {
        println!("{}:", path.display());
    }

    let report = result.to_string();
    if io::stdout().is_terminal() {
        if result.is_balanced() {
            println!("{}", report.green());
        } else {
            println!("{}", report.red());
        }
    } else {
        println!("{report}");
    }
}

#[derive(Debug, Error)]
enum Error {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_paths_passes_plain_paths_through() {
        let files = vec![PathBuf::from("a.rs"), PathBuf::from("missing.rs")];
        assert_eq!(expand_paths(&files), files);
    }

    #[test]
    fn test_expand_paths_expands_globs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.rs"), "fn a() {}\n").unwrap();
        fs::write(dir.path().join("b.rs"), "fn b() {}\n").unwrap();
        fs::write(dir.path().join("c.txt"), "text\n").unwrap();

        let pattern = dir.path().join("*.rs");
        let paths = expand_paths(&[pattern]);
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.extension().unwrap() == "rs"));
    }

    #[test]
    fn test_expand_paths_keeps_unmatched_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = dir.path().join("*.nomatch");
        let paths = expand_paths(&[pattern.clone()]);
        assert_eq!(paths, vec![pattern]);
    }

    #[test]
    fn test_check_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.rs");
        let err = check_file(&path, &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), format!("File not found: {}", path.display()));
    }

    #[test]
    fn test_check_file_scans_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("open.rs");
        fs::write(&path, "fn main() {\n").unwrap();

        let result = check_file(&path, &Config::default()).unwrap();
        assert!(!result.is_balanced());
    }

    #[test]
    fn test_load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("delimcheck.toml");
        fs::write(&path, "comment_marker = \"#\"\n").unwrap();

        let args = Args {
            files: Vec::new(),
            stdin: false,
            quiet: false,
            config: Some(path),
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.comment_marker, "#");
    }

    #[test]
    fn test_load_config_rejects_invalid_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("delimcheck.toml");
        fs::write(&path, "comment_marker = \"\"\n").unwrap();

        let args = Args {
            files: Vec::new(),
            stdin: false,
            quiet: false,
            config: Some(path),
        };
        assert!(load_config(&args).is_err());
    }
}
