//! Lexident CLI entry point

use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexident::{detect, normalize, verify, Cli, LexidentError, OutputFormat};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> lexident::Result<String> {
    let cli = Cli::parse();

    let code = read_input(&cli.file)?;
    if cli.verbose {
        eprintln!("Read {} bytes from {}", code.len(), cli.file.display());
    }

    match &cli.claim {
        Some(claimed) => {
            let claim = normalize(claimed);
            let verdict = verify(&code, claimed);
            if cli.verbose {
                eprintln!(
                    "Claimed: {} ({})",
                    claim.display_name(),
                    claim.key()
                );
            }
            match cli.format {
                OutputFormat::Text => {
                    if verdict.accepted {
                        Ok(format!("accepted: {}", verdict.detected.display_name()))
                    } else {
                        // Surface both names so the submitter can self-correct.
                        Ok(format!(
                            "rejected: claimed {}, detected {}",
                            claim.display_name(),
                            verdict.detected.display_name()
                        ))
                    }
                }
                OutputFormat::Json => {
                    let report = serde_json::json!({
                        "accepted": verdict.accepted,
                        "claimed": claim.key(),
                        "detected": verdict.detected.key(),
                    });
                    Ok(serde_json::to_string(&report)?)
                }
            }
        }
        None => {
            let detected = detect(&code);
            match cli.format {
                OutputFormat::Text => Ok(detected.display_name().to_string()),
                OutputFormat::Json => {
                    let report = serde_json::json!({ "detected": detected.key() });
                    Ok(serde_json::to_string(&report)?)
                }
            }
        }
    }
}

/// Read the snippet from a file, or from stdin when FILE is "-"
fn read_input(path: &Path) -> lexident::Result<String> {
    if path.as_os_str() == "-" {
        let mut code = String::new();
        std::io::stdin().read_to_string(&mut code)?;
        return Ok(code);
    }

    if !path.exists() {
        return Err(LexidentError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    Ok(fs::read_to_string(path)?)
}
