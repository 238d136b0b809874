mod config;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use fs_err as fs;
use litfix_core::{fix_all, lint_source};
use litfix_edit::render_patch;
use litfix_rules::RuleSet;
use litfix_types::line_col;
use serde::Serialize;
use std::collections::BTreeMap;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "litfix",
    version,
    about = "Linter and autofixer for string literals."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report findings without mutating any file.
    Lint(LintArgs),
    /// Apply fixes to the given files in place.
    Fix(FixArgs),
    /// List available rules.
    ListRules(ListRulesArgs),
}

#[derive(Debug, Parser)]
struct LintArgs {
    /// Files to lint.
    #[arg(required = true)]
    paths: Vec<Utf8PathBuf>,

    /// Directory searched for litfix.toml (default: current directory).
    #[arg(long, default_value = ".")]
    config_root: Utf8PathBuf,

    /// Enable only this rule id (repeatable; overrides the config file).
    #[arg(long = "rule")]
    rules: Vec<String>,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct FixArgs {
    /// Files to fix.
    #[arg(required = true)]
    paths: Vec<Utf8PathBuf>,

    /// Directory searched for litfix.toml (default: current directory).
    #[arg(long, default_value = ".")]
    config_root: Utf8PathBuf,

    /// Enable only this rule id (repeatable; overrides the config file).
    #[arg(long = "rule")]
    rules: Vec<String>,

    /// Print the unified diff instead of writing files.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[derive(Debug, Parser)]
struct ListRulesArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<u8> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Lint(args) => cmd_lint(args),
        Command::Fix(args) => cmd_fix(args),
        Command::ListRules(args) => cmd_list_rules(args),
    }
}

fn load_ruleset(config_root: &Utf8PathBuf, cli_rules: &[String]) -> anyhow::Result<RuleSet> {
    let file_config = config::load_or_default(config_root).context("load litfix.toml config")?;
    let enabled = config::effective_rules(&file_config, cli_rules);
    debug!("enabled rules: {:?}", enabled);
    RuleSet::enabled(&enabled).context("build rule set")
}

/// One finding flattened for `--format json`.
#[derive(Debug, Serialize)]
struct JsonFinding<'a> {
    path: &'a str,
    line: usize,
    col: usize,
    rule_id: &'static str,
    severity: &'static str,
    message: &'a str,
}

fn cmd_lint(args: LintArgs) -> anyhow::Result<u8> {
    let ruleset = load_ruleset(&args.config_root, &args.rules)?;

    let mut had_findings = false;
    let mut had_parse_errors = false;
    let mut json_findings = Vec::new();

    // Reports are per file; a later file's parse error never hides an
    // earlier file's findings.
    let mut reports = Vec::new();
    for path in &args.paths {
        let source = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
        let report = lint_source(&ruleset, &source);
        reports.push((path, source, report));
    }

    for (path, source, report) in &reports {
        for finding in &report.findings {
            had_findings = true;
            let (line, col) = line_col(source, finding.token.span.start);
            match args.format {
                OutputFormat::Text => {
                    println!("{path}:{line}:{col}: [{}] {}", finding.rule_id, finding.message);
                }
                OutputFormat::Json => json_findings.push(JsonFinding {
                    path: path.as_str(),
                    line,
                    col,
                    rule_id: finding.rule_id.as_str(),
                    severity: finding.severity.label(),
                    message: &finding.message,
                }),
            }
        }
        for err in &report.errors {
            had_parse_errors = true;
            let (line, col) = line_col(source, err.offset);
            eprintln!("{path}:{line}:{col}: error: {}", err.message);
        }
    }

    if matches!(args.format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&json_findings)?);
    }

    Ok(if had_parse_errors {
        2
    } else if had_findings {
        1
    } else {
        0
    })
}

fn cmd_fix(args: FixArgs) -> anyhow::Result<u8> {
    let ruleset = load_ruleset(&args.config_root, &args.rules)?;

    let mut sources = BTreeMap::new();
    for path in &args.paths {
        let source = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
        sources.insert(path.clone(), source);
    }

    let results = fix_all(&ruleset, &sources);

    let mut failed = false;
    for (path, result) in &results {
        match result {
            Ok(patch) => {
                if args.dry_run {
                    print!("{}", render_patch(path.as_str(), &patch.original, &patch.new_text));
                } else {
                    let written = if patch.changed() {
                        fs::write(path, &patch.new_text)
                            .with_context(|| format!("write {}", path))
                    } else {
                        Ok(())
                    };
                    match written {
                        Ok(()) => println!("{path}: {} edits applied", patch.edit_count()),
                        Err(e) => {
                            // One file's I/O failure must not stop the rest
                            // of the batch from being written.
                            failed = true;
                            eprintln!("{path}: {e:#}");
                        }
                    }
                }
            }
            Err(e) => {
                // This file fails; the rest of the batch was still fixed.
                failed = true;
                eprintln!("{path}: {e}");
            }
        }
    }

    if !args.dry_run {
        info!("fixed {} file(s)", results.len());
    }

    Ok(if failed { 2 } else { 0 })
}

fn cmd_list_rules(args: ListRulesArgs) -> anyhow::Result<u8> {
    let rules = litfix_rules::builtin_rules();
    match args.format {
        OutputFormat::Text => {
            println!("Available rules:\n");
            println!("  {:<10} {:<10} DESCRIPTION", "ID", "SEVERITY");
            println!("  {:<10} {:<10} -----------", "--", "--------");
            for rule in &rules {
                println!(
                    "  {:<10} {:<10} {}",
                    rule.id(),
                    rule.severity().label(),
                    rule.description()
                );
            }
        }
        OutputFormat::Json => {
            let listed: Vec<_> = rules
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "id": r.id().as_str(),
                        "severity": r.severity().label(),
                        "description": r.description(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listed)?);
        }
    }
    Ok(0)
}
