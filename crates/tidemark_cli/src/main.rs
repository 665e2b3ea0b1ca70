//! Tidemark theme contract CLI
//!
//! Validates shipped theme artifacts against the token contract, checks
//! fleet parity, resolves palettes to token maps, and emits the
//! canonical artifacts CI consumes.

mod config;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indexmap::IndexMap;
use serde::Serialize;
use tidemark_theme::contract;
use tidemark_theme::{
    boot_assets, check_parity, compute_token_map, read_theme_css, validate_theme, BuiltinPalette,
    Mode, ResolvedTokenMap, ThemePrefs, ThemeRegistry, TokenMap, ValidationReport,
    CONTRACT_VERSION,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(Outcome::Clean) => 0,
        Ok(Outcome::Findings) => 1,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };
    if exit_code != 0 {
        process::exit(exit_code);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<Outcome> {
    let config = config::TidemarkConfig::load(cli.config.as_deref())?;
    config.apply(ThemeRegistry::global())?;
    if !config.brands.is_empty() {
        debug!("registered {} brands from config", config.brands.len());
    }
    let themes_dir = PathBuf::from(&config.themes.dir);

    match cli.command {
        Command::Validate(args) => cmd_validate(&args, &themes_dir),
        Command::Parity(args) => cmd_parity(&args, &themes_dir),
        Command::Resolve(args) => cmd_resolve(&args),
        Command::Emit(args) => cmd_emit(&args, &themes_dir),
        Command::List => cmd_list(),
    }
}

#[derive(Parser)]
#[command(
    name = "tidemark",
    about = "Validate, resolve, and emit Tidemark theme artifacts",
    version
)]
struct Cli {
    /// Path to tidemark.toml (defaults to ./tidemark.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Audit theme artifacts against the token contract
    Validate(ValidateArgs),
    /// Check a set of artifacts for token parity
    Parity(ParityArgs),
    /// Resolve a palette to its token map
    Resolve(ResolveArgs),
    /// Write the canonical artifact for every built-in palette
    Emit(EmitArgs),
    /// Show the contract and the registered catalog
    List,
}

#[derive(Args, Default)]
struct ValidateArgs {
    /// CSS files, or directories scanned (non-recursively) for *.css
    paths: Vec<PathBuf>,
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Args, Default)]
struct ParityArgs {
    /// CSS files, or directories scanned (non-recursively) for *.css
    paths: Vec<PathBuf>,
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Args)]
struct ResolveArgs {
    /// Palette name to resolve
    #[arg(long)]
    theme: String,
    /// light or dark; omitted resolves both behind a media query
    #[arg(long)]
    mode: Option<Mode>,
    /// Brand overlay to apply on top of the palette
    #[arg(long)]
    brand: Option<String>,
    #[arg(long, value_enum, default_value_t = MapFormat::Css)]
    format: MapFormat,
}

#[derive(Args, Default)]
struct EmitArgs {
    /// Output directory (defaults to the configured themes dir)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum MapFormat {
    #[default]
    Css,
    Json,
}

/// What a command run found. Operational failures travel as errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Outcome {
    Clean,
    Findings,
}

#[derive(Serialize)]
struct ArtifactAudit<'a> {
    path: String,
    declared_id: Option<&'a str>,
    valid: bool,
    report: &'a ValidationReport,
}

fn cmd_validate(args: &ValidateArgs, themes_dir: &Path) -> Result<Outcome> {
    let files = discover_artifacts(&args.paths, themes_dir)?;
    if files.is_empty() {
        println!("no theme artifacts found");
        return Ok(Outcome::Clean);
    }

    let mut audited = Vec::with_capacity(files.len());
    for path in files {
        let artifact =
            read_theme_css(&path).with_context(|| format!("failed to load {}", path.display()))?;
        let report = validate_theme(&artifact.tokens);
        audited.push((path, artifact, report));
    }
    let failed = audited
        .iter()
        .filter(|(_, _, report)| !report.is_valid())
        .count();

    match args.format {
        ReportFormat::Json => {
            let audits: Vec<ArtifactAudit<'_>> = audited
                .iter()
                .map(|(path, artifact, report)| ArtifactAudit {
                    path: path.display().to_string(),
                    declared_id: artifact.declared_id.as_deref(),
                    valid: report.is_valid(),
                    report,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&audits)?);
        }
        ReportFormat::Text => {
            println!("{}", contract_header());
            println!();
            for (path, _, report) in &audited {
                if report.is_valid() {
                    println!("{}: ok", path.display());
                } else {
                    println!(
                        "{}: {}",
                        path.display(),
                        count_noun(report.finding_count(), "finding")
                    );
                    for line in report_lines(report) {
                        println!("  {line}");
                    }
                }
            }
            println!();
            if failed == 0 {
                println!("all {} pass", count_noun(audited.len(), "artifact"));
            } else {
                println!(
                    "{failed} of {} failed validation",
                    count_noun(audited.len(), "artifact")
                );
            }
        }
    }

    Ok(if failed == 0 {
        Outcome::Clean
    } else {
        Outcome::Findings
    })
}

fn cmd_parity(args: &ParityArgs, themes_dir: &Path) -> Result<Outcome> {
    let files = discover_artifacts(&args.paths, themes_dir)?;
    if files.is_empty() {
        println!("no theme artifacts found");
        return Ok(Outcome::Clean);
    }

    let mut artifacts: IndexMap<String, TokenMap> = IndexMap::with_capacity(files.len());
    for path in files {
        let artifact =
            read_theme_css(&path).with_context(|| format!("failed to load {}", path.display()))?;
        artifacts.insert(path.display().to_string(), artifact.tokens);
    }

    let report = check_parity(&artifacts);

    match args.format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Text => {
            println!("{}", contract_header());
            println!();
            let mut failing = 0usize;
            for entry in &report.entries {
                if entry.report.is_valid() && entry.divergent.is_empty() {
                    println!("{}: ok", entry.label);
                    continue;
                }
                failing += 1;
                let count = entry.report.finding_count() + entry.divergent.len();
                println!("{}: {}", entry.label, count_noun(count, "finding"));
                for name in &entry.divergent {
                    println!("  lacks {name} (present elsewhere in the set)");
                }
                for line in report_lines(&entry.report) {
                    println!("  {line}");
                }
            }
            println!();
            if failing == 0 {
                println!("all {} in parity", count_noun(report.entries.len(), "artifact"));
            } else {
                println!(
                    "{failing} of {} out of parity",
                    count_noun(report.entries.len(), "artifact")
                );
            }
        }
    }

    Ok(if report.passing() {
        Outcome::Clean
    } else {
        Outcome::Findings
    })
}

fn cmd_resolve(args: &ResolveArgs) -> Result<Outcome> {
    let registry = ThemeRegistry::global();
    let brand = args.brand.as_deref();

    match args.mode {
        Some(mode) => {
            let resolved = compute_token_map(registry, mode, &args.theme, brand)?;
            match args.format {
                MapFormat::Css => {
                    let selector = format!(":root[data-theme=\"{}\"]", resolved.theme_id());
                    print!("{}", resolved.css_rule(&selector));
                }
                MapFormat::Json => println!("{}", serde_json::to_string_pretty(resolved.tokens())?),
            }
        }
        None => match args.format {
            MapFormat::Css => {
                let prefs = ThemePrefs {
                    mode: None,
                    theme: args.theme.clone(),
                    brand: args.brand.clone(),
                };
                let assets = boot_assets(registry, &prefs)?;
                print!("{}", assets.style);
            }
            MapFormat::Json => {
                let light = compute_token_map(registry, Mode::Light, &args.theme, brand)?;
                let dark = compute_token_map(registry, Mode::Dark, &args.theme, brand)?;
                let both = serde_json::json!({
                    "light": light.tokens(),
                    "dark": dark.tokens(),
                });
                println!("{}", serde_json::to_string_pretty(&both)?);
            }
        },
    }

    Ok(Outcome::Clean)
}

fn cmd_emit(args: &EmitArgs, themes_dir: &Path) -> Result<Outcome> {
    let out = args.out.as_deref().unwrap_or(themes_dir);
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let registry = ThemeRegistry::global();
    for palette in BuiltinPalette::all() {
        for &mode in Mode::all() {
            let resolved = compute_token_map(registry, mode, palette.id(), None)?;
            let path = out.join(format!("{}.css", resolved.theme_id()));
            fs::write(&path, emit_artifact(&resolved))
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
    }

    Ok(Outcome::Clean)
}

fn cmd_list() -> Result<Outcome> {
    let registry = ThemeRegistry::global();
    println!("{}", contract_header());
    println!("themes: {}", registry.theme_names().join(", "));
    let brands = registry.brand_ids();
    if brands.is_empty() {
        println!("brands: (none)");
    } else {
        println!("brands: {}", brands.join(", "));
    }
    Ok(Outcome::Clean)
}

fn contract_header() -> String {
    format!(
        "contract v{CONTRACT_VERSION} ({})",
        count_noun(contract::required_tokens().count(), "required token")
    )
}

/// One line per finding, indent-ready.
fn report_lines(report: &ValidationReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.finding_count());
    for name in &report.missing {
        lines.push(format!("missing {name}"));
    }
    for name in &report.extra {
        lines.push(format!("extra {name}"));
    }
    for finding in &report.deprecated {
        lines.push(format!("deprecated {}: {}", finding.token, finding.note));
    }
    for finding in &report.unpaired {
        lines.push(format!(
            "unpaired {}: expects {}",
            finding.token, finding.expected
        ));
    }
    lines
}

fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Expand the given paths into concrete artifact files. Directories are
/// scanned one level deep for `*.css`; with no paths at all, the
/// configured themes dir is scanned if it exists.
fn discover_artifacts(paths: &[PathBuf], default_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    if paths.is_empty() {
        if default_dir.is_dir() {
            scan_css_dir(default_dir, &mut found)?;
        }
        debug!("discovered {} artifacts in {}", found.len(), default_dir.display());
        return Ok(found);
    }

    for path in paths {
        if path.is_dir() {
            scan_css_dir(path, &mut found)?;
        } else if path.is_file() {
            found.push(path.clone());
        } else {
            bail!("no such file or directory: {}", path.display());
        }
    }
    Ok(found)
}

fn scan_css_dir(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("failed to scan {}", dir.display()))? {
        let entry = entry.with_context(|| format!("failed to scan {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "css") {
            entries.push(path);
        }
    }
    entries.sort();
    found.append(&mut entries);
    Ok(())
}

/// Render one resolved map in the canonical shipped-artifact form.
fn emit_artifact(resolved: &ResolvedTokenMap) -> String {
    let header = format!(
        "/* Generated by `tidemark emit`. Palette: {} ({}). Do not edit by hand. */\n",
        resolved.theme(),
        resolved.mode()
    );
    let selector = format!(":root[data-theme=\"{}\"]", resolved.theme_id());
    format!("{header}{}", resolved.css_rule(&selector))
}
