//! CLI binary for note2clip.
//!
//! A thin shim over the library crate: loads settings, maps CLI flags over
//! them to a `ConversionConfig`, then converts, copies or writes the result.

use anyhow::{Context, Result};
use clap::Parser;
use note2clip::notify::{COPY_FAILURE_MESSAGE, COPY_SUCCESS_MESSAGE};
use note2clip::{
    convert_source, copy_note_to_clipboard, resolve_input, write_html, ClipboardWriteError,
    ConversionOutput, CopyOutcome, Notifier, Settings, SystemClipboard,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── Terminal notifier ────────────────────────────────────────────────────────

struct CliNotifier {
    quiet: bool,
}

impl Notifier for CliNotifier {
    fn on_copy_success(&self) {
        if !self.quiet {
            eprintln!("{} {}", green("✔"), COPY_SUCCESS_MESSAGE);
        }
    }

    fn on_copy_failure(&self, error: &ClipboardWriteError) {
        eprintln!("{} {}", red("✘"), COPY_FAILURE_MESSAGE);
        eprintln!("  {}", dim(&error.to_string()));
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Print styled HTML to stdout
  note2clip fundur.md

  # Put the note on the clipboard
  note2clip --copy fundur.md

  # Read from stdin, write to a file
  cat fundur.md | note2clip - -o fundur.html

  # Bare HTML without styles
  note2clip --no-inline-styles --no-style-block fundur.md

  # JSON output with the preprocessed Markdown and stats
  note2clip --json fundur.md > fundur.json

  # Change a persisted setting
  note2clip --set clipboard_command="xclip -selection clipboard -t text/html"

SETTINGS:
  strip_metadata     Strip front-matter, label lines and the title (default: true)
  inline_styles      Add style="…" attributes to tags (default: true)
  style_block        Prepend a <style> block (default: true)
  clipboard_command  Program that receives HTML on stdin (default: auto-detect)

  Stored as JSON in $XDG_CONFIG_HOME/note2clip/settings.json
  (or ~/.config/note2clip/settings.json). CLI flags override settings.

ENVIRONMENT VARIABLES:
  NOTE2CLIP_SETTINGS           Path to the settings file
  NOTE2CLIP_CLIPBOARD_COMMAND  Clipboard program and arguments
  RUST_LOG                     Override the log filter
"#;

/// Convert Markdown meeting notes to inline-styled HTML.
#[derive(Parser, Debug)]
#[command(
    name = "note2clip",
    version,
    about = "Convert Markdown meeting notes to inline-styled HTML",
    long_about = "Convert a Markdown meeting note to HTML with inline styles that survive \
pasting into mail clients and word processors. The title becomes the meeting date, \
front-matter and label lines are removed and lists are nested.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Note file path, or `-` for stdin.
    input: Option<String>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long, env = "NOTE2CLIP_OUTPUT")]
    output: Option<PathBuf>,

    /// Copy the HTML to the system clipboard.
    #[arg(short, long, env = "NOTE2CLIP_COPY")]
    copy: bool,

    /// Clipboard program and arguments, e.g. "wl-copy --type text/html".
    #[arg(long, env = "NOTE2CLIP_CLIPBOARD_COMMAND")]
    clipboard_command: Option<String>,

    /// Do not add style attributes to tags.
    #[arg(long)]
    no_inline_styles: bool,

    /// Do not prepend the <style> block.
    #[arg(long)]
    no_style_block: bool,

    /// Render the note as-is: keep front-matter, labels and the title.
    #[arg(long)]
    keep_metadata: bool,

    /// Output structured JSON (ConversionOutput) instead of HTML.
    #[arg(long, env = "NOTE2CLIP_JSON")]
    json: bool,

    /// Settings file to load and save.
    #[arg(long, env = "NOTE2CLIP_SETTINGS")]
    settings: Option<PathBuf>,

    /// Persist the effective settings (including flag overrides).
    #[arg(long)]
    save_settings: bool,

    /// Change a persisted setting. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    set: Vec<(String, String)>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "NOTE2CLIP_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "NOTE2CLIP_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Settings ─────────────────────────────────────────────────────────
    let settings_path = cli.settings.clone().or_else(Settings::default_path);
    let mut settings = match &settings_path {
        Some(path) => Settings::load(path).context("Failed to load settings")?,
        None => Settings::default(),
    };

    if !cli.set.is_empty() {
        let mut changed = false;
        for (key, value) in &cli.set {
            changed |= settings.set(key, value)?;
        }
        if changed {
            let path = settings_path
                .as_deref()
                .context("No settings path: pass --settings or set HOME")?;
            settings.save(path)?;
            if !cli.quiet {
                eprintln!("{} Saved settings to {}", green("✔"), bold(&path.display().to_string()));
            }
        }
    }

    apply_overrides(&cli, &mut settings);

    if cli.save_settings {
        let path = settings_path
            .as_deref()
            .context("No settings path: pass --settings or set HOME")?;
        settings.save(path)?;
        if !cli.quiet {
            eprintln!("{} Saved settings to {}", green("✔"), bold(&path.display().to_string()));
        }
    }

    let Some(input) = cli.input.as_deref() else {
        if cli.set.is_empty() && !cli.save_settings {
            anyhow::bail!("No input given. Pass a note file or `-` for stdin.");
        }
        return Ok(ExitCode::SUCCESS);
    };

    // ── Run conversion ───────────────────────────────────────────────────
    let config = settings.to_config();
    let source = resolve_input(input);

    let (output, copied) = if cli.copy {
        let sink = SystemClipboard::new(settings.clipboard_command.as_deref());
        let notifier = CliNotifier { quiet: cli.quiet };
        let outcome = copy_note_to_clipboard(&source, &sink, &notifier, &config)
            .await
            .context("Conversion failed")?;
        let copied = outcome.is_copied();
        let output = match outcome {
            CopyOutcome::Copied(output) | CopyOutcome::Failed { output, .. } => output,
        };
        (output, Some(copied))
    } else {
        let output = convert_source(&source, &config).context("Conversion failed")?;
        (output, None)
    };

    // ── Deliver ──────────────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        write_html(output_path, &output.html)?;
        if !cli.quiet {
            eprintln!(
                "{}  {} lines  {}µs  →  {}",
                green("✔"),
                output.stats.total_lines,
                output.stats.duration_us,
                bold(&output_path.display().to_string()),
            );
        }
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else if cli.output.is_none() && copied.is_none() {
        print_html(&output)?;
    }

    if !cli.quiet && cli.output.is_none() && !cli.json {
        eprintln!(
            "Converted {} lines ({} list runs) in {}µs",
            output.stats.total_lines, output.stats.list_runs, output.stats.duration_us
        );
    }

    Ok(match copied {
        Some(false) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

/// Flags win over the settings file.
fn apply_overrides(cli: &Cli, settings: &mut Settings) {
    if cli.no_inline_styles {
        settings.inline_styles = false;
    }
    if cli.no_style_block {
        settings.style_block = false;
    }
    if cli.keep_metadata {
        settings.strip_metadata = false;
    }
    if let Some(ref command) = cli.clipboard_command {
        let command = command.trim();
        settings.clipboard_command = (!command.is_empty()).then(|| command.to_string());
    }
}

fn print_html(output: &ConversionOutput) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(output.html.as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}

/// Parse `KEY=VALUE` for `--set`.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    Ok((key.trim().to_string(), value.to_string()))
}
