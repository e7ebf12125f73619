//! CLI entry point for workspace-tree

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use workspace_tree::{
    Delivery, ExportOptions, ExportType, GenerationResult, LogSink, PathFormat, Settings,
    StderrLog, TreeRenderer, build_tree, render_json, renderer_for,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Document format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Connectors, icons and a code fence
    #[default]
    Markdown,
    /// Simple indented tree
    Plaintext,
    /// The tree as JSON
    Json,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "workspace-tree")]
#[command(about = "Export a directory tree as Markdown or plain text")]
#[command(version)]
struct Args {
    /// Directory to export
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Include hidden files and folders (names starting with ".")
    #[arg(short = 'a', long = "hidden")]
    hidden: bool,

    /// Show entry names or full absolute paths
    #[arg(long = "path-format", value_name = "FORMAT", default_value = "relative")]
    path_format: PathFormat,

    /// Output document format
    #[arg(short = 'f', long = "format", default_value = "markdown")]
    format: Format,

    /// Exclude entries with exactly this name (can be used multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Start from an empty exclusion list instead of the defaults
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Settings file (default: .workspacetree.json in the exported directory)
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the document to stdout instead of copying it to the clipboard
    #[arg(long = "stdout", conflicts_with = "output")]
    stdout: bool,

    /// Write the document to FILE instead of copying it to the clipboard
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Control color of notifications: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Do not print diagnostic log lines
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Args {
    fn delivery(&self) -> Delivery {
        if self.stdout {
            Delivery::Stdout
        } else if let Some(ref path) = self.output {
            Delivery::File(path.clone())
        } else {
            Delivery::Clipboard
        }
    }

    fn export_options(&self) -> ExportOptions {
        ExportOptions {
            include_hidden: self.hidden,
            path_format: self.path_format,
            export_type: match self.format {
                Format::Plaintext => ExportType::PlainText,
                Format::Markdown | Format::Json => ExportType::Markdown,
            },
        }
    }

    /// Exclusion names from settings (or defaults), plus any `--exclude` flags.
    fn exclude_patterns(&self, root: &Path) -> Result<Vec<String>, String> {
        let mut patterns = if self.no_default_excludes {
            Vec::new()
        } else {
            let settings = match self.config {
                Some(ref path) => Settings::load(path),
                None => Settings::discover(root),
            }
            .map_err(|e| e.to_string())?;
            settings.exclude_patterns()
        };
        for name in &self.exclude {
            if !patterns.contains(name) {
                patterns.push(name.clone());
            }
        }
        Ok(patterns)
    }
}

/// Write a one-line notice to stderr in the given color.
fn notify(use_color: bool, color: Color, message: &str) {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(stderr, "{}", message);
    let _ = stderr.reset();
    let _ = writeln!(stderr);
}

fn main() {
    let args = Args::parse();
    let use_color = should_use_color(args.color);
    let log = if args.quiet {
        StderrLog::quiet()
    } else {
        StderrLog::new()
    };

    // Made absolute as given; symlinks in the path are kept, not resolved
    let root = match std::path::absolute(&args.path) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("workspace-tree: cannot access '{}': {}", args.path.display(), e);
            process::exit(1);
        }
    };
    match std::fs::metadata(&root) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            eprintln!(
                "workspace-tree: cannot access '{}': Not a directory",
                args.path.display()
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("workspace-tree: cannot access '{}': {}", args.path.display(), e);
            process::exit(1);
        }
    }

    let exclude_patterns = args.exclude_patterns(&root).unwrap_or_else(|e| {
        eprintln!("workspace-tree: {}", e);
        process::exit(1);
    });

    let options = args.export_options();
    let tree = build_tree(&root, &options, &exclude_patterns, &log);

    let result: GenerationResult = if args.format == Format::Json {
        render_json(&tree).unwrap_or_else(|e| {
            eprintln!("workspace-tree: cannot serialize tree: {}", e);
            process::exit(1);
        })
    } else {
        renderer_for(options).render(&tree)
    };

    let delivery = args.delivery();
    let stdout = io::stdout();
    match delivery.deliver(&result.text, &mut stdout.lock()) {
        Ok(()) => {
            log.log(&format!(
                "Export complete. Dirs: {}, Files: {}",
                result.dir_count, result.file_count
            ));
            notify(
                use_color,
                Color::Green,
                &delivery.success_message(result.dir_count, result.file_count),
            );
        }
        Err(e) => {
            log.log(&format!("ERROR: {}", e));
            notify(
                use_color,
                Color::Red,
                &format!("WorkspaceTree: Export failed: {}", e),
            );
            process::exit(1);
        }
    }
}
