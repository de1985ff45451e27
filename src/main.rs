//! CLI entry point for foldertree

use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use foldertree::{
    BranchStyle, FolderTreeError, TreeConfig, logging, resolve_output_path, resolve_root,
    write_tree_file,
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Number of positional arguments that carry meaning.
const RECOGNIZED_POSITIONALS: usize = 5;

const USAGE: &str = "Usage:\n  foldertree <ROOT> <OUTPUT> [SHOW_FILES=true] \
                     [SHOW_EXCLUDED_FILES=false] [SHOW_EXCLUDED_FOLDERS=false]";

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

/// Determine whether to color diagnostics based on mode and environment.
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
#[command(name = "foldertree")]
#[command(about = "Write a directory tree to a text file, skipping build output and secrets")]
#[command(version)]
#[command(after_help = "Put options before ROOT or right after OUTPUT: once SHOW_FILES is given, \
                        later arguments starting with '-' may be taken as flag values.")]
struct Args {
    /// Directory to render
    root: PathBuf,

    /// File to write; relative paths are resolved against ROOT
    output: PathBuf,

    /// Show regular files ("true" to enable, default: true)
    #[arg(value_name = "SHOW_FILES", allow_hyphen_values = true)]
    show_files: Option<String>,

    /// Still list excluded files such as .env (default: false)
    #[arg(value_name = "SHOW_EXCLUDED_FILES", allow_hyphen_values = true)]
    show_excluded_files: Option<String>,

    /// Still list excluded folders, annotated and not descended (default: false)
    #[arg(value_name = "SHOW_EXCLUDED_FOLDERS", allow_hyphen_values = true)]
    show_excluded_folders: Option<String>,

    #[arg(hide = true, allow_hyphen_values = true)]
    extra: Vec<String>,

    /// Draw branches with ASCII characters instead of box-drawing ones
    #[arg(long)]
    ascii: bool,

    /// Control color of diagnostics: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn tree_config(&self) -> TreeConfig {
        let defaults = TreeConfig::default();
        TreeConfig {
            show_files: parse_flag(self.show_files.as_deref(), defaults.show_files),
            show_excluded_files: parse_flag(
                self.show_excluded_files.as_deref(),
                defaults.show_excluded_files,
            ),
            show_excluded_folders: parse_flag(
                self.show_excluded_folders.as_deref(),
                defaults.show_excluded_folders,
            ),
            style: if self.ascii {
                BranchStyle::Ascii
            } else {
                BranchStyle::Unicode
            },
            ..defaults
        }
    }

    /// Positional arguments given on the command line.
    fn positional_count(&self) -> usize {
        let flags = [
            &self.show_files,
            &self.show_excluded_files,
            &self.show_excluded_folders,
        ];
        2 + flags.iter().filter(|v| v.is_some()).count() + self.extra.len()
    }
}

/// Only the text `true`, in any letter case, enables a flag.
fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) => v.eq_ignore_ascii_case("true"),
        None => default,
    }
}

fn write_labeled(use_color: bool, label: &str, color: Color, message: &str) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    stderr.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(stderr, "{}", label)?;
    stderr.reset()?;
    writeln!(stderr, " :: {}", message)
}

fn report_error(use_color: bool, message: &str) {
    let _ = write_labeled(use_color, "ERR", Color::Red, message);
}

fn report_warning(use_color: bool, message: &str) {
    let _ = write_labeled(use_color, "WARN", Color::Yellow, message);
}

/// Find `--color` on a raw command line that failed to parse.
fn color_mode_from_args<I>(args: I) -> ColorMode
where
    I: IntoIterator<Item = OsString>,
{
    let mut mode = ColorMode::Auto;
    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        let arg = arg.to_string_lossy().to_string();
        if arg == "--" {
            break;
        }
        let value = if arg == "--color" {
            args.next().map(|v| v.to_string_lossy().to_string())
        } else {
            arg.strip_prefix("--color=").map(str::to_string)
        };
        if let Some(parsed) = value.and_then(|v| ColorMode::from_str(&v, true).ok()) {
            mode = parsed;
        }
    }
    mode
}

/// Convert a clap parse failure into a usage error; help and version exit 0.
fn usage_error(err: clap::Error) -> FolderTreeError {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::MissingRequiredArgument => {
            FolderTreeError::Usage("Missing required arguments".to_string())
        }
        _ => {
            let rendered = err.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            FolderTreeError::Usage(first.trim_start_matches("error: ").to_string())
        }
    }
}

fn run(args: &Args, use_color: bool) -> foldertree::Result<()> {
    if !args.extra.is_empty() {
        report_warning(
            use_color,
            &format!(
                "{} arguments provided; only {} are used",
                args.positional_count(),
                RECOGNIZED_POSITIONALS
            ),
        );
    }

    let root = resolve_root(&args.root)?;
    let output = resolve_output_path(&root, &args.output);
    let config = args.tree_config();

    write_tree_file(&root, &output, &config)?;
    println!("Folder tree written to: {}", output.display());
    Ok(())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let err = usage_error(e);
            let use_color = should_use_color(color_mode_from_args(std::env::args_os()));
            report_error(use_color, &err.to_string());
            eprintln!("{}", USAGE);
            process::exit(err.exit_code());
        }
    };

    logging::init(args.verbose);
    let use_color = should_use_color(args.color);

    if let Err(e) = run(&args, use_color) {
        report_error(use_color, &e.to_string());
        process::exit(e.exit_code());
    }
}
