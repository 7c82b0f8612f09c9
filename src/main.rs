//! tinted - print a source file with syntax colors

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use log::{info, warn};

use tinted::render::{render_surface, RenderOptions};
use tinted::syntax::{TokenizerRegistry, PLAIN_TEXT};
use tinted::{
    FileSettingsStore, HighlightController, HighlighterConfig, MemorySettingsStore, Result, TextSurface, ThemeSource,
};

/// Parsed command line
struct Args {
    file: PathBuf,
    language: Option<String>,
    theme: Option<PathBuf>,
    settings: Option<PathBuf>,
    width: Option<usize>,
    line_numbers: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Handle --help and --version
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            _ => {}
        }
    }

    let args = match parse_args(command_args(&args)) {
        Some(args) => args,
        None => {
            print_usage();
            process::exit(2);
        }
    };

    let content = fs::read_to_string(&args.file)?;
    let registry = TokenizerRegistry::with_builtins();
    let language = match &args.language {
        Some(id) => id.clone(),
        None => registry
            .detect_language(&args.file)
            .unwrap_or(PLAIN_TEXT)
            .to_string(),
    };
    info!("{}: {}", args.file.display(), language);

    let surface = TextSurface::with_content(&content);
    let config = HighlighterConfig::for_language(&language);
    let mut controller = match settings_store(&args) {
        Some(store) => HighlightController::new(surface, registry, store, config)?,
        None => {
            warn!("no home directory; settings will not be saved");
            HighlightController::new(surface, registry, MemorySettingsStore::default(), config)?
        }
    };

    match &args.theme {
        Some(theme) => {
            controller.switch_theme(&ThemeSource::File(theme.clone()))?;
        }
        None => {
            controller.initial_highlight();
        }
    }

    let options = RenderOptions {
        width: args.width,
        line_numbers: args.line_numbers,
    };
    let stdout = io::stdout();
    render_surface(&mut stdout.lock(), controller.surface(), &options)?;
    Ok(())
}

fn settings_store(args: &Args) -> Option<FileSettingsStore> {
    match &args.settings {
        Some(path) => Some(FileSettingsStore::new(path.clone())),
        None => FileSettingsStore::user(),
    }
}

/// Arguments after the program name; argv may be empty
fn command_args(argv: &[String]) -> &[String] {
    argv.get(1..).unwrap_or_default()
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut file = None;
    let mut language = None;
    let mut theme = None;
    let mut settings = None;
    let mut width = None;
    let mut line_numbers = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--language" | "-l" => language = Some(iter.next()?.clone()),
            "--theme" | "-t" => theme = Some(PathBuf::from(iter.next()?)),
            "--settings" => settings = Some(PathBuf::from(iter.next()?)),
            "--width" | "-w" => width = Some(iter.next()?.parse().ok()?),
            "--line-numbers" | "-n" => line_numbers = true,
            other if other.starts_with('-') => return None,
            other => file = Some(PathBuf::from(other)),
        }
    }

    Some(Args {
        file: file?,
        language,
        theme,
        settings,
        width,
        line_numbers,
    })
}

fn print_usage() {
    println!("tinted {} - print a source file with syntax colors", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tinted [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -l, --language ID    Language to highlight as (default: from file name)");
    println!("  -t, --theme FILE     Switch to a theme file and save it to the settings");
    println!("      --settings FILE  Settings file (default: ~/.tinted.toml)");
    println!("  -w, --width N        Truncate lines to N columns");
    println!("  -n, --line-numbers   Show line numbers");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Languages: {}", TokenizerRegistry::with_builtins().languages().join(", "));
}

fn print_version() {
    println!("tinted {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let args = parse_args(&strings(&["-l", "go", "-w", "80", "-n", "main.go"])).unwrap();
        assert_eq!(args.file, PathBuf::from("main.go"));
        assert_eq!(args.language.as_deref(), Some("go"));
        assert_eq!(args.width, Some(80));
        assert!(args.line_numbers);
    }

    #[test]
    fn test_parse_args_rejects_bad_input() {
        assert!(parse_args(&[]).is_none());
        assert!(parse_args(&strings(&["--width", "wide", "a.py"])).is_none());
        assert!(parse_args(&strings(&["--bogus", "a.py"])).is_none());
        assert!(parse_args(&strings(&["a.py", "--theme"])).is_none());
    }

    #[test]
    fn test_empty_argv_has_no_arguments() {
        assert!(command_args(&[]).is_empty());
        assert!(parse_args(command_args(&[])).is_none());
        assert_eq!(command_args(&strings(&["tinted", "a.py"])), &strings(&["a.py"])[..]);
    }
}
