#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use solodev_core::Theme;

/// Solo Dev Template - single-page subscription form
#[derive(Parser, Debug)]
#[command(name = "solodev-desktop")]
#[command(about = "Solo Dev Template - a minimal single-page form starter")]
struct Args {
    /// JSON theme override (defaults to <config dir>/solodev/theme.json if present)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

/// Theme file picked up without `--theme`
fn default_theme_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("solodev").join("theme.json"))
}

/// Load the theme override, falling back to defaults on any error.
fn resolve_theme(explicit: Option<&Path>) -> Theme {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_theme_path() {
            Some(path) if path.exists() => path,
            _ => return Theme::default(),
        },
    };

    match Theme::load(&path) {
        Ok(theme) => theme,
        Err(e) => {
            tracing::warn!("Ignoring theme {:?}: {}", path, e);
            Theme::default()
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = solodev_core::logging::init(args.verbose) {
        eprintln!("solodev-desktop: {}", e);
    }

    let theme = resolve_theme(args.theme.as_deref());
    tracing::info!(
        "Starting with primary color {} and font {:?}",
        theme.palette.primary,
        theme.font_stylesheet()
    );
    context::set_theme(theme);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("My Solo Dev Template")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let args = Args::parse_from(["solodev-desktop"]);
        assert!(args.theme.is_none());
        assert_eq!(args.width, 900.0);
        assert_eq!(args.height, 800.0);
        assert!(!args.verbose);
    }

    #[test]
    fn theme_flag() {
        let args = Args::parse_from(["solodev-desktop", "--theme", "dark.json", "-v"]);
        assert_eq!(args.theme, Some(PathBuf::from("dark.json")));
        assert!(args.verbose);
    }

    #[test]
    fn unreadable_theme_falls_back() {
        let theme = resolve_theme(Some(Path::new("/definitely/not/here/theme.json")));
        assert_eq!(theme, Theme::default());
    }
}
