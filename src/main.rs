#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use evoa_core::ThemeMode;
use tracing_subscriber::EnvFilter;

/// Launch settings resolved from the command line.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub data_dir: PathBuf,
    /// Forces the starting theme (persisted like a toggle)
    pub theme: Option<ThemeMode>,
    /// Skip persistent storage entirely
    pub in_memory: bool,
}

/// Global launch config, set once from command line
static LAUNCH_CONFIG: OnceLock<LaunchConfig> = OnceLock::new();

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("evoa")
}

/// Get the launch config (set from command line or default)
pub fn get_launch_config() -> LaunchConfig {
    LAUNCH_CONFIG.get().cloned().unwrap_or_else(|| LaunchConfig {
        data_dir: default_data_dir(),
        theme: None,
        in_memory: false,
    })
}

fn parse_theme(s: &str) -> Result<ThemeMode, String> {
    s.parse::<ThemeMode>().map_err(|e| e.to_string())
}

/// EVO-A - where startups pitch and investors scout
#[derive(Parser, Debug)]
#[command(name = "evoa-desktop")]
#[command(about = "EVO-A - startup pitch feed for founders, investors and viewers")]
struct Args {
    /// Data directory for the preferences database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Start in this theme (dark or light)
    #[arg(short, long, value_parser = parse_theme)]
    theme: Option<ThemeMode>,

    /// Keep the theme in memory only
    #[arg(long)]
    in_memory: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = LaunchConfig {
        data_dir: args.data_dir.unwrap_or_else(default_data_dir),
        theme: args.theme,
        in_memory: args.in_memory,
    };

    tracing::info!(
        data_dir = ?config.data_dir,
        theme = ?config.theme,
        in_memory = config.in_memory,
        "Starting EVO-A"
    );

    let _ = LAUNCH_CONFIG.set(config);

    // Phone-shaped window: the feed is designed mobile-first
    let window_width = 480.0;
    let window_height = 900.0;

    let desktop_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("EVO-A")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(app::App);
}
