#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod data;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Keanuverse - Keanu Reeves fan portal
#[derive(Parser, Debug)]
#[command(name = "keanuverse-desktop")]
#[command(about = "Keanuverse - portfolio, fan gallery, and the GVIPC membership wizard")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Simulate a refused camera/microphone permission prompt
    #[arg(long)]
    deny_capture: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!(
        "Starting Keanuverse ({}x{}, capture {})",
        args.width,
        args.height,
        if args.deny_capture { "denied" } else { "granted" }
    );

    // The capture toggle has to be set before App builds its services
    context::set_deny_capture(args.deny_capture);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Keanu Reeves | Official Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
