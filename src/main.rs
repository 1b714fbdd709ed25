#![allow(non_snake_case)]

mod app;
mod config;
mod pages;
mod theme;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::config::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    args.logging()
        .init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(
        title = %args.title,
        width = args.width,
        height = args.height,
        "Starting SureCover"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
