//! autoflow-demo - lays out the sample scene and prints where every child went.
//!
//! Set `RUST_LOG=autoflow=debug` to watch lines close.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use autoflow::demo;
use autoflow::{AutoFlowLayout, FlowAttributes, Gravity, Orientation, Padding};

#[derive(Debug, Parser)]
#[command(name = "autoflow-demo", about = "Lay out button-sized children in a wrapping container")]
struct Args {
    /// JSON attributes file (`orientation`, `gravity`, `padding`).
    #[arg(long)]
    attrs: Option<PathBuf>,

    /// horizontal | vertical (overrides the attributes file).
    #[arg(long)]
    orientation: Option<Orientation>,

    /// Gravity names joined by `|`, e.g. `top|center_horizontal`.
    #[arg(long)]
    gravity: Option<Gravity>,

    /// Uniform padding (overrides the attributes file).
    #[arg(long)]
    padding: Option<i32>,

    #[arg(long, default_value_t = 480)]
    width: i32,

    #[arg(long, default_value_t = 320)]
    height: i32,

    /// Number of sample buttons.
    #[arg(long, default_value_t = 24)]
    children: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut flow = match &args.attrs {
        Some(path) => {
            let attrs = FlowAttributes::load(path)
                .with_context(|| format!("reading attributes from {}", path.display()))?;
            AutoFlowLayout::from_attributes(&attrs)
        }
        None => demo::sample_container(),
    };
    if let Some(orientation) = args.orientation {
        flow.set_orientation(orientation);
    }
    if let Some(gravity) = args.gravity {
        flow.set_gravity(gravity);
    }
    if let Some(padding) = args.padding {
        flow.set_padding(Padding::all(padding));
    }

    tracing::info!(
        "laying out {} children, {} {} in {}x{}",
        args.children,
        flow.orientation(),
        flow.gravity(),
        args.width,
        args.height
    );

    let mut children = demo::sample_children(args.children);
    let summary = flow.on_layout(true, 0, 0, args.width, args.height, &mut children);

    print!("{}", demo::describe(&children));
    println!("{} placed on {} lines", summary.placed, summary.lines);
    Ok(())
}
