//! flowbox-dump - run one layout pass over a scene file and print the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowbox::SceneConfig;
use flowbox::layout::{LayoutNode, Measurable};

#[derive(Parser, Debug)]
#[command(name = "flowbox-dump", about = "Lay out a JSON scene and print node bounds")]
struct Args {
    /// Path to the scene JSON file
    scene: PathBuf,

    /// Log layout passes (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "flowbox=trace" } else { "flowbox=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let scene = SceneConfig::load(&args.scene)
        .with_context(|| format!("failed to load scene '{}'", args.scene.display()))?;
    let mut root = scene.build().context("scene failed validation")?;
    let warnings = root.update().unwrap_or_default();

    let mut out = String::new();
    dump_node(root.node(), 0, &mut out);
    print!("{}", out);

    if !warnings.is_empty() {
        println!();
        println!("{} warning(s):", warnings.len());
        for warning in &warnings {
            println!(
                "  [{:?}] {} (depth {}): {}",
                warning.kind, warning.container, warning.depth, warning.message
            );
        }
    }
    Ok(())
}

fn dump_node(node: &LayoutNode, depth: usize, out: &mut String) {
    let bounds = node.bounds();
    let hidden = if node.is_visible() { "" } else { " hidden" };
    out.push_str(&format!(
        "{:indent$}{} [{}] x={:.1} y={:.1} w={:.1} h={:.1} scale={:.3}{}\n",
        "",
        node.label(),
        node.params.size_mode,
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
        node.scale(),
        hidden,
        indent = depth * 2,
    ));
    for child in node.children() {
        dump_node(child, depth + 1, out);
    }
}
