use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use trifill::{FillRule, PixBuf, RasterConfig, Rasterizer, Scene, Vertex};

#[derive(Parser)]
#[command(name = "trifill", version, about = "Rasterize solid triangles into an 8-bit pixel buffer")]
struct Cli {
    /// Print the SHA-256 of the buffer instead of ASCII art
    #[arg(long, global = true)]
    digest: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill one triangle given as three `x,y` vertices
    Triangle {
        #[arg(allow_hyphen_values = true, num_args = 3, required = true)]
        vertices: Vec<Vertex>,
        #[arg(long, default_value_t = 32)]
        width: usize,
        #[arg(long, default_value_t = 16)]
        height: usize,
        #[arg(long, default_value_t = 1)]
        color: u8,
        /// `reference` or `top-left`
        #[arg(long, default_value_t = FillRule::Reference)]
        rule: FillRule,
        /// JSON rasterizer configuration; `--rule` overrides its fill rule
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Replay a JSON scene file
    Scene { path: PathBuf },
}

fn run_triangle(
    vertices: &[Vertex],
    width: usize,
    height: usize,
    color: u8,
    rule: FillRule,
    config: Option<PathBuf>,
) -> anyhow::Result<PixBuf> {
    let mut config = match config {
        Some(path) => RasterConfig::from_path(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RasterConfig::default(),
    };
    config.fill_rule = rule;

    let mut buf = PixBuf::new(width, height)?;
    buf.set_fg_color(color);
    Rasterizer::new(config).try_draw_triangle(&mut buf, vertices[0], vertices[1], vertices[2])?;
    Ok(buf)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let buf = match cli.command {
        Command::Triangle {
            vertices,
            width,
            height,
            color,
            rule,
            config,
        } => run_triangle(&vertices, width, height, color, rule, config)?,
        Command::Scene { path } => Scene::from_path(&path)
            .with_context(|| format!("loading scene {}", path.display()))?
            .render()?,
    };

    if cli.digest {
        println!("{}", buf.digest());
    } else {
        print!("{}", buf.to_ascii());
    }
    Ok(())
}
