use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::{Vec2, Vec3};
use gridlight_common::Ray;
use gridlight_grid::LevelLayout;
use gridlight_mesh::{LevelMaterials, LevelMesh, MeshBuilder, MeshVertex};
use gridlight_render::{DebugTextRenderer, LevelRenderer, SpotLight, TopDownCamera, aim_light};
use gridlight_tools::{LevelInspector, LevelSummary};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Level used when no layout file is given: two rooms joined by a corridor.
const DEMO_LAYOUT: &str = include_str!("../../../levels/demo.yaml");

#[derive(Parser)]
#[command(name = "gridlight-cli", about = "CLI tool for gridlight levels")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Build a level and print its summary and draw plan
    Build {
        /// YAML level layout (built-in demo level when omitted)
        level: Option<PathBuf>,
    },
    /// Cast a ray into the level and report the nearest hit
    Pick {
        /// YAML level layout (built-in demo level when omitted)
        level: Option<PathBuf>,
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        origin: Vec3,
        /// Ray direction as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        direction: Vec3,
    },
    /// Re-aim the spot light at the level point under a screen position
    Aim {
        /// YAML level layout (built-in demo level when omitted)
        level: Option<PathBuf>,
        /// Normalized screen position as u,v (0,0 is top-left)
        #[arg(long, value_parser = parse_vec2, default_value = "0.5,0.5")]
        screen: Vec2,
        /// Light position as x,y,z (defaults to above the level centre)
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        light: Option<Vec3>,
    },
    /// Write vertex and index buffers as JSON
    Export {
        /// YAML level layout (built-in demo level when omitted)
        level: Option<PathBuf>,
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("gridlight-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", gridlight_common::crate_info());
            println!("grid: {}", gridlight_grid::crate_info());
            println!("query: {}", gridlight_query::crate_info());
            println!("mesh: {}", gridlight_mesh::crate_info());
            println!("render: {}", gridlight_render::crate_info());
            println!("tools: {}", gridlight_tools::crate_info());
        }
        Commands::Build { level } => {
            let level = load_level(level.as_deref())?;
            println!("{}", LevelInspector::summary(&level));
            print!(
                "{}",
                DebugTextRenderer::new().render(&level, &framing_camera(&level))
            );
        }
        Commands::Pick {
            level,
            origin,
            direction,
        } => {
            let level = load_level(level.as_deref())?;
            let ray = Ray::new(origin, direction);
            match level.pick(&ray) {
                Some(hit) => {
                    println!(
                        "Hit: distance={:.4} point=({:.3}, {:.3}, {:.3}) cell={}",
                        hit.distance, hit.point.x, hit.point.y, hit.point.z, hit.cell
                    );
                    if let Some(info) = LevelInspector::inspect_cell(&level, hit.cell) {
                        println!("{info}");
                    }
                }
                None => println!("No intersection"),
            }
        }
        Commands::Aim {
            level,
            screen,
            light,
        } => {
            let level = load_level(level.as_deref())?;
            let camera = framing_camera(&level);
            let center = level_center(&level);
            let position = light.unwrap_or_else(|| {
                center + Vec3::Y * level.dimensions().ceiling_height() * 0.75
            });

            let mut spot = SpotLight::new(position, Vec3::NEG_Y);
            let ray = camera.screen_ray(screen.x, screen.y);
            match aim_light(&mut spot, &level, &ray) {
                Some(hit) => println!(
                    "Light at ({:.2}, {:.2}, {:.2}) aimed at ({:.3}, {:.3}, {:.3}) in cell {}: direction=({:.4}, {:.4}, {:.4})",
                    spot.position.x,
                    spot.position.y,
                    spot.position.z,
                    hit.point.x,
                    hit.point.y,
                    hit.point.z,
                    hit.cell,
                    spot.direction.x,
                    spot.direction.y,
                    spot.direction.z
                ),
                None => println!("No intersection; light unchanged"),
            }
        }
        Commands::Export { level, out } => {
            let level = load_level(level.as_deref())?;
            let export = MeshExport::new(&level);
            let json = serde_json::to_string_pretty(&export)?;
            std::fs::write(&out, json)
                .with_context(|| format!("writing {}", out.display()))?;
            println!(
                "Exported {} vertices, {} indices to {}",
                level.vertices().len(),
                level.indices().len(),
                out.display()
            );
        }
    }

    Ok(())
}

/// JSON shape written by `export`.
#[derive(Serialize)]
struct MeshExport<'a> {
    summary: LevelSummary,
    materials: &'a LevelMaterials,
    vertices: &'a [MeshVertex],
    indices: &'a [u32],
    wall_range: [usize; 2],
    floor_range: [usize; 2],
}

impl<'a> MeshExport<'a> {
    fn new(level: &'a LevelMesh) -> Self {
        let (walls, floors) = (level.wall_range(), level.floor_range());
        Self {
            summary: LevelInspector::summary(level),
            materials: level.materials(),
            vertices: level.vertices(),
            indices: level.indices(),
            wall_range: [walls.start, walls.end],
            floor_range: [floors.start, floors.end],
        }
    }
}

fn load_level(path: Option<&Path>) -> anyhow::Result<LevelMesh> {
    let layout = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading level {}", path.display()))?;
            LevelLayout::from_yaml(&text)
                .with_context(|| format!("parsing level {}", path.display()))?
        }
        None => LevelLayout::from_yaml(DEMO_LAYOUT).context("parsing built-in demo level")?,
    };

    let grid = layout.to_grid()?;
    let dimensions = layout.dimensions()?;
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        floors = grid.floor_count(),
        "level layout loaded"
    );

    Ok(MeshBuilder::new(dimensions)
        .with_materials(LevelMaterials {
            wall: layout.wall_material,
            floor: layout.floor_material,
        })
        .build_grid(&grid))
}

fn level_center(level: &LevelMesh) -> Vec3 {
    let (min, max) = level
        .boundaries()
        .iter()
        .map(|b| b.bounds())
        .fold((Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)), |(lo, hi), b| {
            (lo.min(b.min), hi.max(b.max))
        });
    if min.x > max.x {
        return Vec3::ZERO;
    }
    Vec3::new((min.x + max.x) * 0.5, 0.0, (min.z + max.z) * 0.5)
}

fn framing_camera(level: &LevelMesh) -> TopDownCamera {
    let center = level_center(level);
    let extent = level
        .boundaries()
        .iter()
        .map(|b| {
            let d = b.bounds().max - center;
            d.x.abs().max(d.z.abs())
        })
        .fold(1.0_f32, f32::max);
    TopDownCamera::framing(center, extent * 2.0)
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f32; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got {s:?}"));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid number {part:?}: {e}"))?;
    }
    Ok(out)
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    parse_floats::<3>(s).map(Vec3::from_array)
}

fn parse_vec2(s: &str) -> Result<Vec2, String> {
    parse_floats::<2>(s).map(Vec2::from_array)
}
