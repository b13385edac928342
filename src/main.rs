//! flatcut — rotate DXF drawings to their minimum bounding box.
//!
//! Scans a folder for `.dxf` files, rotates each one so its axis-aligned
//! bounding box has minimum area, and writes `<stem>_rotated.dxf` beside
//! the input. Files are processed independently; one bad file never
//! stops the batch.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use flatcut::io::dxf;
use flatcut::orient::orient_primitives;

#[derive(Parser)]
#[command(name = "flatcut")]
#[command(about = "Rotation-optimized 2D cutting profiles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rotate every DXF in FOLDER to its minimum bounding box
    Rotate {
        /// Folder to scan for .dxf files
        folder: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Rotate { folder } => rotate_folder(&folder),
    }
}

fn rotate_folder(folder: &Path) -> Result<()> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(folder)
        .with_context(|| format!("cannot read folder {}", folder.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("dxf"))
                && !path
                    .file_stem()
                    .is_some_and(|stem| stem.to_string_lossy().ends_with("_rotated"))
        })
        .collect();
    files.sort_by_key(|path| path.file_name().map(|n| n.to_ascii_lowercase()));

    if files.is_empty() {
        bail!("no .dxf files found in {}", folder.display());
    }
    println!("Found {} DXF file(s) in: {}\n", files.len(), folder.display());

    let mut success = 0usize;
    let mut errors: Vec<(String, String)> = Vec::new();

    for (i, path) in files.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("[{}/{}] {}", i + 1, files.len(), name);
        match rotate_file(path) {
            Ok(()) => {
                success += 1;
                println!();
            },
            Err(error) => {
                println!("  ERROR: {error:#}");
                println!();
                errors.push((name, format!("{error:#}")));
            },
        }
    }

    println!("{}", "=".repeat(50));
    println!("Processed: {success}/{} files successfully", files.len());
    if !errors.is_empty() {
        println!("Errors ({}):", errors.len());
        for (name, error) in &errors {
            println!("  - {name}: {error}");
        }
    }
    println!("Output: {}", folder.display());
    Ok(())
}

fn rotate_file(path: &Path) -> Result<()> {
    let primitives = dxf::load_path(path).context("loading DXF")?;

    let oriented = orient_primitives(&primitives);
    println!("  Rotation: {:.1}\u{b0}", oriented.rotation_deg);
    println!(
        "  Bounding box: {:.3} \u{d7} {:.3}",
        oriented.width, oriented.height
    );

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().replace(' ', "_"))
        .unwrap_or_else(|| "drawing".to_string());
    let out_path = path.with_file_name(format!("{stem}_rotated.dxf"));

    let drawing = dxf::drawing_from_oriented(&oriented);
    dxf::save_path(&drawing, &out_path).context("writing DXF")?;
    println!(
        "  Saved: {}",
        out_path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
    );
    Ok(())
}
