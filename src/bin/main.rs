//! Tilemap Mesher CLI
//!
//! Generate OBJ meshes from a tile map image and a texture atlas.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tilemap_mesher::{
    export_obj, export_regions_json, load_image, AtlasIndex, Mesher, MesherConfig, MesherOutput,
    RegionMesh, TileMesherError,
};

#[derive(Parser)]
#[command(name = "tilemap-mesher")]
#[command(author, version, about = "Generate OBJ meshes from a tile map and texture atlas", long_about = None)]
struct Cli {
    /// Path to the tile map image
    tile_map: PathBuf,

    /// Path to the texture atlas image
    atlas: PathBuf,

    /// Output file path; `.obj` is added when there is no extension
    output: PathBuf,

    /// Tile size in pixels
    #[arg(short = 's', long, default_value_t = 16, allow_negative_numbers = true)]
    tile_size: i64,

    /// Negate the X axis of the generated vertices
    #[arg(short = 'x', long)]
    mirror_x: bool,

    /// Break the tile map into rectangles and write one mesh per rectangle
    #[arg(short, long = "break")]
    break_map: bool,

    /// Directory the output file is written into
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Also write the rectangle decomposition as JSON to this path
    #[arg(long)]
    regions: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // Reject bad configuration before any image is touched.
    let config = MesherConfig::from_raw_tile_size(cli.tile_size)?.with_mirror_x(cli.mirror_x);
    let (dir, base) = output_location(&cli.output, cli.out_dir.as_deref())?;

    println!("Loading atlas from {:?}...", cli.atlas);
    let atlas_img = load_image(&cli.atlas)?;
    let atlas = AtlasIndex::build(&atlas_img, config.tile_size);
    println!("  Found {} distinct tiles", atlas.len());

    println!("Loading tile map from {:?}...", cli.tile_map);
    let map_img = load_image(&cli.tile_map)?;
    println!("  {}x{} pixels", map_img.width(), map_img.height());

    println!("Meshing with config:");
    println!("  - Tile size: {}", config.tile_size);
    println!("  - Mirror X: {}", config.mirror_x);

    let tile_size = config.tile_size;
    let mesher = Mesher::with_config(atlas, config);

    let regions = if cli.break_map || cli.regions.is_some() {
        let regions = mesher.decompose(&map_img);
        println!("  Decomposed into {} rectangles", regions.len());
        regions
    } else {
        Vec::new()
    };

    if let Some(regions_path) = &cli.regions {
        fs::write(regions_path, export_regions_json(&regions, tile_size)?)?;
        println!("Exported regions to {:?}", regions_path);
    }

    if cli.break_map {
        let parts = mesher.mesh_regions(&map_img, &regions);
        write_region_meshes(&mesher, &parts, &dir, &base)?;
    } else {
        let output = mesher.mesh(&map_img);
        write_mesh(&mesher, &output, &dir, &base)?;
    }

    Ok(())
}

/// Split the requested output into a directory and a base name without
/// the `.obj` extension.
fn output_location(output: &Path, out_dir: Option<&Path>) -> Result<(PathBuf, String), TileMesherError> {
    let path = match out_dir {
        Some(dir) => dir.join(output),
        None => output.to_path_buf(),
    };

    let stem = if path.extension().is_some_and(|ext| ext == "obj") {
        path.file_stem()
    } else {
        path.file_name()
    };
    let base = stem
        .ok_or_else(|| TileMesherError::Export(format!("Output path {:?} has no file name", path)))?
        .to_string_lossy()
        .into_owned();

    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok((dir, base))
}

/// Write one mesh per region as `{base}_{i}.obj`, numbered from 0 in
/// decomposition order.
fn write_region_meshes(
    mesher: &Mesher,
    parts: &[RegionMesh],
    dir: &Path,
    base: &str,
) -> Result<Vec<PathBuf>, TileMesherError> {
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| write_mesh(mesher, &part.output, dir, &format!("{}_{}", base, i)))
        .collect()
}

/// Write `{name}.obj` into `dir`, creating `dir` if needed. The OBJ group
/// is named `name`.
fn write_mesh(
    mesher: &Mesher,
    output: &MesherOutput,
    dir: &Path,
    name: &str,
) -> Result<PathBuf, TileMesherError> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }

    let obj_path = dir.join(format!("{}.obj", name));
    let obj = export_obj(name, &output.mesh, mesher.atlas())?;
    fs::write(&obj_path, obj)?;

    println!("Exported OBJ to {:?}", obj_path);
    println!(
        "  {} tiles, {} vertices, {} triangles",
        output.tile_count,
        output.vertex_count(),
        output.triangle_count()
    );
    if !output.is_complete() {
        println!("  {} tiles missing from atlas", output.misses.len());
    }

    Ok(obj_path)
}
