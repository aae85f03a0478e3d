//! Faces CLI Tool
//!
//! Command-line interface for generating, resolving and checking face images.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use faces_core::{Face, PngHeader, FACE_SIZE};
use faces_gen::{faces, FaceGenerator, GeneratorConfig};
use faces_resolver::{AssetResolver, FaceSource, Resolution, ResolverConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "faces")]
#[command(about = "Face images for the display - generate, resolve and check assets")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw every face and write `<face>.png` files
    Generate {
        /// Output directory
        #[arg(default_value = ".")]
        output: PathBuf,

        /// Edge length of the written images in pixels
        #[arg(long, default_value_t = FACE_SIZE)]
        size: u32,
    },

    /// Look up the image for one face
    Resolve {
        /// Face identifier (case-insensitive)
        name: String,

        /// Asset directory
        #[arg(short, long)]
        dir: PathBuf,

        /// Edge length the image is resized to
        #[arg(long, default_value_t = FACE_SIZE)]
        size: u32,

        /// Save the resolved image to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the face vocabulary
    List {
        /// Mark which faces have an image in this directory
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Check the assets in a directory against the naming and format conventions
    Check {
        /// Asset directory
        #[arg(short, long)]
        dir: PathBuf,

        /// Fail if any present asset has a problem
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Generate { output, size } => generate_faces(output, size)?,

        Commands::Resolve {
            name,
            dir,
            size,
            output,
        } => resolve_face(&name, dir, size, output)?,

        Commands::List { dir } => list_faces(dir.as_deref()),

        Commands::Check { dir, strict } => {
            check_assets(&dir, strict)?;
        }
    }

    Ok(())
}

fn generate_faces(output: PathBuf, size: u32) -> Result<()> {
    let config = GeneratorConfig {
        size,
        ..GeneratorConfig::default()
    };
    let generator = FaceGenerator::new(config).context("Invalid generator configuration")?;

    let paths = generator
        .generate_all(&output)
        .context("Failed to generate face images")?;

    println!(
        "Generated {} face images ({}x{}) in {}",
        paths.len(),
        size,
        size,
        output.display()
    );
    Ok(())
}

fn resolve_face(name: &str, dir: PathBuf, size: u32, output: Option<PathBuf>) -> Result<()> {
    let config = ResolverConfig {
        asset_dir: dir,
        size,
    };
    let resolver = AssetResolver::with_config(config).context("Invalid resolver configuration")?;

    match resolver.resolve(name) {
        Resolution::Image(image) => {
            println!(
                "{}: image {}x{} (source {}x{})",
                image.name,
                image.width(),
                image.height(),
                image.source_width,
                image.source_height
            );
            if let Some(output_path) = output {
                image
                    .image
                    .save(&output_path)
                    .context("Failed to save face image")?;
                println!("Saved image to {}", output_path.display());
            }
        }
        Resolution::TextFallback => {
            let text = match name.parse::<Face>() {
                Ok(face) => face.default_text(),
                Err(_) => name,
            };
            println!("{}: no image, text fallback {}", name, text);
        }
    }

    Ok(())
}

fn list_faces(dir: Option<&Path>) {
    let resolver = dir.map(AssetResolver::new);

    println!("\n=== Faces ({}) ===", Face::ALL.len());
    for face in Face::ALL {
        let marker = match &resolver {
            Some(r) if r.has_image(face.as_str()) => "[img] ",
            Some(_) => "[txt] ",
            None => "",
        };
        println!(
            "  {}{:<13} {:<8} {}",
            marker,
            face.as_str(),
            face.default_text(),
            faces::describe(face)
        );
    }

    if let Some(r) = &resolver {
        println!(
            "\n{} of {} faces have images in {}",
            r.available().len(),
            Face::ALL.len(),
            r.asset_dir().display()
        );
    }
}

/// Problems found with one asset file
fn inspect_asset(resolver: &AssetResolver, path: &Path, face: Face) -> Vec<String> {
    let mut problems = Vec::new();

    match PngHeader::open(path) {
        Ok(header) => {
            if !header.has_alpha() {
                problems.push(format!("no alpha channel ({:?})", header.color_type));
            }
            if !header.is_size(FACE_SIZE) {
                problems.push(format!(
                    "{}x{} instead of {}x{}, will be resized",
                    header.width, header.height, FACE_SIZE, FACE_SIZE
                ));
            }
        }
        Err(e) => problems.push(format!("bad PNG header: {}", e)),
    }

    if let Err(e) = resolver.load(face.as_str()) {
        problems.push(format!("cannot be decoded: {}", e));
    }

    problems
}

/// State of one vocabulary face in an asset directory
#[derive(Debug, Clone, PartialEq)]
enum AssetStatus {
    Missing,
    Ok,
    Problems(Vec<String>),
}

/// Result of checking an asset directory
#[derive(Debug, Default)]
struct CheckReport {
    faces: Vec<(Face, AssetStatus)>,
    unknown: Vec<String>,
}

impl CheckReport {
    fn status(&self, face: Face) -> Option<&AssetStatus> {
        self.faces
            .iter()
            .find(|(f, _)| *f == face)
            .map(|(_, status)| status)
    }

    fn present(&self) -> usize {
        self.faces
            .iter()
            .filter(|(_, status)| *status != AssetStatus::Missing)
            .count()
    }

    fn with_problems(&self) -> usize {
        self.faces
            .iter()
            .filter(|(_, status)| matches!(status, AssetStatus::Problems(_)))
            .count()
    }
}

fn scan_assets(dir: &Path) -> Result<CheckReport> {
    if !dir.is_dir() {
        bail!("Asset directory not found: {}", dir.display());
    }
    let resolver = AssetResolver::new(dir);
    let mut report = CheckReport::default();

    for face in Face::ALL {
        let path = resolver
            .path_for(face.as_str())
            .context("Invalid face identifier")?;
        let status = if !path.is_file() {
            AssetStatus::Missing
        } else {
            let problems = inspect_asset(&resolver, &path, face);
            if problems.is_empty() {
                AssetStatus::Ok
            } else {
                AssetStatus::Problems(problems)
            }
        };
        report.faces.push((face, status));
    }

    report.unknown = unknown_pngs(dir)?;
    Ok(report)
}

fn check_assets(dir: &Path, strict: bool) -> Result<CheckReport> {
    let report = scan_assets(dir)?;

    println!("\n=== Checking {} ===", dir.display());
    for (face, status) in &report.faces {
        match status {
            AssetStatus::Missing => {
                println!("  {:<13} missing, text {}", face.as_str(), face.default_text())
            }
            AssetStatus::Ok => println!("  {:<13} ok", face.as_str()),
            AssetStatus::Problems(problems) => {
                println!("  {:<13} {}", face.as_str(), problems.join("; "))
            }
        }
    }
    for name in &report.unknown {
        println!("  {:<13} not a known face", name);
    }

    let with_problems = report.with_problems();
    println!(
        "\n{} of {} faces present, {} with problems, {} unrecognised files",
        report.present(),
        Face::ALL.len(),
        with_problems,
        report.unknown.len()
    );

    if strict && with_problems > 0 {
        bail!("{} face images have problems", with_problems);
    }
    Ok(report)
}

/// PNG files whose stem is not a face identifier
fn unknown_pngs(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).context("Failed to read asset directory")? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            if stem.parse::<Face>().is_err() || stem != stem.to_ascii_lowercase() {
                names.push(stem.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn write_rgba(dir: &Path, stem: &str, size: u32) -> PathBuf {
        let path = dir.join(format!("{}.png", stem));
        RgbaImage::from_pixel(size, size, Rgba([20, 20, 20, 255]))
            .save(&path)
            .unwrap();
        path
    }

    fn problems(report: &CheckReport, face: Face) -> Vec<String> {
        match report.status(face) {
            Some(AssetStatus::Problems(p)) => p.clone(),
            other => panic!("expected problems for {}, got {:?}", face, other),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from(["faces", "resolve", "Happy", "--dir", "assets"]);
        match cli.command {
            Commands::Resolve { name, dir, size, .. } => {
                assert_eq!(name, "Happy");
                assert_eq!(dir, PathBuf::from("assets"));
                assert_eq!(size, FACE_SIZE);
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn test_check_flags_rgb_asset_without_alpha() {
        let dir = tempdir().unwrap();
        RgbImage::from_pixel(80, 80, Rgb([200, 10, 10]))
            .save(dir.path().join("happy.png"))
            .unwrap();

        let report = scan_assets(dir.path()).unwrap();
        let found = problems(&report, Face::Happy);
        assert_eq!(found.len(), 1);
        assert!(found[0].starts_with("no alpha channel"), "{found:?}");
    }

    #[test]
    fn test_check_notes_off_size_asset() {
        let dir = tempdir().unwrap();
        write_rgba(dir.path(), "sad", 100);

        let report = scan_assets(dir.path()).unwrap();
        assert_eq!(
            problems(&report, Face::Sad),
            vec!["100x100 instead of 80x80, will be resized".to_string()]
        );
    }

    #[test]
    fn test_check_reports_truncated_asset() {
        let dir = tempdir().unwrap();
        let path = write_rgba(dir.path(), "bored", 80);
        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let report = scan_assets(dir.path()).unwrap();
        let found = problems(&report, Face::Bored);
        assert_eq!(found.len(), 1);
        assert!(found[0].starts_with("cannot be decoded"), "{found:?}");
    }

    #[test]
    fn test_check_reports_garbage_asset() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("angry.png"), b"not an image").unwrap();

        let report = scan_assets(dir.path()).unwrap();
        let found = problems(&report, Face::Angry);
        assert!(found[0].starts_with("bad PNG header"), "{found:?}");
        assert!(found.iter().any(|p| p.starts_with("cannot be decoded")));
    }

    #[test]
    fn test_check_lists_unrecognised_files() {
        let dir = tempdir().unwrap();
        write_rgba(dir.path(), "Happy", 80);
        write_rgba(dir.path(), "party", 80);
        write_rgba(dir.path(), "cool", 80);
        fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let report = scan_assets(dir.path()).unwrap();
        assert_eq!(report.unknown, vec!["Happy".to_string(), "party".to_string()]);
        assert_eq!(report.status(Face::Cool), Some(&AssetStatus::Ok));
    }

    #[test]
    fn test_check_counts_present_faces() {
        let dir = tempdir().unwrap();
        write_rgba(dir.path(), "awake", 80);
        write_rgba(dir.path(), "sleep", 100);

        let report = scan_assets(dir.path()).unwrap();
        assert_eq!(report.faces.len(), Face::ALL.len());
        assert_eq!(report.present(), 2);
        assert_eq!(report.with_problems(), 1);
        assert_eq!(report.status(Face::Lonely), Some(&AssetStatus::Missing));
    }

    #[test]
    fn test_strict_check_fails_only_on_asset_problems() {
        let dir = tempdir().unwrap();
        write_rgba(dir.path(), "happy", 80);
        write_rgba(dir.path(), "party", 80);
        assert!(check_assets(dir.path(), true).is_ok());

        write_rgba(dir.path(), "excited", 64);
        assert!(check_assets(dir.path(), false).is_ok());
        assert!(check_assets(dir.path(), true).is_err());
    }

    #[test]
    fn test_check_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        assert!(scan_assets(&dir.path().join("nope")).is_err());
    }
}
