use crate::render::render_icon;
use crate::text::Typeface;
use crate::Variant;
use anyhow::{Context, Result};
use console::style;
use cosmic_text::FontSystem;
use image::ImageFormat;
use std::path::{Path, PathBuf};

pub const DPI_LABEL: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];
pub const DPI_SIZE: [u32; 5] = [48, 72, 96, 144, 192];

/// Renders both launcher variants into `mipmap-<dpi>` directories under
/// `res`, creating directories as needed.
pub fn mipmap_ic_launcher<P: AsRef<Path>>(typeface: &mut Typeface, res: P) -> Result<()> {
    for (label, size) in DPI_LABEL.iter().zip(DPI_SIZE) {
        let dir = res.as_ref().join(format!("mipmap-{}", label));
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        for variant in [Variant::Square, Variant::Round] {
            let path = dir.join(variant.file_name());
            let icon = render_icon(typeface, size, variant);
            icon.save_with_format(&path, ImageFormat::Png)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{} Created {} ({}x{})",
                style("✓").green(),
                path.display(),
                size,
                size
            );
        }
    }
    Ok(())
}

/// Full generation pass: resolves the label font, then renders and writes
/// every density. A failed font resolve writes nothing.
pub fn generate<P: AsRef<Path>>(fonts: FontSystem, res: P) -> Result<()> {
    let mut typeface = Typeface::new(fonts)?;
    println!("Generating GTrack app icons...");
    mipmap_ic_launcher(&mut typeface, res)
}

/// Res directory of the android app checkout this tool ships inside of.
pub fn default_res_dir() -> Result<PathBuf> {
    let exe = dunce::canonicalize(std::env::current_exe()?)?;
    let dir = exe.parent().context("executable has no parent directory")?;
    Ok(dir
        .join("android")
        .join("app")
        .join("src")
        .join("main")
        .join("res"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::font_system;
    use cosmic_text::fontdb::Database;

    #[test]
    fn writes_all_density_files() -> Result<()> {
        let res = tempfile::tempdir()?;
        generate(font_system(), res.path())?;
        for (label, size) in DPI_LABEL.iter().zip(DPI_SIZE) {
            let dir = res.path().join(format!("mipmap-{}", label));
            for variant in [Variant::Square, Variant::Round] {
                let path = dir.join(variant.file_name());
                assert!(path.exists(), "missing {}", path.display());
                let img = image::open(&path)?.to_rgba8();
                assert_eq!(img.dimensions(), (size, size));
            }
            assert_eq!(std::fs::read_dir(&dir)?.count(), 2);
        }
        Ok(())
    }

    #[test]
    fn rerun_is_idempotent() -> Result<()> {
        let mut typeface = Typeface::load()?;
        let res = tempfile::tempdir()?;
        mipmap_ic_launcher(&mut typeface, res.path())?;
        let paths: Vec<_> = DPI_LABEL
            .iter()
            .flat_map(|label| {
                let dir = res.path().join(format!("mipmap-{}", label));
                [Variant::Square, Variant::Round].map(|variant| dir.join(variant.file_name()))
            })
            .collect();
        let mut first = Vec::new();
        for path in &paths {
            first.push(std::fs::read(path)?);
        }
        mipmap_ic_launcher(&mut typeface, res.path())?;
        for (path, bytes) in paths.iter().zip(&first) {
            assert_eq!(&std::fs::read(path)?, bytes, "{} changed", path.display());
        }
        Ok(())
    }

    #[test]
    fn failed_font_gate_writes_nothing() -> Result<()> {
        let res = tempfile::tempdir()?;
        let empty = FontSystem::new_with_locale_and_db("en-US".into(), Database::new());
        assert!(generate(empty, res.path()).is_err());
        assert_eq!(std::fs::read_dir(res.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn default_res_dir_is_exe_relative() -> Result<()> {
        let dir = default_res_dir()?;
        assert!(dir.ends_with(Path::new("android/app/src/main/res")));
        Ok(())
    }

    #[test]
    fn mdpi_square_icon_matches_the_48px_layout() -> Result<()> {
        let mut typeface = Typeface::load()?;
        let res = tempfile::tempdir()?;
        mipmap_ic_launcher(&mut typeface, res.path())?;
        let path = res
            .path()
            .join("mipmap-mdpi")
            .join(Variant::Square.file_name());
        let img = image::open(&path)?;
        assert_eq!(img.color(), image::ColorType::Rgba8);
        let img = img.to_rgba8();
        assert_eq!(img.dimensions(), (48, 48));
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        // 4px inset and 8px corner radius: the inset-box corner is cut away,
        // the straight edge is filled.
        assert_eq!(img.get_pixel(4, 4)[3], 0);
        assert_eq!(*img.get_pixel(4, 24), image::Rgba([33, 150, 243, 255]));
        assert_eq!(*img.get_pixel(24, 6), image::Rgba([33, 150, 243, 255]));
        assert!(img.pixels().any(|p| p[3] == 255 && p[0] > 128));
        Ok(())
    }
}
