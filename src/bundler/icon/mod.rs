//! Application icon generation.
//!
//! Renders the C0lorNote notepad icon (see [`render`]) as a PNG set in
//! several sizes, and writes the platform icons the desktop builds pass to
//! PyInstaller.

mod render;

pub use render::render;

use crate::bundler::{Error, Result, error::ErrorExt};
use image::{ImageFormat, RgbaImage, imageops::FilterType};
use std::path::{Path, PathBuf};

/// Sizes generated next to the main icon.
pub const DEFAULT_SIZES: [u32; 6] = [512, 256, 128, 64, 32, 16];

/// Edge length of the main icon.
pub const MAIN_SIZE: u32 = 512;

/// Largest canvas rendered before downscaling.
const MAX_RENDER_SIZE: u32 = 1024;

/// Icon formats consumed by the desktop packager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformIcon {
    /// Windows `.ico` (256 px, the format's maximum)
    Ico,
    /// Linux `.png` (512 px)
    Png,
}

impl PlatformIcon {
    /// Format for an icon file name, `None` when it cannot be generated.
    pub fn for_file_name(name: &str) -> Option<Self> {
        match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ico") => Some(Self::Ico),
            Some(ext) if ext.eq_ignore_ascii_case("png") => Some(Self::Png),
            _ => None,
        }
    }

    /// Edge length written for this format.
    pub fn size(self) -> u32 {
        match self {
            Self::Ico => 256,
            Self::Png => 512,
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Ico => ImageFormat::Ico,
            Self::Png => ImageFormat::Png,
        }
    }
}

/// Paths written by [`generate_icon_set`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconSet {
    /// Main icon
    pub main: PathBuf,
    /// One file per requested size, in request order
    pub sized: Vec<(u32, PathBuf)>,
}

/// `<dir>/<stem>_<size>x<size>.png` for a main icon path.
pub fn sized_path(main: &Path, size: u32) -> PathBuf {
    let stem = main
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "icon".to_string());
    main.with_file_name(format!("{stem}_{size}x{size}.png"))
}

/// Renders once at a generous size and downsamples to each requested size.
fn render_sizes(sizes: &[u32]) -> Vec<RgbaImage> {
    let largest = sizes.iter().copied().max().unwrap_or(MAIN_SIZE);
    let canvas = (largest * 2).clamp(64, MAX_RENDER_SIZE).max(largest);
    let master = render(canvas);

    sizes
        .iter()
        .map(|&size| {
            if size == canvas {
                master.clone()
            } else {
                image::imageops::resize(&master, size, size, FilterType::Lanczos3)
            }
        })
        .collect()
}

fn save(image: &RgbaImage, path: &Path, format: ImageFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).fs_context("creating icon directory", parent)?;
    }
    image.save_with_format(path, format)?;
    Ok(())
}

/// Writes the main icon at `main_size` plus one PNG per entry in `sizes`.
pub async fn generate_icon_set(main: &Path, main_size: u32, sizes: &[u32]) -> Result<IconSet> {
    if main_size == 0 || sizes.contains(&0) {
        return Err(Error::GenericError("icon sizes must be positive".into()));
    }

    let main = main.to_path_buf();
    let sizes = sizes.to_vec();

    tokio::task::spawn_blocking(move || -> Result<IconSet> {
        let mut all = vec![main_size];
        all.extend(&sizes);
        let mut images = render_sizes(&all).into_iter();

        if let Some(image) = images.next() {
            log::info!("Generating main {0}x{0} icon", main_size);
            save(&image, &main, ImageFormat::Png)?;
        }

        let mut sized = Vec::with_capacity(sizes.len());
        for (&size, image) in sizes.iter().zip(images) {
            let path = sized_path(&main, size);
            log::info!("Generating {0}x{0} icon", size);
            save(&image, &path, ImageFormat::Png)?;
            sized.push((size, path));
        }

        Ok(IconSet { main, sized })
    })
    .await
    .map_err(|e| Error::GenericError(format!("Icon rendering task panicked: {}", e)))?
}

/// Writes a single platform icon.
pub async fn write_platform_icon(path: &Path, kind: PlatformIcon) -> Result<()> {
    let path = path.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<()> {
        let image = render_sizes(&[kind.size()]).remove(0);
        save(&image, &path, kind.image_format())?;
        log::info!("✓ Created icon at {}", path.display());
        Ok(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("Icon rendering task panicked: {}", e)))?
}
