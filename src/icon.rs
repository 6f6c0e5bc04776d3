use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::config::IconConfig;
use crate::density::DensityBucket;
use crate::error::Error;
use crate::raster::composite::apply_mask;
use crate::raster::mask::MaskShape;
use crate::raster::resize_exact;
use crate::resource::png::{ensure_directory, write_png};
use crate::resource::source::load_source;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IconVariant {
    Regular,
    Round,
}

impl IconVariant {
    pub const ALL: [IconVariant; 2] = [IconVariant::Regular, IconVariant::Round];

    pub fn file_name(self) -> &'static str {
        match self {
            IconVariant::Regular => "ic_launcher.png",
            IconVariant::Round => "ic_launcher_round.png",
        }
    }

    pub fn shape(self) -> MaskShape {
        match self {
            IconVariant::Regular => MaskShape::RoundedRectangle,
            IconVariant::Round => MaskShape::Ellipse,
        }
    }
}

/// Stretches `source` to `size`×`size` and cuts it to `shape`.
pub fn render_icon(source: &RgbaImage, size: u32, shape: MaskShape) -> RgbaImage {
    let resized = resize_exact(source, size, size);
    let mask = shape.render(size, size);

    apply_mask(&resized, &mask)
}

#[derive(Debug)]
pub struct BucketOutcome {
    pub bucket: DensityBucket,
    pub result: Result<Vec<PathBuf>, Error>,
}

#[derive(Debug)]
pub struct IconReport {
    pub buckets: Vec<BucketOutcome>,
    pub store_icon: Result<PathBuf, Error>,
}

impl IconReport {
    pub fn succeeded_buckets(&self) -> usize {
        self.buckets
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.succeeded_buckets() == self.buckets.len() && self.store_icon.is_ok()
    }

    pub fn written_files(&self) -> Vec<&Path> {
        self.buckets
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .flatten()
            .map(PathBuf::as_path)
            .chain(self.store_icon.as_ref().ok().map(PathBuf::as_path))
            .collect()
    }
}

/// Writes every density bucket's launcher icons and the store icon.
///
/// Fails outright only when the source cannot be loaded. Write failures are recorded per bucket
/// and do not stop the remaining buckets.
pub fn generate_icons(config: &IconConfig) -> Result<IconReport, Error> {
    log::info!("Loading source image: {}", config.source.display());

    let source = load_source(&config.source)?;

    if source.width() != source.height() {
        return Err(Error::decode_failed(
            &config.source,
            format!(
                "launcher icons need a square source, got {}x{}",
                source.width(),
                source.height()
            ),
        ));
    }

    let buckets = config
        .buckets
        .iter()
        .map(|bucket| {
            let result = write_bucket(&source, &config.res_dir, bucket);

            if let Err(error) = &result {
                log::warn!("Skipping density bucket {}: {error}", bucket.label);
            }

            BucketOutcome {
                bucket: bucket.clone(),
                result,
            }
        })
        .collect();

    log::info!(
        "Generating Play Store icon ({0}x{0})",
        config.store_icon_size
    );

    let store_icon = write_store_icon(&source, &config.store_icon_path, config.store_icon_size);

    if let Err(error) = &store_icon {
        log::warn!("Skipping Play Store icon: {error}");
    }

    Ok(IconReport {
        buckets,
        store_icon,
    })
}

fn write_bucket(
    source: &RgbaImage,
    res_dir: &Path,
    bucket: &DensityBucket,
) -> Result<Vec<PathBuf>, Error> {
    let bucket_dir = res_dir.join(bucket.directory_name());
    ensure_directory(&bucket_dir)?;

    let mut written = Vec::with_capacity(IconVariant::ALL.len());

    for variant in IconVariant::ALL {
        let icon = render_icon(source, bucket.size, variant.shape());
        let path = bucket_dir.join(variant.file_name());

        write_png(&icon, &path)?;
        log::info!("Created {} ({1}x{1})", path.display(), bucket.size);

        written.push(path);
    }

    Ok(written)
}

fn write_store_icon(source: &RgbaImage, path: &Path, size: u32) -> Result<PathBuf, Error> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let icon = render_icon(source, size, IconVariant::Regular.shape());
    write_png(&icon, path)?;
    log::info!("Created Play Store icon {} ({1}x{1})", path.display(), size);

    Ok(path.to_path_buf())
}
