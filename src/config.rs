use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::args::{FeatureGraphicArgs, IconArgs};
use crate::density::DensityBucket;

const ANDROID_MAIN_DIR: &str = "android/app/src/main";
const STORE_ICON_FILE_NAME: &str = "playstore-icon.png";

#[derive(Clone, Debug)]
pub struct IconConfig {
    pub source: PathBuf,
    pub res_dir: PathBuf,
    pub store_icon_path: PathBuf,
    pub store_icon_size: u32,
    pub buckets: Vec<DensityBucket>,
}

impl IconConfig {
    /// Lays out the standard Android project paths under `project`.
    pub fn for_project(source: &Path, project: &Path) -> Self {
        let main_dir = project.join(ANDROID_MAIN_DIR);

        Self {
            source: source.to_path_buf(),
            res_dir: main_dir.join("res"),
            store_icon_path: main_dir.join(STORE_ICON_FILE_NAME),
            store_icon_size: crate::density::PLAY_STORE_ICON_SIZE,
            buckets: DensityBucket::android_defaults(),
        }
    }

    pub fn from_args(args: &IconArgs) -> Result<Self> {
        if args.store_icon_size == 0 {
            bail!("The store icon size must be greater than zero.");
        }

        let mut config = Self::for_project(&args.source, &args.project);
        config.store_icon_size = args.store_icon_size;

        if let Some(bucket_table) = &args.bucket_table {
            config.buckets = load_bucket_table(bucket_table)?;
        }

        Ok(config)
    }
}

#[derive(Clone, Debug)]
pub struct FeatureGraphicConfig {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl From<FeatureGraphicArgs> for FeatureGraphicConfig {
    fn from(value: FeatureGraphicArgs) -> Self {
        Self {
            source: value.source,
            output: value.output,
        }
    }
}

/// Reads a JSON array of `{"label": ..., "size": ...}` entries.
pub fn load_bucket_table(path: &Path) -> Result<Vec<DensityBucket>> {
    let contents = std::fs::read_to_string(path)?;
    let buckets: Vec<DensityBucket> = serde_json::from_str(&contents)?;

    validate_buckets(&buckets)?;

    log::debug!(
        "Loaded {} density buckets from {}",
        buckets.len(),
        path.display()
    );

    Ok(buckets)
}

pub fn validate_buckets(buckets: &[DensityBucket]) -> Result<()> {
    if buckets.is_empty() {
        bail!("The bucket table is empty.");
    }

    let mut labels = HashSet::new();

    for bucket in buckets {
        if bucket.label.is_empty() {
            bail!("A bucket label is empty.");
        }

        if bucket.size == 0 {
            bail!("The bucket size must be greater than zero: {}", bucket.label);
        }

        if !labels.insert(bucket.label.as_str()) {
            bail!("Duplicate bucket label: {}", bucket.label);
        }
    }

    Ok(())
}
