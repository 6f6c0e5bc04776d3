use std::path::PathBuf;

pub enum Args {
    Icons(IconArgs),
    FeatureGraphic(FeatureGraphicArgs),
}

#[derive(Clone)]
pub struct IconArgs {
    pub source: PathBuf,
    pub project: PathBuf,
    pub bucket_table: Option<PathBuf>,
    pub store_icon_size: u32,
}

#[derive(Clone)]
pub struct FeatureGraphicArgs {
    pub source: PathBuf,
    pub output: PathBuf,
}
