use serde::Deserialize;

/// An Android screen-density tier and the launcher icon edge length it uses.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct DensityBucket {
    pub label: String,
    pub size: u32,
}

impl DensityBucket {
    pub fn new(label: &str, size: u32) -> Self {
        Self {
            label: String::from(label),
            size,
        }
    }

    pub fn directory_name(&self) -> String {
        format!("mipmap-{}", self.label)
    }

    pub fn android_defaults() -> Vec<DensityBucket> {
        ANDROID_DENSITIES
            .iter()
            .map(|(label, size)| DensityBucket::new(label, *size))
            .collect()
    }
}

pub const ANDROID_DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

pub const PLAY_STORE_ICON_SIZE: u32 = 512;
