use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Generates Android launcher icons and a Google Play feature graphic from one image
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write mipmap launcher icons for every density bucket plus the Play Store icon
    Icons(IconsCommand),
    /// Write the 1024x500 Play Store feature graphic
    FeatureGraphic(FeatureGraphicCommand),
}

#[derive(Args, Debug)]
pub struct IconsCommand {
    /// Square source image
    #[arg(short, long, default_value = "image.png")]
    pub source: PathBuf,

    /// Root of the project that contains the android/ directory
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// JSON file listing the density buckets as [{"label": "mdpi", "size": 48}, ...]
    #[arg(short, long)]
    pub buckets: Option<PathBuf>,

    /// Edge length of the Play Store icon
    #[arg(long, default_value_t = play_art::density::PLAY_STORE_ICON_SIZE)]
    pub store_icon_size: u32,
}

#[derive(Args, Debug)]
pub struct FeatureGraphicCommand {
    /// Source artwork, centered on the graphic
    #[arg(short, long, default_value = "image_1024.png")]
    pub source: PathBuf,

    /// Where to write the feature graphic
    #[arg(short, long, default_value = "feature_graphic_1024x500.png")]
    pub output: PathBuf,
}

impl From<Command> for play_art::args::Args {
    fn from(value: Command) -> Self {
        match value {
            Command::Icons(icons) => {
                play_art::args::Args::Icons(play_art::args::IconArgs {
                    source: icons.source,
                    project: icons.project,
                    bucket_table: icons.buckets,
                    store_icon_size: icons.store_icon_size,
                })
            }
            Command::FeatureGraphic(feature_graphic) => {
                play_art::args::Args::FeatureGraphic(play_art::args::FeatureGraphicArgs {
                    source: feature_graphic.source,
                    output: feature_graphic.output,
                })
            }
        }
    }
}
