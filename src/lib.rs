use crate::args::Args;
use crate::config::{FeatureGraphicConfig, IconConfig};
use crate::icon::IconReport;

pub mod args;
pub mod config;
pub mod density;
mod error;
pub mod feature_graphic;
pub mod icon;
pub mod raster;
pub mod resource;

pub use crate::error::Error;

/// Runs one generator. Outcomes are reported through the log only.
pub fn run(args: Args) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match args {
        Args::Icons(icon_args) => match IconConfig::from_args(&icon_args) {
            Ok(config) => run_icons(&config),
            Err(error) => log::error!("Invalid icon configuration: {error}"),
        },
        Args::FeatureGraphic(feature_graphic_args) => {
            run_feature_graphic(&FeatureGraphicConfig::from(feature_graphic_args))
        }
    }
}

fn run_icons(config: &IconConfig) {
    match icon::generate_icons(config) {
        Ok(report) => log_icon_report(&report),
        Err(error @ Error::SourceNotFound { .. }) => {
            log::error!("{error}");
            log::error!("Save the source image at that path and run the generator again.");
        }
        Err(error) => log::error!("Icon generation failed: {error}"),
    }
}

fn log_icon_report(report: &IconReport) {
    log::info!(
        "{} of {} density buckets succeeded",
        report.succeeded_buckets(),
        report.buckets.len()
    );

    if report.is_complete() {
        log::info!("All icons were generated.");
        log::info!("Rebuild the app to pick them up: cd android && ./gradlew clean && ./gradlew assembleRelease");
    }
}

fn run_feature_graphic(config: &FeatureGraphicConfig) {
    match feature_graphic::create_feature_graphic(config) {
        Ok(path) => {
            log::info!("To publish it in the Play Console:");
            log::info!("  1. App > Store presence > Main store listing");
            log::info!("  2. Graphics > Feature graphic > Upload");
            log::info!("  3. Choose {}", path.display());
        }
        Err(error) => log::error!("Feature graphic generation failed: {error}"),
    }
}
