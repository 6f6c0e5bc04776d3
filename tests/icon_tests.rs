use std::path::{Path, PathBuf};

use image::{ColorType, Rgba, RgbaImage};
use play_art::config::IconConfig;
use play_art::density::DensityBucket;
use play_art::icon::generate_icons;
use play_art::raster::mask::corner_radius;
use play_art::Error;

fn write_source(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("image.png");
    let source = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    source.save(&path).unwrap();
    path
}

fn files_under(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

#[test]
fn writes_both_variants_for_every_bucket() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), 256, 256);
    let project = workspace.path().join("project");
    let config = IconConfig::for_project(&source, &project);

    let report = generate_icons(&config).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.succeeded_buckets(), 5);

    for bucket in DensityBucket::android_defaults() {
        let dir = project
            .join("android/app/src/main/res")
            .join(bucket.directory_name());

        for file_name in ["ic_launcher.png", "ic_launcher_round.png"] {
            let icon = image::open(dir.join(file_name)).unwrap();
            assert_eq!(icon.color(), ColorType::Rgba8, "{file_name} in {}", bucket.label);
            assert_eq!((icon.width(), icon.height()), (bucket.size, bucket.size));
        }
    }

    let store_icon = image::open(project.join("android/app/src/main/playstore-icon.png")).unwrap();
    assert_eq!((store_icon.width(), store_icon.height()), (512, 512));
    assert_eq!(store_icon.color(), ColorType::Rgba8);
}

#[test]
fn rounded_icons_are_transparent_only_in_the_corners() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), 300, 300);
    let config = IconConfig::for_project(&source, workspace.path());

    generate_icons(&config).unwrap();

    for bucket in DensityBucket::android_defaults() {
        let size = bucket.size;
        let radius = corner_radius(size, size);
        let icon = image::open(
            config
                .res_dir
                .join(bucket.directory_name())
                .join("ic_launcher.png"),
        )
        .unwrap()
        .to_rgba8();

        for (x, y) in [(0, 0), (size - 1, 0), (0, size - 1), (size - 1, size - 1)] {
            assert_eq!(icon.get_pixel(x, y)[3], 0, "{}: corner ({x}, {y})", bucket.label);
        }

        for (x, y, pixel) in icon.enumerate_pixels() {
            let in_corner_x = x < radius || x >= size - radius;
            let in_corner_y = y < radius || y >= size - radius;
            if !(in_corner_x && in_corner_y) {
                assert_eq!(pixel[3], 255, "{}: pixel ({x}, {y})", bucket.label);
            }
        }
    }
}

#[test]
fn round_icons_are_cut_to_the_inscribed_circle() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), 200, 200);
    let config = IconConfig::for_project(&source, workspace.path());

    generate_icons(&config).unwrap();

    for bucket in DensityBucket::android_defaults() {
        let icon = image::open(
            config
                .res_dir
                .join(bucket.directory_name())
                .join("ic_launcher_round.png"),
        )
        .unwrap()
        .to_rgba8();
        let radius = bucket.size as f64 / 2.0;

        for (x, y, pixel) in icon.enumerate_pixels() {
            let distance = ((x as f64 + 0.5 - radius).powi(2) + (y as f64 + 0.5 - radius).powi(2))
                .sqrt();

            if distance > radius {
                assert_eq!(pixel[3], 0, "{}: pixel ({x}, {y})", bucket.label);
            } else {
                assert_ne!(pixel[3], 0, "{}: pixel ({x}, {y})", bucket.label);
            }
        }
    }
}

#[test]
fn regenerating_produces_identical_files() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), 128, 128);
    let project = workspace.path().join("project");
    let config = IconConfig::for_project(&source, &project);

    generate_icons(&config).unwrap();
    let first: Vec<Vec<u8>> = files_under(&project)
        .iter()
        .map(|path| std::fs::read(path).unwrap())
        .collect();

    generate_icons(&config).unwrap();
    let second: Vec<Vec<u8>> = files_under(&project)
        .iter()
        .map(|path| std::fs::read(path).unwrap())
        .collect();

    assert_eq!(first.len(), 11);
    assert_eq!(first, second);
}

#[test]
fn missing_source_writes_nothing() {
    let workspace = tempfile::tempdir().unwrap();
    let project = workspace.path().join("project");
    std::fs::create_dir(&project).unwrap();
    let config = IconConfig::for_project(&workspace.path().join("absent.png"), &project);

    let result = generate_icons(&config);

    assert!(matches!(result, Err(Error::SourceNotFound { .. })));
    assert!(files_under(&project).is_empty());
    assert!(!project.join("android").exists());
}

#[test]
fn non_square_source_fails_to_decode() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), 200, 100);
    let project = workspace.path().join("project");
    let config = IconConfig::for_project(&source, &project);

    let result = generate_icons(&config);

    assert!(matches!(result, Err(Error::DecodeFailed { .. })));
    assert!(!project.exists());
}

#[test]
fn one_failing_bucket_does_not_stop_the_others() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), 64, 64);
    let config = IconConfig::for_project(&source, workspace.path());

    std::fs::create_dir_all(&config.res_dir).unwrap();
    std::fs::write(config.res_dir.join("mipmap-hdpi"), b"not a directory").unwrap();

    let report = generate_icons(&config).unwrap();

    assert_eq!(report.succeeded_buckets(), 4);
    assert!(!report.is_complete());

    let failed: Vec<&str> = report
        .buckets
        .iter()
        .filter(|outcome| outcome.result.is_err())
        .map(|outcome| outcome.bucket.label.as_str())
        .collect();
    assert_eq!(failed, vec!["hdpi"]);

    match &report.buckets[1].result {
        Err(error @ Error::WriteFailed { .. }) => {
            assert_eq!(error.path(), config.res_dir.join("mipmap-hdpi"))
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    assert!(config.res_dir.join("mipmap-xxxhdpi/ic_launcher_round.png").is_file());
    assert!(report.store_icon.is_ok());
    assert_eq!(report.written_files().len(), 9);
}

#[test]
fn custom_bucket_tables_are_honored() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), 64, 64);
    let mut config = IconConfig::for_project(&source, workspace.path());
    config.buckets = vec![DensityBucket::new("ldpi", 36)];
    config.store_icon_size = 100;

    let report = generate_icons(&config).unwrap();

    assert_eq!(report.buckets.len(), 1);
    let icon = image::open(config.res_dir.join("mipmap-ldpi/ic_launcher.png")).unwrap();
    assert_eq!((icon.width(), icon.height()), (36, 36));
    let store_icon = image::open(&config.store_icon_path).unwrap();
    assert_eq!((store_icon.width(), store_icon.height()), (100, 100));
}

#[test]
fn corrupt_source_fails_to_decode_without_writing() {
    let workspace = tempfile::tempdir().unwrap();
    let source = workspace.path().join("image.png");
    std::fs::write(&source, b"not an image at all").unwrap();
    let project = workspace.path().join("project");
    let config = IconConfig::for_project(&source, &project);

    let result = generate_icons(&config);

    assert!(matches!(result, Err(Error::DecodeFailed { .. })));
    assert!(!project.exists());
}
