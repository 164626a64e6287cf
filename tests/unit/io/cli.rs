//! Tests for command-line parsing and the collage runner

#[cfg(test)]
mod tests {
    use artcollage::io::cli::{Cli, CollageRunner, default_output_path};
    use artcollage::io::configuration::{DEFAULT_COLLAGE_DIMENSION, DEFAULT_TILE_DIMENSION};
    use artcollage::io::edit::TileEdit;
    use artcollage::{CollageError, TileValidation};
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    fn write_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
        let path = dir.join(name);
        image.save(&path).unwrap();
        path
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("program").chain(args.iter().copied()))
    }

    // Tests CLI parsing with only the required original argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = parse(&["photo.jpg"]);

        assert_eq!(cli.original, PathBuf::from("photo.jpg"));
        assert_eq!(cli.tile_dimension, DEFAULT_TILE_DIMENSION);
        assert_eq!(cli.collage_dimension, DEFAULT_COLLAGE_DIMENSION);
        assert!(cli.output.is_none());
        assert!(cli.edits.is_empty());
        assert!(!cli.no_mosaic);
        assert!(!cli.quiet);
        assert_eq!(cli.validation(), TileValidation::Lenient);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by dropping the edit value parser
    #[test]
    fn test_cli_parse_all_args() {
        let cli = parse(&[
            "input.png",
            "-t",
            "8",
            "-c",
            "3",
            "-o",
            "out/result.png",
            "-e",
            "greyscale:0:0",
            "--edit",
            "colorize:red:1:2",
            "--no-mosaic",
            "--strict",
            "--snapshots",
            "shots",
            "--quiet",
        ]);

        assert_eq!(cli.tile_dimension, 8);
        assert_eq!(cli.collage_dimension, 3);
        assert_eq!(cli.output_path(), PathBuf::from("out/result.png"));
        assert_eq!(
            cli.edits,
            vec![
                TileEdit::Greyscale { col: 0, row: 0 },
                TileEdit::Colorize {
                    component: "red".to_string(),
                    col: 1,
                    row: 2
                }
            ]
        );
        assert!(cli.no_mosaic);
        assert_eq!(cli.validation(), TileValidation::Strict);
        assert_eq!(cli.snapshots, Some(PathBuf::from("shots")));
        assert!(!cli.should_show_progress());
    }

    // Tests malformed edits are rejected at parse time
    // Verified by accepting any string as an edit
    #[test]
    fn test_cli_rejects_malformed_edit() {
        let result = Cli::try_parse_from(["program", "input.png", "-e", "blur:1:1"]);
        assert!(result.is_err());
    }

    // Tests default output path generation with suffix
    // Verified by changing output suffix
    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("pics/cat.jpg")),
            PathBuf::from("pics/cat_collage.png")
        );
        assert_eq!(
            default_output_path(Path::new("cat.png")),
            PathBuf::from("cat_collage.png")
        );
        assert_eq!(
            parse(&["pics/dog.bmp"]).output_path(),
            PathBuf::from("pics/dog_collage.png")
        );
    }

    // Tests full run writes the edited collage next to the original
    // Verified by skipping edits in the runner
    #[test]
    fn test_run_writes_collage() {
        let temp_dir = TempDir::new().unwrap();
        let original = write_png(temp_dir.path(), "red.png", &RgbImage::from_pixel(5, 5, RED));
        let blue = write_png(
            temp_dir.path(),
            "blue.png",
            &RgbImage::from_pixel(2, 2, Rgb([0, 0, 255])),
        );

        let replace = format!("replace:{}:1:1", blue.display());
        let cli = parse(&[
            original.to_str().unwrap(),
            "-t",
            "4",
            "-c",
            "2",
            "-e",
            "greyscale:0:0",
            "-e",
            &replace,
            "--snapshots",
            temp_dir.path().join("shots").to_str().unwrap(),
            "-q",
        ]);

        let output = CollageRunner::new(cli).run().unwrap();
        assert_eq!(output, temp_dir.path().join("red_collage.png"));

        let result = image::open(&output).unwrap().to_rgb8();
        assert_eq!(result.dimensions(), (8, 8));
        assert_eq!(*result.get_pixel(0, 0), Rgb([76, 76, 76]));
        assert_eq!(*result.get_pixel(7, 0), RED);
        assert_eq!(*result.get_pixel(7, 7), Rgb([0, 0, 255]));

        assert!(temp_dir.path().join("shots/original.png").exists());
        assert!(temp_dir.path().join("shots/collage.png").exists());
    }

    // Tests strict mode turns out-of-range edits into errors
    // Verified by ignoring the strict flag
    #[test]
    fn test_build_strict_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let original = write_png(temp_dir.path(), "red.png", &RgbImage::from_pixel(3, 3, RED));
        let path = original.to_str().unwrap();

        let lenient = parse(&[path, "-t", "2", "-c", "2", "-e", "greyscale:5:5", "-q"]);
        assert!(CollageRunner::new(lenient).build().is_ok());

        let strict = parse(&[
            path, "-t", "2", "-c", "2", "-e", "greyscale:5:5", "--strict", "-q",
        ]);
        let err = CollageRunner::new(strict).build().unwrap_err();
        assert!(matches!(err, CollageError::TileOutOfRange { .. }));
    }

    // Tests --no-mosaic keeps the plain rescale
    // Verified by always tiling
    #[test]
    fn test_build_without_mosaic() {
        let temp_dir = TempDir::new().unwrap();
        let source = RgbImage::from_fn(4, 4, |x, y| Rgb([(x * 60) as u8, (y * 60) as u8, 0]));
        let original = write_png(temp_dir.path(), "grad.png", &source);

        let cli = parse(&[original.to_str().unwrap(), "-t", "2", "-c", "2", "--no-mosaic", "-q"]);
        let collage = CollageRunner::new(cli).build().unwrap();
        assert_eq!(collage.collage_image(), &source);
    }

    // Tests error handling for missing originals
    // Verified by removing error return for nonexistent files
    #[test]
    fn test_run_missing_original() {
        let temp_dir = TempDir::new().unwrap();
        let cli = parse(&[temp_dir.path().join("missing.png").to_str().unwrap(), "-q"]);
        let err = CollageRunner::new(cli).run().unwrap_err();
        assert!(matches!(err, CollageError::ImageLoad { .. }));
    }
}
