//! Tests for display collaborators

#[cfg(test)]
mod tests {
    use artcollage::io::viewer::{NullViewer, SnapshotViewer, Viewer};
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    // Tests the null viewer records titles in call order
    // Verified by dropping recorded titles
    #[test]
    fn test_null_viewer_records_titles() {
        let mut viewer = NullViewer::default();
        let image = RgbImage::new(2, 2);
        viewer.show("first", &image).unwrap();
        viewer.show("second", &image).unwrap();
        assert_eq!(viewer.shown(), ["first", "second"]);
    }

    // Tests snapshots are written as PNG files named after the title
    // Verified by ignoring the title in the file name
    #[test]
    fn test_snapshot_viewer_writes_png() {
        let temp_dir = TempDir::new().unwrap();
        let directory = temp_dir.path().join("snapshots");
        let mut viewer = SnapshotViewer::new(&directory);

        let image = RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]));
        viewer.show("collage", &image).unwrap();

        let saved = image::open(directory.join("collage.png")).unwrap().to_rgb8();
        assert_eq!(saved, image);
    }

    // Tests titles are sanitised into safe file names
    // Verified by passing titles through unchanged
    #[test]
    fn test_snapshot_path_sanitises_title() {
        let viewer = SnapshotViewer::new("shots");
        assert_eq!(
            viewer.snapshot_path("tile 1/2"),
            std::path::PathBuf::from("shots/tile_1_2.png")
        );
        assert_eq!(
            viewer.snapshot_path("make-collage_v2"),
            std::path::PathBuf::from("shots/make-collage_v2.png")
        );
    }
}
