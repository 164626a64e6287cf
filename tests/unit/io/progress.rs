//! Tests for edit progress tracking

#[cfg(test)]
mod tests {
    use artcollage::io::progress::EditProgress;

    // Tests completed steps are counted
    // Verified by not incrementing on completion
    #[test]
    fn test_progress_counts_steps() {
        let progress = EditProgress::new(3, false);
        assert_eq!(progress.position(), 0);

        for step in ["tiling", "greyscale:0:0", "colorize:red:1:1"] {
            progress.start_step(step);
            progress.complete_step();
        }
        assert_eq!(progress.position(), 3);
        progress.finish();
    }

    // Tests visible and hidden bars behave the same
    // Verified by skipping updates on visible bars
    #[test]
    fn test_visible_progress() {
        let progress = EditProgress::new(1, true);
        progress.start_step("tiling");
        progress.complete_step();
        assert_eq!(progress.position(), 1);
        progress.finish();
    }

    // Tests suspended output runs once and leaves progress untouched
    // Verified by dropping the closure result
    #[test]
    fn test_suspend_runs_closure() {
        let progress = EditProgress::new(2, true);
        progress.start_step("greyscale:0:0");
        progress.complete_step();

        let mut calls = 0;
        let value = progress.suspend(|| {
            calls += 1;
            "logged"
        });
        assert_eq!(value, "logged");
        assert_eq!(calls, 1);
        assert_eq!(progress.position(), 1);
        progress.finish();
    }

    // Tests an empty script finishes cleanly
    // Verified by requiring at least one step
    #[test]
    fn test_empty_progress() {
        let progress = EditProgress::new(0, true);
        progress.finish();
        assert_eq!(progress.position(), 0);
    }
}
