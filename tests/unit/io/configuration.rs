//! Tests for configuration constants and their invariants

#[cfg(test)]
mod tests {

    use mazesnap::io::configuration::{
        BINARIZED_SUFFIX, DEFAULT_BACKGROUND_PERCENTILE, DEFAULT_LINE_WIDTH, END_MARKER_COLOR,
        PATH_COLOR, SOLVED_SUFFIX, STAGE_NAMES, START_MARKER_COLOR, SUPPORTED_EXTENSIONS,
    };

    #[test]
    fn test_percentile_is_a_valid_percentile() {
        assert!((0.0..=100.0).contains(&DEFAULT_BACKGROUND_PERCENTILE));
    }

    #[test]
    fn test_line_width_is_drawable() {
        assert!(DEFAULT_LINE_WIDTH >= 1);
    }

    #[test]
    fn test_artifact_suffixes_are_distinct() {
        assert_ne!(BINARIZED_SUFFIX, SOLVED_SUFFIX);
        assert!(!BINARIZED_SUFFIX.is_empty());
        assert!(!SOLVED_SUFFIX.is_empty());
    }

    #[test]
    fn test_marker_colors_are_distinguishable() {
        assert_ne!(START_MARKER_COLOR, END_MARKER_COLOR);
        assert_ne!(PATH_COLOR, START_MARKER_COLOR);
        assert_ne!(PATH_COLOR, END_MARKER_COLOR);
    }

    #[test]
    fn test_stage_names_cover_the_pipeline() {
        assert_eq!(STAGE_NAMES.len(), 4);
    }

    #[test]
    fn test_supported_extensions_are_lowercase() {
        for ext in SUPPORTED_EXTENSIONS {
            assert_eq!(ext, ext.to_lowercase());
        }
    }
}
