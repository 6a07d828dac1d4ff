//! Tests for batch progress display lifecycle

#[cfg(test)]
mod tests {

    use mazesnap::io::progress::ProgressManager;
    use std::path::Path;

    #[test]
    fn test_single_file_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.start_file(Path::new("maze.png"));
        for stage in 0..4 {
            pm.start_stage(stage);
        }
        pm.complete_file();
        pm.finish();
    }

    #[test]
    fn test_batch_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(3);
        for name in ["a.png", "b.png", "c.png"] {
            pm.start_file(Path::new(name));
            pm.start_stage(0);
            pm.complete_file();
        }
        pm.finish();
    }

    #[test]
    fn test_out_of_range_stage_is_harmless() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.start_file(Path::new("maze.png"));
        pm.start_stage(99);
        pm.finish();
    }
}
