//! Reconstruct command
//!
//! Loads a grid and a dictionary and builds every guess sequence consistent
//! with the grid's feedback.

use crate::core::{Grid, Word};
use crate::solver::{LogObserver, ProgressObserver, SearchEngine, SolutionTree};
use crate::wordlists::{WordOrder, load_from_file};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for a reconstruction run
pub struct ReconstructConfig {
    pub grid_path: PathBuf,
    pub dictionary_path: PathBuf,
    pub order: WordOrder,
    pub show_progress: bool,
}

impl ReconstructConfig {
    #[must_use]
    pub fn new(grid_path: impl Into<PathBuf>, dictionary_path: impl Into<PathBuf>) -> Self {
        Self {
            grid_path: grid_path.into(),
            dictionary_path: dictionary_path.into(),
            order: WordOrder::default(),
            show_progress: false,
        }
    }
}

/// Result of a reconstruction run
pub struct ReconstructResult {
    pub grid: Grid,
    pub dictionary_size: usize,
    pub tree: SolutionTree,
    pub duration: Duration,
}

/// Load the inputs named in `config` and reconstruct every guess sequence
///
/// # Errors
///
/// Returns an error if:
/// - The grid file cannot be read or is malformed
/// - The dictionary file cannot be read
pub fn run_reconstruct(config: &ReconstructConfig) -> Result<ReconstructResult, String> {
    let grid = Grid::load(&config.grid_path)
        .map_err(|e| format!("Invalid grid '{}': {e}", config.grid_path.display()))?;

    let dictionary = load_from_file(&config.dictionary_path, config.order).map_err(|e| {
        format!(
            "Failed to read dictionary '{}': {e}",
            config.dictionary_path.display()
        )
    })?;

    Ok(reconstruct(grid, &dictionary, config.show_progress))
}

/// Build the solution tree for an already loaded grid and dictionary
#[must_use]
pub fn reconstruct(grid: Grid, dictionary: &[Word], show_progress: bool) -> ReconstructResult {
    log::info!(
        "Reconstructing {} feedback rows for solution '{}' with {} dictionary words",
        grid.num_rows() - 1,
        grid.solution(),
        dictionary.len()
    );
    if dictionary.is_empty() {
        log::warn!("Dictionary is empty, no guess sequences can be reconstructed");
    }

    let start = Instant::now();
    let progress = show_progress.then(ProgressObserver::new);
    let tree = SearchEngine::new(&grid, dictionary, (LogObserver, progress)).build();
    let duration = start.elapsed();

    log::info!(
        "Built {} nodes ({} complete paths) in {duration:.2?}",
        tree.node_count(),
        tree.path_count()
    );

    ReconstructResult {
        grid,
        dictionary_size: dictionary.len(),
        tree,
        duration,
    }
}
