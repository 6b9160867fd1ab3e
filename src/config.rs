use std::path::PathBuf;

// ------------------------------------------------------------
// Root configuration
// ------------------------------------------------------------
//
// Fixed run parameters for the collector.
//
// It defines:
// - Where subjects are fetched from
// - How many works are requested per subject
// - Which subjects are collected, and in which order
// - Where the catalog is written
//
// NOTE:
// Nothing here is read from disk, arguments or the environment.
// `Config::default()` is the only configuration the binary uses.
//
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the subjects API (no trailing slash)
    pub base_url: String,

    /// Page size sent as `limit=` on every request
    pub limit: usize,

    /// Subjects collected, in iteration order
    pub subjects: Vec<String>,

    /// Destination of the catalog file
    pub output_path: PathBuf,
}

pub const BASE_URL: &str = "https://openlibrary.org/subjects";
pub const PAGE_LIMIT: usize = 25;
pub const SUBJECTS: [&str; 4] = ["science_fiction", "mystery", "fantasy", "thriller"];
pub const OUTPUT_PATH: &str = "data/books.json";

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            limit: PAGE_LIMIT,
            subjects: SUBJECTS.iter().map(|s| s.to_string()).collect(),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}
