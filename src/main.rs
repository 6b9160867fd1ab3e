// ------------------------------------------------------------
// Module declarations
// ------------------------------------------------------------
//
// Each module represents a well-defined responsibility:
//
// - config:    Fixed run parameters (API base URL, subjects, output path)
// - schema:    Typed API responses and output records
// - util:      URL and filesystem helpers
// - sources:   SubjectSource trait and the Open Library client
// - collector: Fetch loop and catalog writer
//
mod config;
mod schema;
mod util;
mod sources;
mod collector;

// ------------------------------------------------------------
// External dependencies
// ------------------------------------------------------------

use config::Config;
use collector::runner::run;
use sources::OpenLibrarySource;

// ------------------------------------------------------------
// Application entry point
// ------------------------------------------------------------
//
// Collects book listings for a fixed set of subjects from
// Open Library and writes them to `data/books.json`.
//
// Responsibilities:
// - Initialize logging (quiet unless RUST_LOG is set)
// - Build the HTTP source from the default configuration
// - Run one sequential collection pass
//
// Any error aborts the process with a non-zero exit code and
// leaves the previous output file as it was.
//
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    let source = OpenLibrarySource::new(&config);

    log::debug!(
        "collecting {} subjects from {} into {}",
        config.subjects.len(),
        config.base_url,
        config.output_path.display()
    );

    run(&source, &config).await?;

    Ok(())
}
