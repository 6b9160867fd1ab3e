use crate::{
    config::Config,
    schema::{Catalog, Record},
    sources::SubjectSource,
};

use super::output;

/// Fetches one subject and projects its works into records.
///
/// Behavior:
/// - Prints a progress line before the request
/// - Keeps response order
/// - Tags every record with `subject`
///
/// An empty works list yields an empty Vec, not an error.
///
pub async fn fetch(source: &dyn SubjectSource, subject: &str) -> anyhow::Result<Vec<Record>> {
    println!("Fetching books for genre: {}", subject);

    let response = source.fetch_subject(subject).await?;

    Ok(response
        .works
        .into_iter()
        .map(|work| Record::from_work(work, subject))
        .collect())
}

/// Runs one full collection pass.
///
/// This function:
/// - Fetches every configured subject, in order, one at a time
/// - Accumulates all records into a single list
/// - Writes `{ "books": [...] }` to the configured output path
///
/// GUARANTEES:
/// - The first failing subject aborts the run; later subjects are
///   never requested
/// - Nothing is written unless every subject succeeded
///
/// RETURNS:
/// - The number of records written
///
pub async fn run(source: &dyn SubjectSource, config: &Config) -> anyhow::Result<usize> {
    let mut books = Vec::new();

    for subject in &config.subjects {
        let records = fetch(source, subject).await?;
        log::info!("[{}] {}: {} records", source.name(), subject, records.len());
        books.extend(records);
    }

    let count = books.len();
    output::write_catalog(&config.output_path, &Catalog { books })?;

    println!(
        "\nSaved {} books to {}",
        count,
        config.output_path.display()
    );

    Ok(count)
}
