/// Collector module
///
/// This module groups all logic responsible for:
/// - Fetching each configured subject through a `SubjectSource`
/// - Projecting works into records
/// - Writing the final catalog to disk
///
/// Design notes:
/// - API-specific logic MUST NOT live here
/// - Subjects are processed strictly one after another
/// - The first error aborts the run before anything is written
pub mod output;
pub mod runner;
