use crate::schema::SubjectResponse;

/// SubjectSource is the abstraction layer between:
/// - The collector runtime
/// - A concrete book-catalog API
///
/// Each implementation must:
/// - Turn a subject into exactly one request
/// - Treat any non-success response as an error
/// - Decode the body into `SubjectResponse`
///
/// CONTRACT:
/// - No retries, no caching, no pagination
/// - Errors are returned, never swallowed
///
/// THREAD SAFETY:
/// - Must be Send + Sync
///
#[async_trait::async_trait]
pub trait SubjectSource: Send + Sync {
    /// Short identifier used in log lines (e.g. "openlibrary").
    fn name(&self) -> &'static str;

    /// Fetches the works listed for one subject.
    ///
    /// RETURNS:
    /// - `Ok(SubjectResponse)` for a successful, well-formed response
    /// - `Err` for transport failures, non-success statuses and
    ///   undecodable bodies
    ///
    async fn fetch_subject(&self, subject: &str) -> anyhow::Result<SubjectResponse>;
}
