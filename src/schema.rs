use serde::{Deserialize, Deserializer, Serialize};

/// Response body of `GET /subjects/{subject}.json`.
///
/// Only the fields the collector projects are modelled.
/// Everything else in the payload is ignored by serde.
///
/// An absent or `null` works list is read as empty.
#[derive(Debug, Deserialize, Default)]
pub struct SubjectResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub works: Vec<Work>,
}

// ------------------------------------------------------------
// Work entry
// ------------------------------------------------------------
//
// One element of `works`. All fields are optional upstream.
//
#[derive(Debug, Deserialize, Default)]
pub struct Work {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub authors: Vec<WorkAuthor>,

    #[serde(default)]
    pub first_publish_year: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct WorkAuthor {
    #[serde(default)]
    pub name: Option<String>,
}

// ------------------------------------------------------------
// Output record
// ------------------------------------------------------------
//
// One flattened book entry in the catalog.
//
// IMPORTANT:
// - Field order is the serialized key order.
// - Absent values serialize as `null`, never as a missing key.
// - An author without a name stays in the list as `null`, so
//   `authors.len()` always equals the upstream author count.
//
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Record {
    /// Work title, passed through
    pub title: Option<String>,

    /// Author names in upstream order
    pub authors: Vec<Option<String>>,

    /// First publication year, passed through
    pub first_publish_year: Option<i64>,

    /// Subject whose request produced this record
    pub subject: String,
}

impl Record {
    /// Projects a raw work down to a record tagged with `subject`.
    pub fn from_work(work: Work, subject: &str) -> Self {
        Self {
            title: work.title,
            authors: work.authors.into_iter().map(|a| a.name).collect(),
            first_publish_year: work.first_publish_year,
            subject: subject.to_string(),
        }
    }
}

/// The document written to disk: `{ "books": [...] }`.
#[derive(Debug, Serialize, Default)]
pub struct Catalog {
    pub books: Vec<Record>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(raw: &str) -> SubjectResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn missing_works_is_empty() {
        assert!(parse(r#"{"name":"mystery","work_count":0}"#).works.is_empty());
        assert!(parse(r#"{"works":null}"#).works.is_empty());
    }

    #[test]
    fn full_work_projects_all_fields() {
        let resp = parse(
            r#"{"works":[{"title":"X","authors":[{"name":"A","key":"/authors/OL1A"}],"first_publish_year":1990,"edition_count":3}]}"#,
        );
        let work = resp.works.into_iter().next().unwrap();

        assert_eq!(
            Record::from_work(work, "mystery"),
            Record {
                title: Some("X".into()),
                authors: vec![Some("A".into())],
                first_publish_year: Some(1990),
                subject: "mystery".into(),
            }
        );
    }

    #[test]
    fn missing_authors_becomes_empty_list() {
        let resp = parse(r#"{"works":[{"title":"Untitled"},{"title":"Nulled","authors":null}]}"#);

        for work in resp.works {
            let record = Record::from_work(work, "fantasy");
            assert_eq!(record.authors, Vec::<Option<String>>::new());
        }
    }

    #[test]
    fn nameless_author_is_kept_as_null_in_place() {
        let resp = parse(r#"{"works":[{"authors":[{"name":"A"},{"key":"/authors/OL2A"},{"name":"C"}]}]}"#);
        let work = resp.works.into_iter().next().unwrap();
        let record = Record::from_work(work, "thriller");

        assert_eq!(
            record.authors,
            vec![Some("A".to_string()), None, Some("C".to_string())]
        );
        assert_eq!(record.title, None);
        assert_eq!(record.first_publish_year, None);
    }

    #[test]
    fn wrong_field_type_is_a_parse_error() {
        assert!(serde_json::from_str::<SubjectResponse>(r#"{"works":[{"title":42}]}"#).is_err());
        assert!(serde_json::from_str::<SubjectResponse>("not json").is_err());
    }

    #[test]
    fn record_serializes_absent_fields_as_null() {
        let record = Record::from_work(Work::default(), "mystery");

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "title": null,
                "authors": [],
                "first_publish_year": null,
                "subject": "mystery"
            })
        );
    }
}
