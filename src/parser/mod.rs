//! Content document parser.
//!
//! Turns a JSON content document into typed records and adapts posts and
//! projects into discoverable items. Parsing is graceful per record: a bad
//! record is kept as a `MalformedRecord` and the rest of the document loads.
//! Only a document that is not a JSON object at all is an error.

use crate::model::{
    BlogPost, ContentDocument, ContentError, ContentSection, FacetTags, Item, ItemId,
    MalformedRecord, Project, RecordError, Video,
};
use chrono::{DateTime, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct RawPost {
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    tags: Option<Value>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Option<Value>,
    #[serde(default)]
    technologies: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawVideo {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    tags: Option<Value>,
}

// ===== Document =====

/// Parse a whole content document.
///
/// Sections (`posts`, `projects`, `videos`) are optional. Unknown top-level
/// keys are ignored.
///
/// # Errors
///
/// Returns `ContentError` if the text is not JSON, the top level is not an
/// object, or a section is present but not an array.
pub fn parse_document(raw: &str) -> Result<ContentDocument, ContentError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| ContentError::InvalidJson {
        message: e.to_string(),
    })?;
    let root = value.as_object().ok_or(ContentError::NotAnObject)?;

    let mut document = ContentDocument::default();
    for (index, record) in section(root, ContentSection::Posts)?.iter().enumerate() {
        match parse_post(record) {
            Ok(item) => document.posts.push(item),
            Err(e) => document
                .malformed
                .push(MalformedRecord::new(ContentSection::Posts, index, e)),
        }
    }
    for (index, record) in section(root, ContentSection::Projects)?.iter().enumerate() {
        match parse_project(record) {
            Ok(item) => document.projects.push(item),
            Err(e) => document
                .malformed
                .push(MalformedRecord::new(ContentSection::Projects, index, e)),
        }
    }
    for (index, record) in section(root, ContentSection::Videos)?.iter().enumerate() {
        match parse_video(record) {
            Ok(video) => document.videos.push(video),
            Err(e) => document
                .malformed
                .push(MalformedRecord::new(ContentSection::Videos, index, e)),
        }
    }
    Ok(document)
}

fn section(root: &Map<String, Value>, section: ContentSection) -> Result<&[Value], ContentError> {
    match root.get(section.key()) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(records)) => Ok(records),
        Some(_) => Err(ContentError::SectionNotArray {
            section: section.key(),
        }),
    }
}

// ===== Records =====

/// Parse one blog post record into a text-searchable item.
///
/// The item's facet tags come from the post's `tags` field.
pub fn parse_post(record: &Value) -> Result<Item<BlogPost>, RecordError> {
    let raw: RawPost = deserialize_record(record)?;
    let slug = required(raw.slug, "slug")?;
    let title = required(raw.title, "title")?;
    let author = required(raw.author, "author")?;
    let date = parse_date(&required(raw.date, "date")?)?;
    let tags = tag_sequence(raw.tags.as_ref());
    let id = item_id(&slug)?;

    let facet_tags = match &tags {
        Some(tags) => FacetTags::from_tags(tags.iter().cloned()),
        None => FacetTags::Malformed,
    };
    let post = BlogPost {
        slug,
        title: title.clone(),
        thumbnail: raw.thumbnail.filter(|t| !t.is_empty()),
        tags: tags.unwrap_or_default(),
        author,
        date,
    };
    Ok(Item::new(id, title, facet_tags, post))
}

/// Parse one project record into a facet-filterable item.
///
/// The item's facet tags are the union of `tags` and `technologies`. Each
/// field that is missing or not an array contributes nothing; only when
/// neither field holds a sequence are the tags `Malformed`.
pub fn parse_project(record: &Value) -> Result<Item<Project>, RecordError> {
    let raw: RawProject = deserialize_record(record)?;
    let slug = required(raw.slug, "slug")?;
    let title = required(raw.title, "title")?;
    let tags = tag_sequence(raw.tags.as_ref());
    let technologies = tag_sequence(raw.technologies.as_ref());
    let id = item_id(&slug)?;

    let facet_tags = if tags.is_none() && technologies.is_none() {
        FacetTags::Malformed
    } else {
        FacetTags::from_tags(tags.iter().chain(technologies.iter()).flatten().cloned())
    };
    let project = Project {
        slug,
        title: title.clone(),
        thumbnail: raw.thumbnail.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        tags: tags.unwrap_or_default(),
        technologies: technologies.unwrap_or_default(),
    };
    Ok(Item::new(id, title, facet_tags, project))
}

/// Parse one video record.
pub fn parse_video(record: &Value) -> Result<Video, RecordError> {
    let raw: RawVideo = deserialize_record(record)?;
    Ok(Video {
        url: required(raw.url, "url")?,
        thumbnail: raw.thumbnail.unwrap_or_default(),
        title: required(raw.title, "title")?,
        tags: tag_sequence(raw.tags.as_ref()).unwrap_or_default(),
    })
}

fn deserialize_record<T: DeserializeOwned>(record: &Value) -> Result<T, RecordError> {
    if !record.is_object() {
        return Err(RecordError::NotAnObject);
    }
    T::deserialize(record).map_err(|e| RecordError::InvalidRecord {
        message: e.to_string(),
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RecordError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(RecordError::MissingField { field })
}

fn item_id(slug: &str) -> Result<ItemId, RecordError> {
    ItemId::new(slug).map_err(|_| RecordError::MissingField { field: "slug" })
}

/// Read a tag field. `None` unless the field is an array; non-string
/// elements (such as `null`) are skipped.
fn tag_sequence(value: Option<&Value>) -> Option<Vec<String>> {
    match value? {
        Value::Array(elements) => Some(
            elements
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }
}

/// Parse `YYYY-MM-DD`, falling back to an RFC 3339 timestamp's date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| RecordError::InvalidDate {
            raw: raw.to_string(),
        })
}
