//! Portfolio content records and the facet catalog.
//!
//! These are the typed payloads carried by discoverable items. The engine
//! never inspects them; the parser builds them and the view renders them.

use crate::model::{Item, MalformedRecord};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

// ===== Content Records =====

/// A blog post listed in the blog index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    /// URL slug of the post.
    pub slug: String,
    /// Post title (searchable).
    pub title: String,
    /// Thumbnail URL. `None` lets the presentation layer pick its fallback image.
    pub thumbnail: Option<String>,
    /// Topic tags shown on the card.
    pub tags: Vec<String>,
    /// Author display name.
    pub author: String,
    /// Publication date.
    pub date: NaiveDate,
}

/// A project shown in the project gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Link to the project (repository or store page).
    pub slug: String,
    /// Project title.
    pub title: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Short description.
    pub description: String,
    /// Topic tags.
    pub tags: Vec<String>,
    /// Technologies used.
    pub technologies: Vec<String>,
}

/// A featured video shown in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    /// Link to the video.
    pub url: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Video title.
    pub title: String,
    /// Video tags (e.g. "Talk", "Short").
    pub tags: Vec<String>,
}

// ===== Known Facet Values =====

/// Topic tags a project can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectTag {
    /// "Open Source"
    OpenSource,
    /// "Game Engine Development"
    GameEngine,
    /// "Game Development"
    GameDevelopment,
    /// "Desktop"
    Desktop,
    /// "Backend Development"
    BackendDevelopment,
    /// "Frontend Development"
    FrontendDevelopment,
}

impl ProjectTag {
    /// Every known project tag.
    pub const ALL: [ProjectTag; 6] = [
        ProjectTag::OpenSource,
        ProjectTag::GameEngine,
        ProjectTag::GameDevelopment,
        ProjectTag::Desktop,
        ProjectTag::BackendDevelopment,
        ProjectTag::FrontendDevelopment,
    ];

    /// Display label, which is also the facet value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectTag::OpenSource => "Open Source",
            ProjectTag::GameEngine => "Game Engine Development",
            ProjectTag::GameDevelopment => "Game Development",
            ProjectTag::Desktop => "Desktop",
            ProjectTag::BackendDevelopment => "Backend Development",
            ProjectTag::FrontendDevelopment => "Frontend Development",
        }
    }
}

/// Technologies a project can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Technology {
    /// "C++"
    Cpp,
    /// ".NET Core"
    DotnetCore,
    /// "Vulkan"
    Vulkan,
    /// "Raylib"
    Raylib,
    /// "Godot"
    Godot,
    /// "Photon"
    Photon,
    /// "Unity3D"
    Unity,
    /// "C#"
    CSharp,
}

impl Technology {
    /// Every known technology.
    pub const ALL: [Technology; 8] = [
        Technology::Cpp,
        Technology::DotnetCore,
        Technology::Vulkan,
        Technology::Raylib,
        Technology::Godot,
        Technology::Photon,
        Technology::Unity,
        Technology::CSharp,
    ];

    /// Display label, which is also the facet value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Technology::Cpp => "C++",
            Technology::DotnetCore => ".NET Core",
            Technology::Vulkan => "Vulkan",
            Technology::Raylib => "Raylib",
            Technology::Godot => "Godot",
            Technology::Photon => "Photon",
            Technology::Unity => "Unity3D",
            Technology::CSharp => "C#",
        }
    }
}

// ===== ContentDocument =====

/// Everything loaded from one content document.
///
/// Posts and projects are already adapted into discoverable items; videos
/// only feed the carousel and stay plain records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDocument {
    /// Blog posts in document order.
    pub posts: Vec<Item<BlogPost>>,
    /// Projects in document order.
    pub projects: Vec<Item<Project>>,
    /// Featured videos in document order.
    pub videos: Vec<Video>,
    /// Records that were skipped.
    pub malformed: Vec<MalformedRecord>,
}

impl ContentDocument {
    /// Number of records that loaded, across all sections.
    pub fn loaded_count(&self) -> usize {
        self.posts.len() + self.projects.len() + self.videos.len()
    }
}

// ===== FacetCatalog =====

/// A named group of selectable facet values, sorted alphabetically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetGroup {
    name: String,
    values: Vec<String>,
}

impl FacetGroup {
    /// Create a group; values are deduplicated and sorted.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        Self {
            name: name.into(),
            values: values.into_iter().collect(),
        }
    }

    /// Group heading (e.g. "Tags").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sorted facet values.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// The facets offered for selection, grouped by category.
///
/// Groups are independent categories but selection is one flat set: a value
/// selected from "Tags" and one from "Technologies" are OR-ed together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetCatalog {
    groups: Vec<FacetGroup>,
}

impl FacetCatalog {
    /// Create a catalog from explicit groups. Empty groups are dropped.
    pub fn new(groups: Vec<FacetGroup>) -> Self {
        Self {
            groups: groups.into_iter().filter(|g| !g.values.is_empty()).collect(),
        }
    }

    /// Catalog of every known project tag and technology.
    pub fn project_defaults() -> Self {
        Self::new(vec![
            FacetGroup::new("Tags", ProjectTag::ALL.iter().map(|t| t.as_str())),
            FacetGroup::new("Technologies", Technology::ALL.iter().map(|t| t.as_str())),
        ])
    }

    /// Catalog built from the tags projects actually carry.
    ///
    /// Useful when content introduces values the defaults don't know about.
    pub fn from_projects<'a, I>(projects: I) -> Self
    where
        I: IntoIterator<Item = &'a Project>,
    {
        let mut tags = BTreeSet::new();
        let mut technologies = BTreeSet::new();
        for project in projects {
            tags.extend(project.tags.iter().cloned());
            technologies.extend(project.technologies.iter().cloned());
        }
        Self::new(vec![
            FacetGroup::new("Tags", tags),
            FacetGroup::new("Technologies", technologies),
        ])
    }

    /// Catalog of the tags blog posts carry, in a single "Tags" group.
    pub fn from_posts<'a, I>(posts: I) -> Self
    where
        I: IntoIterator<Item = &'a BlogPost>,
    {
        let tags: BTreeSet<String> = posts
            .into_iter()
            .flat_map(|post| post.tags.iter().cloned())
            .collect();
        Self::new(vec![FacetGroup::new("Tags", tags)])
    }

    /// Union of two catalogs. Groups with the same name are merged; groups
    /// only present in `other` are appended.
    pub fn merge(self, other: FacetCatalog) -> Self {
        let mut groups = self.groups;
        for incoming in other.groups {
            match groups.iter_mut().find(|g| g.name == incoming.name) {
                Some(existing) => {
                    let values = std::mem::take(&mut existing.values);
                    *existing =
                        FacetGroup::new(incoming.name, values.into_iter().chain(incoming.values));
                }
                None => groups.push(incoming),
            }
        }
        Self::new(groups)
    }

    /// Groups in display order.
    pub fn groups(&self) -> &[FacetGroup] {
        &self.groups
    }

    /// All values across groups, in display order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.values.iter().map(String::as_str))
    }

    /// Total number of selectable values.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.values.len()).sum()
    }

    /// Whether there is nothing to select.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at a flat position (as used by a cursor walking the catalog).
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values().nth(index)
    }
}
