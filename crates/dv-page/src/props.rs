//! Page input data.
//!
//! Plain-data records describing a page: title, credit lists, related
//! links, and adjacent-page references. The content source is deliberately
//! not part of [`PageProps`]; it carries a one-shot future and is consumed
//! by [`PageView::new`](crate::PageView::new), while the records here stay
//! cloneable and serializable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contributor credit entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Display name (e.g. a GitHub username).
    pub name: String,
}

impl Contributor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Translator credit entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translator {
    /// Display name.
    pub name: String,
}

impl Translator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Entry in the "Further Reading" list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    /// Link target.
    pub url: String,
    /// Display title.
    pub title: String,
}

impl RelatedLink {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Reference to an adjacent (previous/next) page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    /// URL path of the referenced page.
    pub path: String,
    /// Display title.
    pub title: String,
}

impl PageRef {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
        }
    }
}

/// Input record for a page view.
///
/// Unknown fields travel in `extra` and are forwarded untouched to the
/// page-links renderer; the composer itself only reads the `thirdParty`
/// flag from the bag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageProps {
    /// Page title.
    pub title: String,
    /// Contributor credits, possibly empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<Contributor>,
    /// Translator credits, possibly empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translators: Vec<Translator>,
    /// Related-reading links, possibly empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedLink>,
    /// Previous page in reading order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageRef>,
    /// Next page in reading order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
    /// Pass-through fields for the page-links renderer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PageProps {
    /// Create props with only a title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the contributor list.
    #[must_use]
    pub fn with_contributors(mut self, contributors: Vec<Contributor>) -> Self {
        self.contributors = contributors;
        self
    }

    /// Set the translator list.
    #[must_use]
    pub fn with_translators(mut self, translators: Vec<Translator>) -> Self {
        self.translators = translators;
        self
    }

    /// Set the related-reading links.
    #[must_use]
    pub fn with_related(mut self, related: Vec<RelatedLink>) -> Self {
        self.related = related;
        self
    }

    /// Set the previous-page reference.
    #[must_use]
    pub fn with_previous(mut self, previous: PageRef) -> Self {
        self.previous = Some(previous);
        self
    }

    /// Set the next-page reference.
    #[must_use]
    pub fn with_next(mut self, next: PageRef) -> Self {
        self.next = Some(next);
        self
    }

    /// Add a pass-through field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Whether the page documents a third-party package.
    ///
    /// Read from the `thirdParty` pass-through field; absent or non-boolean
    /// values mean false.
    #[must_use]
    pub fn third_party(&self) -> bool {
        self.extra
            .get("thirdParty")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    static_assertions::assert_impl_all!(PageProps: Send, Sync, Clone);

    #[test]
    fn test_third_party_defaults_false() {
        assert!(!PageProps::new("Guide").third_party());
    }

    #[test]
    fn test_third_party_reads_extra_flag() {
        let props = PageProps::new("some-loader").with_extra("thirdParty", json!(true));
        assert!(props.third_party());

        let props = PageProps::new("core").with_extra("thirdParty", json!(false));
        assert!(!props.third_party());
    }

    #[test]
    fn test_third_party_non_boolean_is_false() {
        let props = PageProps::new("Guide").with_extra("thirdParty", json!("yes"));
        assert!(!props.third_party());
    }

    #[test]
    fn test_deserialize_with_pass_through_fields() {
        let props: PageProps = serde_json::from_value(json!({
            "title": "Plugins",
            "related": [{"url": "/x", "title": "X"}],
            "thirdParty": true,
            "repo": "https://example.com/repo"
        }))
        .unwrap();

        assert_eq!(props.title, "Plugins");
        assert_eq!(props.related, vec![RelatedLink::new("/x", "X")]);
        assert!(props.third_party());
        assert_eq!(props.extra.get("repo"), Some(&json!("https://example.com/repo")));
    }

    #[test]
    fn test_serialize_skips_empty_sections() {
        let json = serde_json::to_value(PageProps::new("Guide")).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("title"), Some(&json!("Guide")));
    }
}
