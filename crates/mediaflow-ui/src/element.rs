//! Host-page element abstraction.
//!
//! A minimal tree of tagged elements with string attributes, standing in for
//! the server-rendered markup behaviors are bound to.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: HashMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Depth-first walk over this element and all descendants.
    pub fn walk(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }

    /// First descendant declaring itself as `name` target of `controller`
    /// (attribute `data-{controller}-target="{name}"`).
    pub fn find_target(&self, controller: &str, name: &str) -> Option<&Element> {
        let attr_name = format!("data-{}-target", controller);
        self.walk()
            .into_iter()
            .find(|el| el.attr(&attr_name) == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_nested_target_by_controller_attribute() {
        let root = Element::new("form")
            .with_attr("data-controller", "media-form")
            .with_child(
                Element::new("div").with_child(
                    Element::new("input").with_attr("data-media-form-target", "fileInput"),
                ),
            );

        let target = root.find_target("media-form", "fileInput").unwrap();
        assert_eq!(target.tag(), "input");
        assert!(root.find_target("media-form", "missing").is_none());
    }

    #[test]
    fn walk_visits_all_descendants() {
        let root = Element::new("div")
            .with_child(Element::new("span"))
            .with_child(Element::new("p").with_child(Element::new("a")));
        let tags: Vec<&str> = root.walk().iter().map(|el| el.tag()).collect();
        assert_eq!(tags, vec!["div", "span", "p", "a"]);
    }
}
