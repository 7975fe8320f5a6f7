//! The host document
//!
//! Owns the element tree the renderer writes into. The panel containers are
//! ordinary elements supplied by whoever builds the page; the renderer only
//! appends into them and toggles classes on its own elements.

use crate::element::Element;
use crate::error::DomError;
use crate::op::{DomOp, Target};
use crate::Result;

/// Element tree rooted at a `body` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new() -> Self {
        Self {
            root: Element::new("body"),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Append a top-level element to the page body.
    pub fn append_to_root(&mut self, element: Element) {
        self.root.push_child(element);
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        find_by(&self.root, &|el| el.id() == Some(id))
    }

    pub fn element_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        find_by(&self.root, &|el| el.attr(name) == Some(value))
    }

    /// All elements carrying `class`, in document order.
    pub fn elements_with_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_by(&self.root, &|el| el.has_class(class), &mut found);
        found
    }

    /// Apply a sequence of mutations.
    ///
    /// An `Append` whose parent id is missing fails the whole call; ops
    /// already applied stay applied. Class toggles on missing targets are
    /// ignored.
    pub fn apply(&mut self, ops: &[DomOp]) -> Result<()> {
        for op in ops {
            self.apply_one(op)?;
        }
        Ok(())
    }

    fn apply_one(&mut self, op: &DomOp) -> Result<()> {
        match op {
            DomOp::Append { parent, element } => {
                match find_by_mut(&mut self.root, &|el| el.id() == Some(parent.as_str())) {
                    Some(container) => {
                        container.push_child(element.clone());
                        Ok(())
                    }
                    None => Err(DomError::MissingContainer(parent.clone())),
                }
            }
            DomOp::AddClass { target, class } => {
                match self.find_target_mut(target) {
                    Some(el) => el.add_class(class),
                    None => tracing::debug!(
                        target = %target,
                        class = %class,
                        "Class add on missing element ignored"
                    ),
                }
                Ok(())
            }
            DomOp::RemoveClass { target, class } => {
                match self.find_target_mut(target) {
                    Some(el) => el.remove_class(class),
                    None => tracing::debug!(
                        target = %target,
                        class = %class,
                        "Class remove on missing element ignored"
                    ),
                }
                Ok(())
            }
        }
    }

    fn find_target_mut(&mut self, target: &Target) -> Option<&mut Element> {
        match target {
            Target::Id(id) => find_by_mut(&mut self.root, &|el| el.id() == Some(id.as_str())),
            Target::Attr { name, value } => {
                find_by_mut(&mut self.root, &|el| el.attr(name) == Some(value.as_str()))
            }
        }
    }

    /// Serialize the whole page to HTML.
    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn find_by<'a, F>(element: &'a Element, pred: &F) -> Option<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    if pred(element) {
        return Some(element);
    }
    for child in element.children() {
        if let Some(found) = find_by(child, pred) {
            return Some(found);
        }
    }
    None
}

fn find_by_mut<'a, F>(element: &'a mut Element, pred: &F) -> Option<&'a mut Element>
where
    F: Fn(&Element) -> bool,
{
    if pred(element) {
        return Some(element);
    }
    for child in element.children_mut() {
        if let Some(found) = find_by_mut(child, pred) {
            return Some(found);
        }
    }
    None
}

fn collect_by<'a, F>(element: &'a Element, pred: &F, found: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    if pred(element) {
        found.push(element);
    }
    for child in element.children() {
        collect_by(child, pred, found);
    }
}
