//! Rendering-surface-agnostic element tree.
//!
//! Builders never touch a real rendering surface. They produce a [`Node`]
//! tree describing element kinds, geometry, style properties, attributes,
//! content and pointer listeners; an adapter such as
//! [`HtmlRenderer`](crate::converters::html::HtmlRenderer) materializes it.

use crate::popup::PopupAction;
use indexmap::IndexMap;
use serde::Serialize;

/// Kinds of elements a rendering surface must be able to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    /// Generic block container
    Container,
    /// Section container carrying an annotation's border
    Section,
    /// Single-line text input
    TextInput,
    /// Multi-line text area
    TextArea,
    /// Select list (combo or list box)
    SelectList,
    /// Item of a select list
    OptionItem,
    /// Checkbox input
    Checkbox,
    /// Radio button input
    Radio,
    /// Label wrapping an input
    Label,
    /// Inline text run
    Span,
    /// Hyperlink
    Anchor,
    /// Image
    Image,
    /// Paragraph
    Paragraph,
    /// Heading
    Heading,
    /// Line break
    LineBreak,
}

/// Pointer events a listener can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PointerEvent {
    /// Pointer moved onto the element
    Enter,
    /// Pointer moved off the element
    Leave,
    /// Element was clicked
    Click,
}

/// A pointer listener: when `event` reaches the node, run `action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Listener {
    /// Triggering event
    pub event: PointerEvent,
    /// Popup action to run
    pub action: PopupAction,
}

/// Content of a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum Content {
    /// No content
    #[default]
    Empty,
    /// Plain text
    Text(String),
    /// Child elements
    Children(Vec<Node>),
}

/// One element of a build description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Element kind
    pub kind: ElementKind,
    /// Class name used by stylesheets and to locate nodes
    pub class_name: Option<String>,
    /// Width in layout units
    pub width: Option<f32>,
    /// Height in layout units
    pub height: Option<f32>,
    /// Style properties in insertion order
    pub style: IndexMap<String, String>,
    /// Element attributes in insertion order
    pub attributes: IndexMap<String, String>,
    /// Text or children
    pub content: Content,
    /// Pointer listeners
    pub listeners: Vec<Listener>,
}

impl Node {
    /// Create an empty node of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            class_name: None,
            width: None,
            height: None,
            style: IndexMap::new(),
            attributes: IndexMap::new(),
            content: Content::Empty,
            listeners: Vec::new(),
        }
    }

    /// Set the class name.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set width and height.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set a style property.
    pub fn with_style(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_style(name, value);
        self
    }

    /// Set an attribute.
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Append a child, replacing any text content.
    pub fn with_child(mut self, child: Node) -> Self {
        self.push_child(child);
        self
    }

    /// Attach a pointer listener.
    pub fn with_listener(mut self, event: PointerEvent, action: PopupAction) -> Self {
        self.listeners.push(Listener { event, action });
        self
    }

    /// Set a style property in place.
    pub fn set_style(&mut self, name: &str, value: impl Into<String>) {
        self.style.insert(name.to_string(), value.into());
    }

    /// Set an attribute in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    /// Remove an attribute in place.
    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.shift_remove(name);
    }

    /// Get a style property.
    pub fn style(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    /// Get an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the boolean attribute `name` is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Append a child, replacing any text content.
    pub fn push_child(&mut self, child: Node) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Child nodes, empty for text or empty content.
    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Text content, if any.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Listener action for `event`, if any.
    pub fn listener(&self, event: PointerEvent) -> Option<PopupAction> {
        self.listeners.iter().find(|l| l.event == event).map(|l| l.action)
    }

    /// Depth-first search for the first node with the given class.
    pub fn find_by_class(&self, class_name: &str) -> Option<&Node> {
        if self.class_name.as_deref() == Some(class_name) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_by_class(class_name))
    }

    /// Mutable depth-first search for the first node with the given class.
    pub fn find_by_class_mut(&mut self, class_name: &str) -> Option<&mut Node> {
        if self.class_name.as_deref() == Some(class_name) {
            return Some(self);
        }
        match &mut self.content {
            Content::Children(children) => children
                .iter_mut()
                .find_map(|c| c.find_by_class_mut(class_name)),
            _ => None,
        }
    }

    /// Depth-first search for the first node of the given kind.
    pub fn find_by_kind(&self, kind: ElementKind) -> Option<&Node> {
        if self.kind == kind {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_by_kind(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_insertion_order() {
        let node = Node::new(ElementKind::Container)
            .with_style("width", "10px")
            .with_style("height", "5px")
            .with_style("display", "table");
        let keys: Vec<&str> = node.style.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["width", "height", "display"]);
    }

    #[test]
    fn test_child_replaces_text() {
        let node = Node::new(ElementKind::Paragraph)
            .with_text("hello")
            .with_child(Node::new(ElementKind::Span));
        assert!(node.text().is_none());
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_find_by_class() {
        let mut tree = Node::new(ElementKind::Section).with_class("outer").with_child(
            Node::new(ElementKind::Container)
                .with_child(Node::new(ElementKind::Image).with_class("icon")),
        );
        assert_eq!(tree.find_by_class("icon").map(|n| n.kind), Some(ElementKind::Image));
        assert!(tree.find_by_class("missing").is_none());

        tree.find_by_class_mut("icon").unwrap().set_attr("hidden", "");
        assert!(tree.find_by_class("icon").unwrap().has_attr("hidden"));
    }

    #[test]
    fn test_attributes_set_and_remove() {
        let mut node = Node::new(ElementKind::Container).with_attr("hidden", "");
        assert!(node.has_attr("hidden"));
        node.remove_attr("hidden");
        assert!(!node.has_attr("hidden"));
        assert!(node.attr("hidden").is_none());
    }

    #[test]
    fn test_listener_lookup() {
        let node = Node::new(ElementKind::Image)
            .with_listener(PointerEvent::Click, PopupAction::Toggle)
            .with_listener(PointerEvent::Enter, PopupAction::Show);
        assert_eq!(node.listener(PointerEvent::Enter), Some(PopupAction::Show));
        assert_eq!(node.listener(PointerEvent::Leave), None);
    }
}
