//! HTML output for annotation element trees.
//!
//! [`HtmlRenderer`] serializes a [`Node`] tree to an HTML fragment. Sizes and
//! style properties become an inline `style` attribute. Pointer listeners
//! become `data-on-<event>` attributes naming the popup action, for a script
//! on the page to wire up.

use crate::node::{Content, ElementKind, Node, PointerEvent};
use crate::popup::PopupAction;
use std::fmt::Write;

/// Attributes written without a value when present.
const BOOLEAN_ATTRIBUTES: &[&str] = &["checked", "disabled", "hidden", "multiple", "selected"];

/// Renders element trees to HTML.
///
/// # Examples
///
/// ```
/// use pdf_annotation_layer::converters::HtmlRenderer;
/// use pdf_annotation_layer::node::{ElementKind, Node};
///
/// let node = Node::new(ElementKind::Anchor).with_attr("href", "https://example.com");
/// assert_eq!(HtmlRenderer::new().render(&node), r#"<a href="https://example.com"></a>"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    pretty: bool,
}

impl HtmlRenderer {
    /// Create a renderer producing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put each element on its own line, indented by depth.
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Render a tree to an HTML fragment.
    pub fn render(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write_node(&mut out, node, 0);
        out
    }

    fn write_node(&self, out: &mut String, node: &Node, depth: usize) {
        if self.pretty && depth > 0 {
            out.push('\n');
            out.push_str(&"  ".repeat(depth));
        }

        let tag = tag_name(node.kind);
        out.push('<');
        out.push_str(tag);

        match node.kind {
            ElementKind::Checkbox => out.push_str(r#" type="checkbox""#),
            ElementKind::Radio => out.push_str(r#" type="radio""#),
            _ => {},
        }
        if let Some(class_name) = &node.class_name {
            write_attribute(out, "class", class_name);
        }
        let style = inline_style(node);
        if !style.is_empty() {
            write_attribute(out, "style", &style);
        }
        for (name, value) in &node.attributes {
            if BOOLEAN_ATTRIBUTES.contains(&name.as_str()) {
                out.push(' ');
                out.push_str(name);
            } else {
                write_attribute(out, name, value);
            }
        }
        for listener in &node.listeners {
            let name = format!("data-on-{}", event_name(listener.event));
            write_attribute(out, &name, action_name(listener.action));
        }
        out.push('>');

        if is_void(node.kind) {
            return;
        }

        match &node.content {
            Content::Empty => {},
            Content::Text(text) => out.push_str(&escape_html(text)),
            Content::Children(children) => {
                for child in children {
                    self.write_node(out, child, depth + 1);
                }
                if self.pretty {
                    out.push('\n');
                    out.push_str(&"  ".repeat(depth));
                }
            },
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn tag_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Container => "div",
        ElementKind::Section => "section",
        ElementKind::TextInput | ElementKind::Checkbox | ElementKind::Radio => "input",
        ElementKind::TextArea => "textarea",
        ElementKind::SelectList => "select",
        ElementKind::OptionItem => "option",
        ElementKind::Label => "label",
        ElementKind::Span => "span",
        ElementKind::Anchor => "a",
        ElementKind::Image => "img",
        ElementKind::Paragraph => "p",
        ElementKind::Heading => "h1",
        ElementKind::LineBreak => "br",
    }
}

fn is_void(kind: ElementKind) -> bool {
    matches!(
        kind,
        ElementKind::TextInput
            | ElementKind::Checkbox
            | ElementKind::Radio
            | ElementKind::Image
            | ElementKind::LineBreak
    )
}

fn event_name(event: PointerEvent) -> &'static str {
    match event {
        PointerEvent::Enter => "mouseover",
        PointerEvent::Leave => "mouseout",
        PointerEvent::Click => "click",
    }
}

fn action_name(action: PopupAction) -> &'static str {
    match action {
        PopupAction::Show => "show",
        PopupAction::Hide => "hide",
        PopupAction::Toggle => "toggle",
        PopupAction::Dismiss => "dismiss",
    }
}

fn inline_style(node: &Node) -> String {
    let mut style = String::new();
    if let Some(width) = node.width {
        let _ = write!(style, "width: {}px; ", width);
    }
    if let Some(height) = node.height {
        let _ = write!(style, "height: {}px; ", height);
    }
    for (name, value) in &node.style {
        let _ = write!(style, "{}: {}; ", name, value);
    }
    style.truncate(style.trim_end().len());
    style
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

/// Escape HTML special characters.
///
/// # Examples
///
/// ```
/// use pdf_annotation_layer::converters::html::escape_html;
///
/// assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Hello"), "Hello");
        assert_eq!(escape_html("AT&T"), "AT&amp;T");
        assert_eq!(escape_html("<div>"), "&lt;div&gt;");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("'apostrophe'"), "&#x27;apostrophe&#x27;");
        assert_eq!(escape_html("<b>&\"'</b>"), "&lt;b&gt;&amp;&quot;&#x27;&lt;/b&gt;");
    }

    #[test]
    fn test_size_and_style_inline() {
        let node = Node::new(ElementKind::Container)
            .with_class("widgetContainer")
            .with_size(100.0, 20.5)
            .with_style("display", "table");
        assert_eq!(
            HtmlRenderer::new().render(&node),
            concat!(
                r#"<div class="widgetContainer" "#,
                r#"style="width: 100px; height: 20.5px; display: table;"></div>"#,
            )
        );
    }

    #[test]
    fn test_void_elements() {
        let node = Node::new(ElementKind::Label)
            .with_child(Node::new(ElementKind::Checkbox).with_attr("checked", ""))
            .with_child(Node::new(ElementKind::LineBreak));
        assert_eq!(
            HtmlRenderer::new().render(&node),
            r#"<label><input type="checkbox" checked><br></label>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let node = Node::new(ElementKind::TextArea)
            .with_attr("title", "a\"b")
            .with_text("<script>");
        assert_eq!(
            HtmlRenderer::new().render(&node),
            r#"<textarea title="a&quot;b">&lt;script&gt;</textarea>"#
        );
    }

    #[test]
    fn test_listeners_as_data_attributes() {
        let node = Node::new(ElementKind::Image)
            .with_listener(PointerEvent::Click, PopupAction::Toggle)
            .with_listener(PointerEvent::Enter, PopupAction::Show);
        assert_eq!(
            HtmlRenderer::new().render(&node),
            r#"<img data-on-click="toggle" data-on-mouseover="show">"#
        );
    }

    #[test]
    fn test_pretty_print() {
        let node = Node::new(ElementKind::Paragraph)
            .with_child(Node::new(ElementKind::Span).with_text("x"));
        let html = HtmlRenderer::new().with_pretty_print(true).render(&node);
        assert_eq!(html, "<p>\n  <span>x</span>\n</p>");
    }
}
