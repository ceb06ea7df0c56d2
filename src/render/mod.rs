//! Annotation dispatch.
//!
//! [`AnnotationRenderer::render`] is the entry point of the layer: it routes
//! a record to the builder for its annotation type and returns the finished
//! [`AnnotationElement`].
//!
//! Two modes exist. Static mode shows form fields as plain text; interactive
//! mode turns them into editable controls. Every other annotation type is
//! built the same way in both modes.

mod link;
mod static_widget;
mod text_annotation;

pub use link::LINK_CLASS;
pub use text_annotation::{
    TEXT_ANNOTATION_CLASS, TEXT_CONTENT_CLASS, TEXT_CONTENT_WRAPPER_CLASS,
};

use crate::annotation_types::AnnotationType;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::fonts::FontResolver;
use crate::node::{ElementKind, Node, PointerEvent};
use crate::popup::{PopupController, Transition};
use crate::record::AnnotationRecord;
use crate::style::{BorderLine, ComputedStyle};
use crate::widgets::build_widget;

/// How widget annotations are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Field values as read-only text
    #[default]
    Static,
    /// Editable form controls
    Interactive,
}

/// Which part of a text annotation received a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupTarget {
    /// The icon image
    Icon,
    /// The popup body
    Content,
}

/// A built annotation: its element tree and, for text annotations with a
/// note, the popup state machine that owns the popup's visibility.
#[derive(Debug, Clone)]
pub struct AnnotationElement {
    root: Node,
    popup: Option<PopupController>,
}

impl AnnotationElement {
    /// Element without interactive state.
    pub fn new(root: Node) -> Self {
        Self { root, popup: None }
    }

    /// Element whose popup is driven by `popup`.
    pub fn with_popup(root: Node, popup: PopupController) -> Self {
        Self {
            root,
            popup: Some(popup),
        }
    }

    /// Root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Take the tree.
    pub fn into_node(self) -> Node {
        self.root
    }

    /// Popup controller, if the annotation has an interactive popup.
    pub fn popup(&self) -> Option<&PopupController> {
        self.popup.as_ref()
    }

    /// Deliver a pointer event to the icon or popup body.
    ///
    /// Runs the listener attached to the target, if any, and reflects the
    /// resulting state in the tree: the popup body's `hidden` attribute and
    /// the container's `z-index`. Returns the transition made.
    pub fn dispatch(&mut self, target: PopupTarget, event: PointerEvent) -> Option<Transition> {
        let node = match target {
            PopupTarget::Icon => self.root.find_by_kind(ElementKind::Image),
            PopupTarget::Content => self.root.find_by_class(TEXT_CONTENT_CLASS),
        }?;
        let action = node.listener(event)?;
        let transition = self.popup.as_mut()?.apply(action)?;

        if transition.visibility_changed() {
            if let Some(content) = self.root.find_by_class_mut(TEXT_CONTENT_CLASS) {
                if transition.to.is_visible() {
                    content.remove_attr("hidden");
                } else {
                    content.set_attr("hidden", "");
                }
            }
            if let Some(popup) = &self.popup {
                self.root.set_style("z-index", popup.z_index().to_string());
            }
        }
        Some(transition)
    }
}

/// Builds annotation elements with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct AnnotationRenderer {
    config: RenderConfig,
}

impl AnnotationRenderer {
    /// Create a renderer.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renderer configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Build the element for one annotation record with this renderer's
    /// configuration. See [`render`].
    pub fn render(
        &self,
        record: &AnnotationRecord,
        fonts: &dyn FontResolver,
        mode: RenderMode,
    ) -> Result<Option<AnnotationElement>> {
        render(record, fonts, mode, &self.config)
    }
}

/// Build the element for one annotation record.
///
/// Returns `Ok(None)` when the record has no HTML representation or, in
/// interactive mode, when no form control applies to a widget (push
/// buttons, unknown field types).
///
/// # Errors
///
/// Returns [`Error::UnsupportedAnnotationType`] for annotation types
/// other than Widget, Text and Link. Interactive mode only handles
/// widgets itself and hands every other type to static rendering, so
/// this applies in both modes.
pub fn render(
    record: &AnnotationRecord,
    fonts: &dyn FontResolver,
    mode: RenderMode,
    config: &RenderConfig,
) -> Result<Option<AnnotationElement>> {
    if !record.has_html {
        return Ok(None);
    }

    match (mode, record.annotation_type) {
        (RenderMode::Interactive, AnnotationType::Widget) => Ok(build_widget(record, fonts)
            .map(|container| AnnotationElement::new(container.to_node()))),
        _ => render_static(record, fonts, config).map(Some),
    }
}

fn render_static(
    record: &AnnotationRecord,
    fonts: &dyn FontResolver,
    config: &RenderConfig,
) -> Result<AnnotationElement> {
    log::debug!("Rendering {} annotation", record.annotation_type.pdf_name());
    match record.annotation_type {
        AnnotationType::Widget => Ok(AnnotationElement::new(static_widget::build(record, fonts))),
        AnnotationType::Text => Ok(text_annotation::build(record, fonts, config)),
        AnnotationType::Link => Ok(AnnotationElement::new(link::build(record, config))),
        AnnotationType::FreeText
        | AnnotationType::Line
        | AnnotationType::Square
        | AnnotationType::Circle
        | AnnotationType::Polygon
        | AnnotationType::PolyLine
        | AnnotationType::Highlight
        | AnnotationType::Underline
        | AnnotationType::Squiggly
        | AnnotationType::StrikeOut
        | AnnotationType::Stamp
        | AnnotationType::Caret
        | AnnotationType::Ink
        | AnnotationType::Popup
        | AnnotationType::FileAttachment
        | AnnotationType::Sound
        | AnnotationType::Movie
        | AnnotationType::Screen
        | AnnotationType::PrinterMark
        | AnnotationType::TrapNet
        | AnnotationType::Watermark
        | AnnotationType::ThreeD
        | AnnotationType::Redact
        | AnnotationType::Unknown => Err(Error::UnsupportedAnnotationType(
            record.annotation_type.pdf_name().to_string(),
        )),
    }
}

/// Section container sized to the content box and carrying the border.
pub(crate) fn bordered_container(style: &ComputedStyle) -> Node {
    let mut node =
        Node::new(ElementKind::Section).with_size(style.content_width, style.content_height);

    if let Some(border) = &style.border {
        node.set_style("border-width", format!("{}px", border.width));
        if let Some(radius) = &border.radius {
            node.set_style("border-radius", radius.to_string());
        }
        match border.line {
            Some(BorderLine::Solid) => node.set_style("border-style", "solid"),
            Some(BorderLine::Dashed) => node.set_style("border-style", "dashed"),
            Some(BorderLine::Underline) => node.set_style("border-bottom-style", "solid"),
            None => {},
        }
        node.set_style("border-color", border.color.to_string());
    }
    node
}
