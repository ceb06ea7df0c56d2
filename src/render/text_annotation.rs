//! Text annotations: a note icon with a popup holding the title and body.
//!
//! The popup starts hidden. Hovering the icon shows it, leaving hides it,
//! and a click on the icon pins it open until the icon or the popup body is
//! clicked again. See [`crate::popup`] for the state machine.

use lazy_static::lazy_static;
use regex::Regex;

use super::{bordered_container, AnnotationElement};
use crate::config::RenderConfig;
use crate::fonts::FontResolver;
use crate::node::{ElementKind, Node, PointerEvent};
use crate::popup::{PopupAction, PopupController};
use crate::record::AnnotationRecord;
use crate::style::{compute_style, Rgb, BACKGROUND_ENLIGHT};
use crate::widgets::TextStyle;

/// Class name of the text annotation container.
pub const TEXT_ANNOTATION_CLASS: &str = "annotText";

/// Class name of the element positioning the popup next to the icon.
pub const TEXT_CONTENT_WRAPPER_CLASS: &str = "annotTextContentWrapper";

/// Class name of the popup body.
pub const TEXT_CONTENT_CLASS: &str = "annotTextContent";

/// Localization key of the icon's alternative text.
const ICON_L10N_ID: &str = "text_annotation_type";

/// Horizontal gap between the icon's right edge and the popup.
const POPUP_OFFSET_X: f32 = 5.0;

/// Vertical offset of the popup relative to the icon's top edge.
const POPUP_OFFSET_Y: f32 = -10.0;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n?|\n").expect("valid line break regex");
}

pub(super) fn build(
    record: &AnnotationRecord,
    fonts: &dyn FontResolver,
    config: &RenderConfig,
) -> AnnotationElement {
    let rect = record.rect.with_min_size(config.min_annotation_size);
    let style = compute_style(&rect, &record.border_style, record.color);
    let has_note = !record.title.is_empty() || !record.content.is_empty();

    let l10n_args = serde_json::json!({ "type": record.name }).to_string();
    let mut icon = Node::new(ElementKind::Image)
        .with_size(style.content_width, style.content_height)
        .with_attr("src", config.icon_path(&record.name))
        .with_attr("alt", "[{{type}} Annotation]")
        .with_attr("data-l10n-id", ICON_L10N_ID)
        .with_attr("data-l10n-args", l10n_args);

    let mut body = Node::new(ElementKind::Container)
        .with_class(TEXT_CONTENT_CLASS)
        .with_attr("hidden", "");
    if record.has_bg_color {
        match record.color {
            Some(color) => {
                let background = Rgb::enlightened(color, BACKGROUND_ENLIGHT);
                body.set_style("background-color", background.to_string())
            },
            None => log::debug!("Text annotation asks for a background but has no color"),
        }
    }
    TextStyle::from_record(record, fonts).apply(&mut body);

    body.push_child(Node::new(ElementKind::Heading).with_text(record.title.clone()));
    let mut paragraph = Node::new(ElementKind::Paragraph);
    if !record.content.is_empty() {
        paragraph.push_child(content_lines(&record.content));
    }
    body.push_child(paragraph);

    if has_note {
        icon = icon
            .with_listener(PointerEvent::Click, PopupAction::Toggle)
            .with_listener(PointerEvent::Enter, PopupAction::Show)
            .with_listener(PointerEvent::Leave, PopupAction::Hide);
        body = body.with_listener(PointerEvent::Click, PopupAction::Dismiss);
    }

    let wrapper = Node::new(ElementKind::Container)
        .with_class(TEXT_CONTENT_WRAPPER_CLASS)
        .with_style("left", format!("{}px", (rect.width() + POPUP_OFFSET_X).floor()))
        .with_style("top", format!("{}px", POPUP_OFFSET_Y))
        .with_child(body);

    let root = bordered_container(&style)
        .with_class(TEXT_ANNOTATION_CLASS)
        .with_child(icon)
        .with_child(wrapper);

    if has_note {
        AnnotationElement::with_popup(root, PopupController::new(config.base_z_index))
    } else {
        AnnotationElement::new(root)
    }
}

/// Split note text into lines separated by line breaks.
fn content_lines(content: &str) -> Node {
    let mut span = Node::new(ElementKind::Span);
    for (i, line) in LINE_BREAK.split(content).enumerate() {
        if i > 0 {
            span.push_child(Node::new(ElementKind::LineBreak));
        }
        span.push_child(Node::new(ElementKind::Span).with_text(line));
    }
    span
}
