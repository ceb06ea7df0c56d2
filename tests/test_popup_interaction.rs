//! Integration tests for text annotation popups.
//!
//! Pointer events are delivered to a rendered element and the tests check
//! both the state machine and the element tree it updates.

use pdf_annotation_layer::geometry::Rect;
use pdf_annotation_layer::node::PointerEvent;
use pdf_annotation_layer::popup::{PopupController, PopupState};
use pdf_annotation_layer::render::{
    AnnotationElement, AnnotationRenderer, PopupTarget, RenderMode, TEXT_CONTENT_CLASS,
};
use pdf_annotation_layer::{AnnotationRecord, NoFonts, RenderConfig};

fn note(config: RenderConfig) -> AnnotationElement {
    let _ = env_logger::builder().is_test(true).try_init();
    let record = AnnotationRecord::text(
        Rect::from_points(100.0, 100.0, 120.0, 120.0),
        "Reviewer",
        "First line\nSecond line",
    );
    AnnotationRenderer::new(config)
        .render(&record, &NoFonts, RenderMode::Static)
        .unwrap()
        .unwrap()
}

fn body_hidden(element: &AnnotationElement) -> bool {
    element
        .root()
        .find_by_class(TEXT_CONTENT_CLASS)
        .unwrap()
        .has_attr("hidden")
}

#[test]
fn test_hover_shows_and_hides() {
    let mut element = note(RenderConfig::default());
    assert!(body_hidden(&element));

    let t = element.dispatch(PopupTarget::Icon, PointerEvent::Enter).unwrap();
    assert_eq!(t.to, PopupState::Visible);
    assert!(!body_hidden(&element));
    assert_eq!(element.root().style("z-index"), Some("1"));

    let t = element.dispatch(PopupTarget::Icon, PointerEvent::Leave).unwrap();
    assert_eq!(t.to, PopupState::Hidden);
    assert!(body_hidden(&element));
    assert_eq!(element.root().style("z-index"), Some("0"));
}

#[test]
fn test_pinned_popup_survives_leave() {
    let mut element = note(RenderConfig::default());
    element.dispatch(PopupTarget::Icon, PointerEvent::Click);
    assert!(element.popup().unwrap().is_pinned());

    assert!(element.dispatch(PopupTarget::Icon, PointerEvent::Leave).is_none());
    assert!(!body_hidden(&element));

    // Clicking the body dismisses even a pinned popup.
    let t = element.dispatch(PopupTarget::Content, PointerEvent::Click).unwrap();
    assert_eq!(t.to, PopupState::Hidden);
    assert!(body_hidden(&element));
}

/// enter, leave, click, content click: two stacking ups and two downs.
#[test]
fn test_event_sequence_nets_to_zero() {
    let mut element = note(RenderConfig::default().with_base_z_index(5));
    let steps = [
        (PopupTarget::Icon, PointerEvent::Enter, PopupState::Visible),
        (PopupTarget::Icon, PointerEvent::Leave, PopupState::Hidden),
        (PopupTarget::Icon, PointerEvent::Click, PopupState::Pinned),
        (PopupTarget::Content, PointerEvent::Click, PopupState::Hidden),
    ];

    let mut ups = 0;
    let mut downs = 0;
    for (target, event, expected) in steps {
        let t = element.dispatch(target, event).unwrap();
        assert_eq!(t.to, expected);
        match t.stacking_delta {
            1 => ups += 1,
            -1 => downs += 1,
            other => panic!("unexpected stacking change {}", other),
        }
    }
    assert_eq!((ups, downs), (2, 2));
    assert_eq!(element.popup().unwrap().z_index(), 5);
    assert_eq!(element.root().style("z-index"), Some("5"));
}

#[test]
fn test_click_while_hovered_pins_without_stacking_change() {
    let mut controller = PopupController::default();
    controller.pointer_enter();
    let t = controller.click().unwrap();
    assert_eq!(t.to, PopupState::Pinned);
    assert_eq!(t.stacking_delta, 0);
    assert_eq!(controller.z_index(), 1);
}

#[test]
fn test_events_without_listener_do_nothing() {
    let mut element = note(RenderConfig::default());
    assert!(element.dispatch(PopupTarget::Content, PointerEvent::Enter).is_none());
    assert_eq!(element.popup().unwrap().state(), PopupState::Hidden);
}

#[test]
fn test_empty_note_is_inert() {
    let record = AnnotationRecord::text(Rect::from_points(0.0, 0.0, 20.0, 20.0), "", "");
    let mut element = AnnotationRenderer::default()
        .render(&record, &NoFonts, RenderMode::Interactive)
        .unwrap()
        .unwrap();
    assert!(element.popup().is_none());
    assert!(element.dispatch(PopupTarget::Icon, PointerEvent::Click).is_none());
    assert!(body_hidden(&element));
}
