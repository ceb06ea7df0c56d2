//! Integration tests for HTML output of rendered annotations.

use pdf_annotation_layer::converters::HtmlRenderer;
use pdf_annotation_layer::{
    AnnotationRecord, AnnotationRenderer, FieldType, NoFonts, Rect, RenderConfig, RenderMode,
};

fn html(record: &AnnotationRecord, mode: RenderMode, config: RenderConfig) -> String {
    let _ = env_logger::builder().is_test(true).try_init();
    let element = AnnotationRenderer::new(config)
        .render(record, &NoFonts, mode)
        .unwrap()
        .expect("element");
    HtmlRenderer::new().render(element.root())
}

#[test]
fn test_link_html() {
    let rect = Rect::from_points(0.0, 0.0, 50.0, 12.0);
    let record = AnnotationRecord::link(rect, "https://example.com/?a=1&b=2");
    let out = html(
        &record,
        RenderMode::Static,
        RenderConfig::default().with_external_links_in_new_window(true),
    );
    assert_eq!(
        out,
        concat!(
            r#"<section class="annotLink" style="width: 48px; height: 10px; border-width: 1px; "#,
            r#"border-style: solid; border-color: rgb(0, 0, 0);">"#,
            r#"<a href="https://example.com/?a=1&amp;b=2" "#,
            r#"title="https://example.com/?a=1&amp;b=2" "#,
            r#"target="_blank"></a></section>"#,
        )
    );
}

#[test]
fn test_field_value_is_escaped() {
    let record = AnnotationRecord::widget(FieldType::Text, Rect::from_points(0.0, 0.0, 100.0, 20.0))
        .with_value("<b>\"bold\"</b>");

    let interactive = html(&record, RenderMode::Interactive, RenderConfig::default());
    assert!(interactive.contains(r#"value="&lt;b&gt;&quot;bold&quot;&lt;/b&gt;""#));
    assert!(!interactive.contains("<b>"));

    let static_ = html(&record, RenderMode::Static, RenderConfig::default());
    assert!(static_.contains("&lt;b&gt;&quot;bold&quot;&lt;/b&gt;</div>"));
    assert!(!static_.contains("widgetContainer"));
}

#[test]
fn test_note_html() {
    let record = AnnotationRecord::text(Rect::from_points(0.0, 0.0, 20.0, 20.0), "Ann", "a\r\nb")
        .with_icon("Comment");
    let out = html(&record, RenderMode::Static, RenderConfig::default());

    assert!(out.starts_with(r#"<section class="annotText""#));
    assert!(out.contains(r#"src="./images/annotation-comment.svg""#));
    assert!(out.contains(r#"data-l10n-args="{&quot;type&quot;:&quot;Comment&quot;}""#));
    assert!(out.contains(r#"data-on-click="toggle""#));
    assert!(out.contains(r#"data-on-mouseover="show""#));
    assert!(out.contains(r#"<div class="annotTextContent" style="direction: ltr;" hidden"#));
    assert!(out.contains("<h1>Ann</h1>"));
    assert!(out.contains("<p><span><span>a</span><br><span>b</span></span></p>"));
}

#[test]
fn test_checkbox_html() {
    let rect = Rect::from_points(0.0, 0.0, 12.0, 12.0);
    let record = AnnotationRecord::widget(FieldType::Button, rect)
        .with_value("Yes")
        .with_field_flags(1);
    let out = html(&record, RenderMode::Interactive, RenderConfig::default());
    assert_eq!(
        out,
        concat!(
            r#"<div class="widgetContainer" style="width: 12px; height: 12px;">"#,
            r#"<label class="widgetControl" style="width: 12px; height: 12px; font-size: 11px;">"#,
            r#"<input type="checkbox" checked disabled><span></span></label></div>"#,
        )
    );
}
