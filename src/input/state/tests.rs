use super::*;
use crate::draw::Shape;
use crate::geo::{Feature, GeoPoint};
use crate::input::Tool;

fn create_test_editor(tool: Tool) -> EditorState {
    EditorState::with_defaults(tool, 120)
}

fn p(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon)
}

/// Clicks two rectangle corners, leaving the editor in the title prompt.
fn editor_with_pending_rectangle() -> EditorState {
    let mut editor = create_test_editor(Tool::Rect);
    editor.on_map_click(p(33.70, 73.00));
    editor.on_map_click(p(33.72, 73.04));
    assert!(editor.is_titling());
    editor
}

#[test]
fn rectangle_two_clicks_open_the_title_prompt() {
    let mut editor = create_test_editor(Tool::Rect);

    editor.on_map_click(p(33.70, 73.00));
    assert!(editor.is_sketching());
    assert!(editor.collection.is_empty());

    editor.on_map_click(p(33.72, 73.04));
    assert!(editor.is_titling());
    assert_eq!(editor.collection.len(), 1);

    let subject = editor.pending_subject().unwrap();
    let drawn = editor.collection.get(subject).unwrap();
    assert_eq!(
        drawn.shape,
        Shape::Rectangle {
            a: p(33.70, 73.00),
            b: p(33.72, 73.04),
        }
    );
    assert_eq!(drawn.title, None);
}

#[test]
fn rectangle_ignores_zero_area_second_corner() {
    let mut editor = create_test_editor(Tool::Rect);
    editor.on_map_click(p(33.70, 73.00));
    editor.on_map_click(p(33.70, 73.00));

    assert!(editor.is_sketching());
    assert!(editor.collection.is_empty());
}

#[test]
fn polygon_clicks_then_close_commit_the_shape() {
    let mut editor = create_test_editor(Tool::Polygon);
    editor.on_map_click(p(33.70, 73.00));
    editor.on_map_click(p(33.72, 73.00));
    editor.on_map_click(p(33.72, 73.03));
    assert!(editor.can_close_polygon());

    editor.close_polygon();
    assert!(editor.is_titling());
    assert_eq!(editor.collection.len(), 1);

    let subject = editor.pending_subject().unwrap();
    match &editor.collection.get(subject).unwrap().shape {
        Shape::Polygon { vertices } => assert_eq!(vertices.len(), 3),
        other => panic!("expected polygon, got {other:?}"),
    }
}

#[test]
fn polygon_close_needs_three_distinct_vertices() {
    let mut editor = create_test_editor(Tool::Polygon);
    editor.on_map_click(p(33.70, 73.00));
    editor.on_map_click(p(33.72, 73.00));
    assert!(!editor.can_close_polygon());

    editor.close_polygon();
    assert!(editor.is_sketching());
    assert!(editor.collection.is_empty());
}

#[test]
fn polygon_consecutive_duplicate_clicks_are_ignored() {
    let mut editor = create_test_editor(Tool::Polygon);
    editor.on_map_click(p(33.70, 73.00));
    editor.on_map_click(p(33.70, 73.00));
    editor.on_map_click(p(33.70, 73.00));

    match &editor.phase {
        DrawPhase::Sketching { points, .. } => assert_eq!(points.len(), 1),
        other => panic!("expected sketch in progress, got {other:?}"),
    }
}

#[test]
fn polygon_close_drops_trailing_double_click_vertices() {
    let mut editor = create_test_editor(Tool::Polygon);
    editor.phase = DrawPhase::Sketching {
        tool: Tool::Polygon,
        points: vec![
            p(33.70, 73.00),
            p(33.72, 73.00),
            p(33.72, 73.03),
            p(33.72, 73.03),
        ],
    };

    editor.close_polygon();
    assert!(editor.is_titling());

    let subject = editor.pending_subject().unwrap();
    match &editor.collection.get(subject).unwrap().shape {
        Shape::Polygon { vertices } => assert_eq!(vertices.len(), 3),
        other => panic!("expected polygon, got {other:?}"),
    }
}

#[test]
fn submit_stores_title_and_geographic_property() {
    let mut editor = editor_with_pending_rectangle();
    let subject = editor.pending_subject().unwrap();

    editor.title_buffer_mut().unwrap().push_str("Park Zone");
    assert!(editor.can_submit());
    assert!(editor.submit_title());

    assert!(matches!(editor.phase, DrawPhase::Idle));
    let drawn = editor.collection.get(subject).unwrap();
    assert_eq!(drawn.title.as_deref(), Some("Park Zone"));

    let feature = Feature::from_shape(&drawn.shape, drawn.title.as_deref()).unwrap();
    assert_eq!(feature.title(), Some("Park Zone"));
}

#[test]
fn submit_keeps_surrounding_whitespace_as_typed() {
    let mut editor = editor_with_pending_rectangle();
    let subject = editor.pending_subject().unwrap();

    editor.title_buffer_mut().unwrap().push_str("  Park Zone ");
    assert!(editor.can_submit());
    assert!(editor.submit_title());

    // Trimming is validation only; the stored title is the raw text
    assert_eq!(
        editor.collection.get(subject).unwrap().title.as_deref(),
        Some("  Park Zone ")
    );
}

#[test]
fn submit_rejects_whitespace_only_titles() {
    let mut editor = editor_with_pending_rectangle();
    let subject = editor.pending_subject().unwrap();

    editor.title_buffer_mut().unwrap().push_str("   \t");
    assert!(!editor.can_submit());
    assert!(!editor.submit_title());

    // Still prompting, shape still present and untitled
    assert!(editor.is_titling());
    assert!(editor.collection.contains(subject));
    assert_eq!(editor.collection.get(subject).unwrap().title, None);
}

#[test]
fn submit_rejects_empty_buffer() {
    let mut editor = editor_with_pending_rectangle();

    assert!(!editor.can_submit());
    assert!(!editor.submit_title());
    assert!(editor.is_titling());
}

#[test]
fn cancel_discards_the_pending_shape() {
    let mut editor = create_test_editor(Tool::Polygon);
    editor.on_map_click(p(33.70, 73.00));
    editor.on_map_click(p(33.72, 73.00));
    editor.on_map_click(p(33.72, 73.03));
    editor.close_polygon();

    let subject = editor.pending_subject().unwrap();
    editor.cancel_title();

    assert!(matches!(editor.phase, DrawPhase::Idle));
    assert!(!editor.collection.contains(subject));
    assert!(editor.collection.is_empty());
}

#[test]
fn map_clicks_are_ignored_while_titling() {
    let mut editor = editor_with_pending_rectangle();

    editor.on_map_click(p(34.00, 73.50));

    assert!(editor.is_titling());
    assert_eq!(editor.collection.len(), 1);
}

#[test]
fn tool_switch_is_ignored_while_titling() {
    let mut editor = editor_with_pending_rectangle();
    assert_eq!(editor.active_tool, Tool::Rect);

    editor.select_tool(Tool::Polygon);

    assert_eq!(editor.active_tool, Tool::Rect);
    assert!(editor.is_titling());
}

#[test]
fn tool_switch_discards_an_outline_in_progress() {
    let mut editor = create_test_editor(Tool::Polygon);
    editor.on_map_click(p(33.70, 73.00));
    editor.on_map_click(p(33.72, 73.00));

    editor.select_tool(Tool::Rect);

    assert!(matches!(editor.phase, DrawPhase::Idle));
    assert_eq!(editor.active_tool, Tool::Rect);
    assert!(editor.collection.is_empty());
}

#[test]
fn cancel_sketch_returns_to_idle_without_a_shape() {
    let mut editor = create_test_editor(Tool::Rect);
    editor.on_map_click(p(33.70, 73.00));

    editor.cancel_sketch();

    assert!(matches!(editor.phase, DrawPhase::Idle));
    assert!(editor.collection.is_empty());
}

#[test]
fn title_buffer_respects_the_length_cap() {
    let mut editor = EditorState::with_defaults(Tool::Rect, 5);
    editor.on_map_click(p(33.70, 73.00));
    editor.on_map_click(p(33.72, 73.04));

    editor.title_buffer_mut().unwrap().push_str("abcdefghij");
    editor.enforce_title_cap();

    assert_eq!(editor.title_buffer_mut().unwrap().as_str(), "abcde");
}

#[test]
fn submit_drops_the_session_when_the_subject_vanished() {
    let mut editor = editor_with_pending_rectangle();
    let subject = editor.pending_subject().unwrap();

    editor.collection.remove(subject);
    editor.title_buffer_mut().unwrap().push_str("orphan");

    assert!(!editor.submit_title());
    assert!(matches!(editor.phase, DrawPhase::Idle));
}
