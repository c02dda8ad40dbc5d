mod common;

use common::{COLORS, container, is_open, items, mounted, page, selected_values};
use webdom::{Document, Element, EventTarget};
use zelect::markup::HOVER_CLASS;
use zelect::swap::MOUNT_EVENT;
use zelect::{Openness, Zelect, ZelectOptions, dismiss};

fn two_widgets() -> (Document, Zelect, Zelect) {
    let mut doc = Document::new();
    let body = doc.body();
    common::native_select(&mut doc, body, "first", COLORS);
    common::native_select(&mut doc, body, "second", &[("x", "X"), ("y", "Y")]);
    doc.create_child(body, Element::new("p").id("outside")).unwrap();

    let first = Zelect::new(ZelectOptions::new().class_name("first"), Some("#first"));
    let second = Zelect::new(ZelectOptions::new().class_name("second"), Some("#second"));
    first.init(&mut doc);
    second.init(&mut doc);
    doc.finish_parsing();
    (doc, first, second)
}

fn outside(doc: &Document) -> webdom::NodeId {
    doc.query_selector("#outside").unwrap().unwrap()
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_init_waits_for_document_ready() {
    let (mut doc, _, native) = page(COLORS);
    let zelect = Zelect::new(ZelectOptions::new(), None);
    zelect.init(&mut doc);

    assert!(doc.is_connected(native));
    assert_eq!(zelect.container(), None);

    doc.finish_parsing();

    assert!(!doc.contains_node(native));
    assert!(zelect.container().is_some());
    assert!(zelect.is_wired());
}

#[test]
fn test_init_on_ready_document_mounts_immediately() {
    let (mut doc, _, _) = page(COLORS);
    doc.finish_loading();

    let zelect = Zelect::new(ZelectOptions::new(), None);
    zelect.init(&mut doc);

    assert!(zelect.is_wired());
}

#[test]
fn test_mount_without_init_is_static() {
    let (mut doc, _, _) = page(COLORS);
    let zelect = Zelect::new(ZelectOptions::new(), None);
    zelect.mount(&mut doc).unwrap();

    doc.click(container(&zelect));

    assert!(!zelect.is_wired());
    assert!(!is_open(&doc, &zelect));
}

// ============================================================================
// Toggle
// ============================================================================

#[test]
fn test_container_click_toggles() {
    let (mut doc, zelect) = mounted(COLORS);
    let container = container(&zelect);
    assert!(!is_open(&doc, &zelect));

    doc.click(container);
    assert!(is_open(&doc, &zelect));
    assert_eq!(zelect.state().unwrap().openness, Openness::Open);

    doc.click(container);
    assert!(!is_open(&doc, &zelect));
    assert_eq!(zelect.state().unwrap().openness, Openness::Closed);
}

#[test]
fn test_even_number_of_toggles_is_identity() {
    let (mut doc, zelect) = mounted(COLORS);
    let placeholder = zelect.instance().unwrap().markup().placeholder;

    for _ in 0..3 {
        let before = is_open(&doc, &zelect);
        doc.click(placeholder);
        doc.click(placeholder);
        assert_eq!(is_open(&doc, &zelect), before);
    }
}

#[test]
fn test_hover_does_not_toggle() {
    let (mut doc, zelect) = mounted(COLORS);
    doc.pointer_move(Some(container(&zelect)));
    doc.pointer_move(Some(items(&zelect)[0]));
    doc.pointer_move(None);
    assert!(!is_open(&doc, &zelect));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_item_click_selects_item() {
    let (mut doc, zelect) = mounted(COLORS);
    let items = items(&zelect);

    doc.click(items[1]);

    assert_eq!(selected_values(&doc, &zelect), vec!["2"]);
    assert_eq!(zelect.state().unwrap().selected, "2");
}

#[test]
fn test_selection_stays_unique() {
    let options = [("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")];
    let (mut doc, zelect) = mounted(&options);
    let items = items(&zelect);

    for &index in &[3, 1, 1, 0, 2, 3, 0, 2] {
        doc.click(items[index]);
        let selected = selected_values(&doc, &zelect);
        assert_eq!(selected, vec![options[index].0]);
    }
}

#[test]
fn test_item_click_bubbles_to_toggle() {
    let (mut doc, zelect) = mounted(COLORS);
    doc.click(container(&zelect));
    assert!(is_open(&doc, &zelect));

    doc.click(items(&zelect)[1]);

    assert!(!is_open(&doc, &zelect));
    assert_eq!(selected_values(&doc, &zelect), vec!["2"]);
}

#[test]
fn test_selection_emits_no_change_notification() {
    let (mut doc, zelect) = mounted(COLORS);
    let changes = std::rc::Rc::new(std::cell::Cell::new(0));
    let sink = std::rc::Rc::clone(&changes);
    doc.add_event_listener(EventTarget::Document, "change", move |_, _| {
        sink.set(sink.get() + 1);
    });

    doc.click(items(&zelect)[1]);

    assert_eq!(changes.get(), 0);
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_hover_class_tracks_pointer() {
    let (mut doc, zelect) = mounted(COLORS);
    let items = items(&zelect);
    let hovered = |doc: &Document| -> Vec<bool> {
        items
            .iter()
            .map(|&node| doc.get(node).unwrap().has_class(HOVER_CLASS))
            .collect()
    };

    doc.pointer_move(Some(items[0]));
    assert_eq!(hovered(&doc), vec![true, false]);

    doc.pointer_move(Some(items[1]));
    assert_eq!(hovered(&doc), vec![false, true]);

    doc.pointer_move(Some(zelect.instance().unwrap().markup().list));
    assert_eq!(hovered(&doc), vec![false, false]);

    doc.pointer_move(Some(items[0]));
    doc.pointer_move(None);
    assert_eq!(hovered(&doc), vec![false, false]);
}

#[test]
fn test_hover_does_not_change_selection() {
    let (mut doc, zelect) = mounted(COLORS);
    doc.pointer_move(Some(items(&zelect)[1]));
    assert_eq!(selected_values(&doc, &zelect), vec!["1"]);
}

// ============================================================================
// Dismissal
// ============================================================================

#[test]
fn test_outside_click_closes() {
    let (mut doc, zelect) = mounted(COLORS);
    doc.click(container(&zelect));
    assert!(is_open(&doc, &zelect));

    let submit = doc.query_selector("#submit").unwrap().unwrap();
    doc.click(submit);

    assert!(!is_open(&doc, &zelect));
}

#[test]
fn test_click_on_body_closes() {
    let (mut doc, zelect) = mounted(COLORS);
    doc.click(container(&zelect));
    let body = doc.body();
    doc.click(body);
    assert!(!is_open(&doc, &zelect));
}

#[test]
fn test_inside_click_is_not_dismissed() {
    let (mut doc, zelect) = mounted(COLORS);
    let items = items(&zelect);

    // Three activations inside: open, close, open. Dismissal must not interfere.
    doc.click(container(&zelect));
    doc.click(items[0]);
    doc.click(items[1]);

    assert!(is_open(&doc, &zelect));
}

#[test]
fn test_outside_click_keeps_closed_widget_closed() {
    let (mut doc, zelect) = mounted(COLORS);
    let submit = doc.query_selector("#submit").unwrap().unwrap();
    doc.click(submit);
    assert!(!is_open(&doc, &zelect));
}

#[test]
fn test_single_document_click_listener() {
    let (doc, _, _) = two_widgets();
    assert_eq!(doc.listener_count(EventTarget::Document, "click"), 1);
    assert_eq!(dismiss::registered(&doc), 2);
}

// ============================================================================
// Multiple instances
// ============================================================================

#[test]
fn test_instances_are_scoped() {
    let (mut doc, first, second) = two_widgets();
    let first_items = items(&first);

    doc.click(first_items[1]);

    assert_eq!(selected_values(&doc, &first), vec!["2"]);
    assert_eq!(selected_values(&doc, &second), vec!["x"]);
    assert!(is_open(&doc, &first));
    assert!(!is_open(&doc, &second));
}

#[test]
fn test_opening_one_widget_closes_the_other() {
    let (mut doc, first, second) = two_widgets();

    doc.click(container(&first));
    assert!(is_open(&doc, &first));

    doc.click(container(&second));
    assert!(!is_open(&doc, &first));
    assert!(is_open(&doc, &second));

    let outside = outside(&doc);
    doc.click(outside);
    assert!(!is_open(&doc, &first));
    assert!(!is_open(&doc, &second));
}

#[test]
fn test_removed_widget_is_pruned() {
    let (mut doc, first, second) = two_widgets();
    doc.remove(container(&first));

    let outside = outside(&doc);
    doc.click(outside);

    assert_eq!(dismiss::registered(&doc), 1);
    doc.click(container(&second));
    assert!(is_open(&doc, &second));
}

// ============================================================================
// Cancelled mount
// ============================================================================

#[test]
fn test_prevented_mount_skips_wiring() {
    let (mut doc, form, _) = page(COLORS);
    doc.add_event_listener(form, MOUNT_EVENT, |_, event| event.prevent_default());

    let zelect = Zelect::new(ZelectOptions::new(), None);
    zelect.init(&mut doc);
    doc.finish_parsing();

    assert!(zelect.container().is_some());
    assert!(!zelect.is_wired());
    assert_eq!(dismiss::registered(&doc), 0);

    doc.click(container(&zelect));
    assert!(!is_open(&doc, &zelect));
}

#[test]
fn test_stopped_mount_skips_wiring() {
    let (mut doc, form, _) = page(COLORS);
    doc.add_event_listener(form, MOUNT_EVENT, |_, event| event.stop_propagation());

    let zelect = Zelect::new(ZelectOptions::new(), None);
    zelect.init(&mut doc);
    doc.finish_parsing();

    assert!(!zelect.is_wired());
    doc.click(items(&zelect)[1]);
    assert_eq!(selected_values(&doc, &zelect), vec!["1"]);
}

#[test]
fn test_foreign_mount_event_is_ignored() {
    let (mut doc, form, _) = page(COLORS);
    let zelect = Zelect::new(ZelectOptions::new(), None);
    zelect.init(&mut doc);

    doc.dispatch(
        form,
        webdom::Event::with_init(MOUNT_EVENT, webdom::EventInit::bubbling()),
    );

    assert!(!zelect.is_wired());
}
