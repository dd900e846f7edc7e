use std::cell::Cell;
use std::rc::Rc;

use formdom::{Document, DomError, ElementSpec};

// ============================================================================
// Click Dispatch
// ============================================================================

#[test]
fn test_click_runs_listeners_in_order() {
    let mut doc = Document::new();
    let button = doc.mount(doc.body(), ElementSpec::button("go")).unwrap();
    let log = doc.mount(doc.body(), ElementSpec::div().id("log")).unwrap();

    doc.add_click_listener(button, move |doc| {
        let text = doc.text_content(log);
        doc.set_text_content(log, format!("{text}1"))
    })
    .unwrap();
    doc.add_click_listener(button, move |doc| {
        let text = doc.text_content(log);
        doc.set_text_content(log, format!("{text}2"))
    })
    .unwrap();

    assert_eq!(doc.click(button), Ok(2));
    assert_eq!(doc.text_content(log), "12");
}

#[test]
fn test_click_without_listeners() {
    let mut doc = Document::new();
    let button = doc.mount(doc.body(), ElementSpec::button("go")).unwrap();

    assert_eq!(doc.click(button), Ok(0));
}

#[test]
fn test_disabled_element_ignores_clicks() {
    let mut doc = Document::new();
    let button = doc
        .mount(doc.body(), ElementSpec::button("go").disabled())
        .unwrap();
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    doc.add_click_listener(button, move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    })
    .unwrap();

    assert_eq!(doc.click(button), Ok(0));
    assert_eq!(hits.get(), 0);

    doc.remove_attribute(button, "disabled").unwrap();
    assert_eq!(doc.click(button), Ok(1));
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_failing_listener_does_not_stop_others() {
    let mut doc = Document::new();
    let button = doc.mount(doc.body(), ElementSpec::button("go")).unwrap();
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);

    doc.add_click_listener(button, |_| Err(DomError::UnsupportedSelector("x".into())))
        .unwrap();
    doc.add_click_listener(button, move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    })
    .unwrap();

    assert_eq!(doc.click(button), Ok(2));
    assert_eq!(hits.get(), 1);
}

// ============================================================================
// Keyed Listeners
// ============================================================================

#[test]
fn test_keyed_listener_replaces_previous() {
    let mut doc = Document::new();
    let button = doc.mount(doc.body(), ElementSpec::button("go")).unwrap();
    let hits = Rc::new(Cell::new(0));

    for _ in 0..3 {
        let counter = Rc::clone(&hits);
        doc.set_click_listener(button, "counter", move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        })
        .unwrap();
    }

    assert_eq!(doc.click_listener_count(button), 1);
    doc.click(button).unwrap();
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_remove_keyed_listener() {
    let mut doc = Document::new();
    let button = doc.mount(doc.body(), ElementSpec::button("go")).unwrap();

    assert!(!doc.set_click_listener(button, "k", |_| Ok(())).unwrap());
    assert!(doc.set_click_listener(button, "k", |_| Ok(())).unwrap());
    assert!(doc.remove_click_listener(button, "k"));
    assert!(!doc.remove_click_listener(button, "k"));
    assert_eq!(doc.click_listener_count(button), 0);
}

#[test]
fn test_cloned_nodes_have_no_listeners() {
    let mut doc = Document::new();
    let button = doc.mount(doc.body(), ElementSpec::button("go")).unwrap();
    doc.add_click_listener(button, |_| Ok(())).unwrap();

    let copy = doc.clone_node(button, true).unwrap();
    assert_eq!(doc.click_listener_count(copy), 0);
}
