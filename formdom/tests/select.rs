use formdom::{Document, ElementSpec};

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_options_are_direct_option_children() {
    let mut doc = Document::new();
    let select = doc
        .mount(
            doc.body(),
            ElementSpec::select()
                .multiple()
                .child(ElementSpec::option("1", "One"))
                .child(ElementSpec::option("2", "Two").selected(true))
                .child(ElementSpec::new("hr")),
        )
        .unwrap();

    let options = doc.options(select);
    assert_eq!(options.len(), 2);
    assert_eq!(doc.option_value(options[0]), "1");
    assert_eq!(doc.option_label(options[1]), "Two");
    assert_eq!(doc.selected_options(select), vec![options[1]]);
}

#[test]
fn test_options_of_non_select_is_empty() {
    let mut doc = Document::new();
    let div = doc
        .mount(doc.body(), ElementSpec::div().child(ElementSpec::option("1", "One")))
        .unwrap();

    assert!(doc.options(div).is_empty());
}

#[test]
fn test_option_value_falls_back_to_label() {
    let mut doc = Document::new();
    let option = doc
        .mount(doc.body(), ElementSpec::new("option").text("  Plain "))
        .unwrap();

    assert_eq!(doc.option_value(option), "Plain");
}

// ============================================================================
// Selectedness
// ============================================================================

#[test]
fn test_single_select_keeps_one_selected() {
    let mut doc = Document::new();
    let select = doc
        .mount(
            doc.body(),
            ElementSpec::select()
                .child(ElementSpec::option("a", "A"))
                .child(ElementSpec::option("b", "B")),
        )
        .unwrap();
    let options = doc.options(select);

    doc.set_selected(options[0], true).unwrap();
    doc.set_selected(options[1], true).unwrap();

    assert_eq!(doc.selected_options(select), vec![options[1]]);
}

#[test]
fn test_multiple_select_keeps_all_selected() {
    let mut doc = Document::new();
    let select = doc
        .mount(
            doc.body(),
            ElementSpec::select()
                .multiple()
                .child(ElementSpec::option("a", "A"))
                .child(ElementSpec::option("b", "B")),
        )
        .unwrap();
    let options = doc.options(select);

    doc.set_selected(options[0], true).unwrap();
    doc.set_selected(options[1], true).unwrap();

    assert_eq!(doc.selected_options(select), options);
}

#[test]
fn test_clone_resets_selectedness_to_default() {
    let mut doc = Document::new();
    let select = doc
        .mount(
            doc.body(),
            ElementSpec::select()
                .multiple()
                .child(ElementSpec::option("a", "A"))
                .child(ElementSpec::option("b", "B").attr("selected", "")),
        )
        .unwrap();
    let options = doc.options(select);
    doc.set_selected(options[0], true).unwrap();
    doc.set_selected(options[1], false).unwrap();

    let a = doc.clone_node(options[0], true).unwrap();
    let b = doc.clone_node(options[1], true).unwrap();

    assert!(!doc.is_selected(a));
    assert!(doc.is_selected(b));
}
