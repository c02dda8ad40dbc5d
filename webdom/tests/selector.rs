use webdom::{Document, Element, NodeId, Selector, SelectorError};

struct Page {
    doc: Document,
    select: NodeId,
    zelect: NodeId,
    red: NodeId,
    blue: NodeId,
}

fn page() -> Page {
    let mut doc = Document::new();
    let body = doc.body();
    let select = doc
        .create_child(body, Element::new("select").attr("data-component", "select"))
        .unwrap();
    let zelect = doc
        .create_child(body, Element::new("div").class("zelect zelector").attr("role", "select"))
        .unwrap();
    let list = doc
        .create_child(zelect, Element::new("nav").id("zelect-list--zelector"))
        .unwrap();
    let red = doc
        .create_child(
            list,
            Element::new("span")
                .id("zelect-list-item--1")
                .attr("role", "option")
                .attr("data-value", "1"),
        )
        .unwrap();
    let blue = doc
        .create_child(
            list,
            Element::new("span")
                .id("zelect-list-item--2")
                .attr("role", "option")
                .attr("data-value", "2"),
        )
        .unwrap();

    Page {
        doc,
        select,
        zelect,
        red,
        blue,
    }
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_errors() {
    assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
    assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
    assert_eq!(Selector::parse("div,"), Err(SelectorError::UnexpectedEnd));
    assert_eq!(
        Selector::parse("[role"),
        Err(SelectorError::UnterminatedAttribute)
    );
    assert_eq!(
        Selector::parse("[role=\"option]"),
        Err(SelectorError::UnterminatedString)
    );
    assert_eq!(
        Selector::parse("div > span"),
        Err(SelectorError::Unexpected {
            found: '>',
            position: 4
        })
    );
}

#[test]
fn test_parse_accepts_supported_forms() {
    for input in [
        "*",
        "div",
        "#id",
        ".a.b",
        "[data-value]",
        "[data-value=1]",
        "[data-component='select']",
        "span[role=\"option\"]",
        "nav span",
        "div, span",
    ] {
        assert!(input.parse::<Selector>().is_ok(), "failed to parse {input}");
    }
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_query_selector_by_attribute() {
    let page = page();
    assert_eq!(
        page.doc
            .query_selector("[data-component=\"select\"]")
            .unwrap(),
        Some(page.select)
    );
    assert_eq!(page.doc.query_selector("select.missing").unwrap(), None);
}

#[test]
fn test_query_selector_all_in_tree_order() {
    let page = page();
    assert_eq!(
        page.doc
            .query_selector_all_in(page.zelect, "span[role=\"option\"]")
            .unwrap(),
        vec![page.red, page.blue]
    );
    assert_eq!(
        page.doc.query_selector_all("select, span").unwrap(),
        vec![page.select, page.red, page.blue]
    );
}

#[test]
fn test_descendant_combinator() {
    let page = page();
    assert_eq!(
        page.doc.query_selector(".zelect nav #zelect-list-item--2").unwrap(),
        Some(page.blue)
    );
    assert_eq!(page.doc.query_selector("select span").unwrap(), None);
}

#[test]
fn test_query_selector_in_excludes_scope() {
    let page = page();
    assert_eq!(
        page.doc.query_selector_in(page.zelect, ".zelect").unwrap(),
        None
    );
}

#[test]
fn test_closest_is_inclusive() {
    let page = page();
    assert_eq!(
        page.doc.closest(page.red, ".zelect").unwrap(),
        Some(page.zelect)
    );
    assert_eq!(
        page.doc.closest(page.zelect, ".zelect").unwrap(),
        Some(page.zelect)
    );
    assert_eq!(page.doc.closest(page.select, ".zelect").unwrap(), None);
}

#[test]
fn test_matches_class_list() {
    let page = page();
    assert!(page.doc.matches(page.zelect, "div.zelect.zelector").unwrap());
    assert!(page.doc.matches(page.zelect, "[class=\"zelect zelector\"]").unwrap());
    assert!(!page.doc.matches(page.zelect, ".is-active").unwrap());
}

#[test]
fn test_invalid_selector_surfaces_error() {
    let page = page();
    assert!(matches!(
        page.doc.query_selector("#"),
        Err(webdom::DomError::Selector(SelectorError::UnexpectedEnd))
    ));
}
