#![allow(dead_code)]

use webdom::{Document, Element, NodeId};
use zelect::markup::{ACTIVE_CLASS, SELECTED_ATTR};
use zelect::{Zelect, ZelectOptions};

pub const COLORS: &[(&str, &str)] = &[("0", "Choose"), ("1", "Red"), ("2", "Blue")];

/// `body > form > [select[data-component=select] > option*, button#submit]`
pub fn page(options: &[(&str, &str)]) -> (Document, NodeId, NodeId) {
    let mut doc = Document::new();
    let body = doc.body();
    let form = doc.create_child(body, Element::new("form")).unwrap();
    let native = native_select(&mut doc, form, "select", options);
    doc.create_child(form, Element::new("button").id("submit").text("Go"))
        .unwrap();
    (doc, form, native)
}

pub fn native_select(
    doc: &mut Document,
    parent: NodeId,
    id: &str,
    options: &[(&str, &str)],
) -> NodeId {
    let native = doc
        .create_child(
            parent,
            Element::new("select")
                .id(id)
                .attr("data-component", "select")
                .attr("name", id),
        )
        .unwrap();
    for (value, text) in options {
        doc.create_child(
            native,
            Element::new("option").attr("value", *value).text(*text),
        )
        .unwrap();
    }
    native
}

/// Page with one widget, initialized and mounted.
pub fn mounted(options: &[(&str, &str)]) -> (Document, Zelect) {
    let (mut doc, _, _) = page(options);
    let zelect = Zelect::new(ZelectOptions::new().class_name("zelector"), None);
    zelect.init(&mut doc);
    doc.finish_parsing();
    (doc, zelect)
}

pub fn container(zelect: &Zelect) -> NodeId {
    zelect.container().expect("widget is mounted")
}

pub fn items(zelect: &Zelect) -> Vec<NodeId> {
    zelect
        .instance()
        .expect("widget is mounted")
        .markup()
        .items
        .iter()
        .map(|item| item.node)
        .collect()
}

pub fn is_open(doc: &Document, zelect: &Zelect) -> bool {
    doc.get(container(zelect)).unwrap().has_class(ACTIVE_CLASS)
}

/// `data-value` of every item carrying `aria-selected`.
pub fn selected_values(doc: &Document, zelect: &Zelect) -> Vec<String> {
    items(zelect)
        .into_iter()
        .filter_map(|node| doc.get(node))
        .filter(|el| el.has_attribute(SELECTED_ATTR))
        .filter_map(|el| el.attribute("data-value").map(str::to_string))
        .collect()
}
