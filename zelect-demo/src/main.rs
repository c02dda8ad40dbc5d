mod paths;

use std::fs::{self, File};

use simplelog::{Config, LevelFilter, WriteLogger};
use webdom::{Document, Element, NodeId};
use zelect::{Zelect, ZelectOptions};

const COLORS: &[(&str, &str)] = &[
    ("0", "Choose a color"),
    ("1", "Red"),
    ("2", "Blue"),
    ("3", "Green"),
];

/// Options from the JSON file named by the first argument, or the defaults.
fn load_options() -> Result<ZelectOptions, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)?;
            let options = serde_json::from_str(&raw)?;
            log::info!("loaded options from {path}");
            Ok(options)
        }
        None => Ok(ZelectOptions::new().class_name("zelector")),
    }
}

fn build_page() -> Result<(Document, NodeId), webdom::DomError> {
    let mut doc = Document::new();
    let body = doc.body();
    let form = doc.create_child(body, Element::new("form").id("settings"))?;
    let native = doc.create_child(
        form,
        Element::new("select")
            .attr("data-component", "select")
            .attr("name", "color"),
    )?;
    for (value, text) in COLORS {
        doc.create_child(native, Element::new("option").attr("value", *value).text(*text))?;
    }
    doc.create_child(form, Element::new("button").id("save").text("Save"))?;
    Ok((doc, form))
}

fn show(doc: &Document, step: &str) {
    println!("-- {step}");
    println!("{}", doc.to_html());
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let options = load_options()?;
    let (mut doc, form) = build_page()?;
    show(&doc, "native page");

    let zelect = Zelect::new(options, None);
    zelect.init(&mut doc);
    doc.finish_parsing();

    let Some(instance) = zelect.instance() else {
        println!("-- widget did not mount, see the log for details");
        return Ok(());
    };
    let markup = instance.markup();
    show(&doc, "mounted");

    doc.click(markup.container);
    show(&doc, "opened");

    if let Some(item) = markup.items.last() {
        doc.pointer_move(Some(item.node));
        show(&doc, "hovering last item");
        doc.click(item.node);
        show(&doc, "selected last item");
    }

    doc.click(markup.container);
    doc.pointer_move(None);
    doc.click(form);
    show(&doc, "dismissed by outside click");

    println!("-- final state: {:?}", zelect.state());
    Ok(())
}

fn main() {
    let log_path = paths::log_file();
    let log_file = File::create(&log_path).expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}
