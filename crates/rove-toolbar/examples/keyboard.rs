//! Keyboard walk-through of a formatting toolbar
//!
//! Run with `RUST_LOG=rove_toolbar=trace` to see every focus move.

use rove_dom::{DomTree, FocusEvent, KeyboardEvent, MouseEvent, NodeId};
use rove_toolbar::{Toolbar, ToolbarConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = DomTree::new();
    let body = tree.create_element("body");
    tree.append_child(tree.root(), body)?;
    let outside = tree.create_element("input");
    tree.append_child(body, outside)?;

    let host = tree.create_element("rove-toolbar");
    tree.append_child(body, host)?;

    let label = tree.create_element("span");
    tree.set_attr(label, "slot", "label")?;
    tree.append_child(host, label)?;

    let mut controls = Vec::new();
    for name in ["bold", "italic", "underline"] {
        let button = tree.create_element("button");
        tree.set_attr(button, "name", name)?;
        tree.append_child(host, button)?;
        controls.push(button);
    }

    let config = ToolbarConfig::from_json(r#"{ "aria": { "label": "Text formatting" } }"#)?;
    let mut toolbar = Toolbar::with_config(host, config);
    toolbar.connect(&mut tree);
    report(&tree, &toolbar, "connected");

    toolbar.focusin_handler(&mut tree, &FocusEvent::focus_in(controls[0], Some(outside)));
    report(&tree, &toolbar, "tabbed in");

    for key in ["ArrowRight", "ArrowRight", "ArrowRight", "ArrowLeft", "ArrowUp"] {
        let target = tree.active_element().unwrap_or(host);
        let mut event = KeyboardEvent::key_down(key, target);
        toolbar.keydown_handler(&mut tree, &mut event);
        let note = if event.is_default_prevented() { "handled" } else { "passed through" };
        report(&tree, &toolbar, &format!("{key} ({note})"));
    }

    toolbar.click_handler(&mut tree, &MouseEvent::click(controls[0]));
    report(&tree, &toolbar, "clicked first control");

    let extra = tree.create_element("button");
    tree.set_attr(extra, "name", "strike")?;
    tree.append_child(host, extra)?;
    let records = tree.take_records();
    toolbar.handle_mutations(&mut tree, &records);
    report(&tree, &toolbar, "added a control");

    toolbar.disconnect(&mut tree);
    report(&tree, &toolbar, "disconnected");
    Ok(())
}

fn report(tree: &DomTree, toolbar: &Toolbar, step: &str) {
    let stops: Vec<String> = toolbar
        .roster()
        .candidates()
        .iter()
        .map(|&c| describe(tree, c))
        .collect();
    println!(
        "{step:<28} active={} focused={} [{}]",
        toolbar.active_index(),
        tree.active_element()
            .map_or_else(|| "-".to_string(), |id| describe(tree, id)),
        stops.join(" "),
    );
}

fn describe(tree: &DomTree, id: NodeId) -> String {
    let name = tree.get_attr(id, "name").unwrap_or("?");
    match tree.tab_index(id) {
        Some(index) => format!("{name}:{index}"),
        None => name.to_string(),
    }
}
