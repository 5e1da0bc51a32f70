//! Scroll-reveal demo: load an HTML page, simulate scrolling, print events.
//!
//! Usage: `reveal-demo <page.html>` (or set `demo.document` in reveal.toml).
//! Targets are laid out in a synthetic vertical flow since there is no
//! layout engine here; the viewport then sweeps down the page and back up.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use reveal_config::RevealSettings;
use reveal_dom::{Document, ReadyState, Rect, Viewport};
use reveal_scroll::{ATTR_MARKER, RevealController};

fn main() -> Result<()> {
    env_logger::init();

    let settings = RevealSettings::load();
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.demo.document.clone())
        .context("usage: reveal-demo <page.html> (or set demo.document in reveal.toml)")?;

    let mut document = Document::from_file(&path)?;
    let page_height = assign_flow_layout(&mut document, &settings);
    info!(
        "loaded {} ({} nodes, page height {:.0})",
        path.display(),
        document.len(),
        page_height
    );

    let mut viewport = Viewport::new(settings.demo.viewport_width, settings.demo.viewport_height);
    let mut controller = RevealController::new();

    // The document is still Loading after ingestion, so this defers.
    controller.initialize(&mut document, &viewport);
    document.set_ready_state(ReadyState::Complete);
    controller.document_ready(&mut document, &viewport);
    info!("controller bound with {} targets", controller.target_count());

    // Sweep down the page and back up.
    let max_scroll = (page_height - settings.demo.viewport_height).max(0.0);
    let step = settings.demo.scroll_step.max(1.0);
    let mut offsets = Vec::new();
    let mut y = 0.0;
    while y < max_scroll {
        offsets.push(y);
        y += step;
    }
    offsets.push(max_scroll);
    let downward = offsets.clone();
    offsets.extend(downward.into_iter().rev().skip(1));

    for offset in offsets {
        viewport.scroll_to(0.0, offset);
        controller.update(&mut document, &viewport);
        for event in controller.drain_events() {
            println!("scroll {offset:>6.0}  {event:?}");
        }
    }

    println!();
    for element in document.elements_with_attribute(ATTR_MARKER) {
        let style = if element.style.is_empty() {
            String::new()
        } else {
            format!("  style=\"{}\"", element.style.css_text())
        };
        println!(
            "<{} id=\"{}\" class=\"{}\"{}>",
            element.tag,
            element.id,
            element.classes().join(" "),
            style
        );
    }

    Ok(())
}

/// Stack the reveal targets down the page, one per row.
///
/// Returns the resulting page height.
fn assign_flow_layout(document: &mut Document, settings: &RevealSettings) -> f32 {
    let row = settings.demo.row_height;
    let width = settings.demo.viewport_width * 0.6;
    let ids: Vec<String> = document
        .elements_with_attribute(ATTR_MARKER)
        .map(|e| e.id.clone())
        .collect();
    let count = ids.len();
    for (i, id) in ids.into_iter().enumerate() {
        if let Some(element) = document.get_mut(&id) {
            element.set_rect(Rect::new(40.0, i as f32 * row + 40.0, width, row * 0.5));
        }
    }
    count as f32 * row + settings.demo.viewport_height * 0.5
}
