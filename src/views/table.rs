// ============================================================================
// TABLE VIEW - Generic list screen with a delete button per row
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::{Blog, RecordId, Resort, Resource};
use crate::viewmodels::ListState;

/// How a record shows up as a table row
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Resort {
    fn headers() -> &'static [&'static str] {
        &["Name", "Location", "Place", "Price", "Featured"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.location.clone(),
            self.place.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
            self.price.clone(),
            if self.is_featured { "Yes" } else { "No" }.to_string(),
        ]
    }
}

impl TableRow for Blog {
    fn headers() -> &'static [&'static str] {
        &["Title", "Author", "Date"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.author.clone(),
            self.date.map(|d| d.format("%d %b %Y").to_string()).unwrap_or_default(),
        ]
    }
}

pub fn render_table<R: Resource + TableRow>(
    title: &str,
    state: &ListState<R>,
    on_delete: Rc<dyn Fn(RecordId)>,
) -> Result<Element, JsValue> {
    let mut section = ElementBuilder::new("section")?
        .class("list-screen")
        .child(ElementBuilder::new("h2")?.text(title).build())?;

    if let Some(error) = &state.error {
        section = section.child(ElementBuilder::new("div")?.class("banner banner-error").text(error).build())?;
    }
    if let Some(notice) = &state.notice {
        section = section.child(ElementBuilder::new("div")?.class("banner banner-notice").text(notice).build())?;
    }
    if state.loading && state.items.is_empty() {
        return Ok(section
            .child(ElementBuilder::new("p")?.class("loading").text("Loading...").build())?
            .build());
    }

    let mut head = ElementBuilder::new("tr")?;
    for header in R::headers() {
        head = head.child(ElementBuilder::new("th")?.text(header).build())?;
    }
    head = head.child(ElementBuilder::new("th")?.text("Actions").build())?;

    let mut body = ElementBuilder::new("tbody")?;
    for item in &state.items {
        body = body.child(render_row(item, on_delete.clone())?)?;
    }

    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(ElementBuilder::new("thead")?.child(head.build())?.build())?
        .child(body.build())?
        .build();
    Ok(section.child(table)?.build())
}

fn render_row<R: Resource + TableRow>(item: &R, on_delete: Rc<dyn Fn(RecordId)>) -> Result<Element, JsValue> {
    let mut row = ElementBuilder::new("tr")?;
    for cell in item.cells() {
        row = row.child(ElementBuilder::new("td")?.text(&cell).build())?;
    }

    let id = item.id().clone();
    let delete = ElementBuilder::new("button")?
        .class("btn btn-danger")
        .text("Delete")
        .on_click(move |_| on_delete(id.clone()))?
        .build();
    Ok(row.child(ElementBuilder::new("td")?.child(delete)?.build())?.build())
}
