// ============================================================================
// WIZARD VIEW - Progress header and step form for the resort wizard
// ============================================================================

use std::cmp::Ordering;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use crate::dom::{read_selected_files, ElementBuilder};
use crate::viewmodels::resort_wizard::{
    inputs_for, InputKind, InputSpec, InputValue, StepOutcome, WizardState, WizardStep,
};

pub fn render_wizard_header(state: &WizardState) -> Result<Element, JsValue> {
    // Closed counts as past the last step
    let current = state.step.number().unwrap_or(WizardStep::SEQUENCE.len() + 1);

    let mut steps = ElementBuilder::new("ol")?.class("wizard-steps");
    for step in WizardStep::SEQUENCE {
        let number = step.number().unwrap_or_default();
        let class = match number.cmp(&current) {
            Ordering::Less => "wizard-step done",
            Ordering::Equal => "wizard-step active",
            Ordering::Greater => "wizard-step",
        };
        steps = steps.child(
            ElementBuilder::new("li")?
                .class(class)
                .text(&format!("{}. {}", number, step.title()))
                .build(),
        )?;
    }

    let mut header = ElementBuilder::new("header")?
        .class("wizard-header")
        .child(steps.build())?;

    if let Some(StepOutcome::Failed(reason)) = &state.last_outcome {
        header = header.child(
            ElementBuilder::new("div")?
                .class("banner banner-error")
                .text(&format!("Could not save {}: {}", state.step.title(), reason))
                .build(),
        )?;
    }
    if state.submitting {
        header = header.child(ElementBuilder::new("p")?.class("saving").text("Saving...").build())?;
    }
    Ok(header.build())
}

/// Receives every control change of the wizard form
pub type OnInput = Rc<dyn Fn(&'static str, InputValue)>;

/// Controls of the current step, filled from its draft
pub fn render_wizard_form(state: &WizardState, on_input: OnInput) -> Result<Element, JsValue> {
    let mut form = ElementBuilder::new("div")?.class("wizard-form");
    for spec in inputs_for(state.step) {
        let value = state.input_value(spec.name);
        form = form.child(render_control(spec, value.as_ref(), on_input.clone())?)?;
    }
    Ok(form.build())
}

/// Stable across renders so focus can be put back
fn control_id(name: &str) -> String {
    format!("wizard-{}", name)
}

fn render_control(spec: &InputSpec, value: Option<&InputValue>, on_input: OnInput) -> Result<Element, JsValue> {
    let name = spec.name;
    let id = control_id(name);

    let control = match spec.kind {
        InputKind::Text => ElementBuilder::new("input")?
            .attr("type", "text")?
            .attr("id", &id)?
            .attr("value", value.and_then(InputValue::as_text).unwrap_or_default())?
            .on("input", move |event| {
                if let Some(input) = event.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                    on_input(name, InputValue::Text(input.value()));
                }
            })?,
        InputKind::LongText => ElementBuilder::new("textarea")?
            .attr("id", &id)?
            .text(value.and_then(InputValue::as_text).unwrap_or_default())
            .on("input", move |event| {
                if let Some(area) = event.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
                    on_input(name, InputValue::Text(area.value()));
                }
            })?,
        InputKind::Checkbox => {
            let mut checkbox = ElementBuilder::new("input")?.attr("type", "checkbox")?.attr("id", &id)?;
            if value == Some(&InputValue::Flag(true)) {
                checkbox = checkbox.attr("checked", "")?;
            }
            checkbox.on("change", move |event| {
                if let Some(input) = event.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                    on_input(name, InputValue::Flag(input.checked()));
                }
            })?
        }
        InputKind::File | InputKind::Files => {
            let mut picker = ElementBuilder::new("input")?
                .attr("type", "file")?
                .attr("accept", "image/*")?
                .attr("id", &id)?;
            if spec.kind == InputKind::Files {
                picker = picker.attr("multiple", "")?;
            }
            picker.on("change", move |event| {
                let Some(input) = event.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                    return;
                };
                let on_input = on_input.clone();
                spawn_local(async move {
                    match read_selected_files(&input).await {
                        Ok(files) => on_input(name, InputValue::Files(files)),
                        Err(e) => log::error!("❌ Could not read {}: {:?}", name, e),
                    }
                });
            })?
        }
    };

    let mut field = ElementBuilder::new("label")?
        .class("wizard-field")
        .attr("for", &id)?
        .child(ElementBuilder::new("span")?.text(spec.label).build())?
        .child(control.build())?;

    let names = value.map(InputValue::file_names).unwrap_or_default();
    if !names.is_empty() {
        field = field.child(
            ElementBuilder::new("small")?
                .class("selected-files")
                .text(&names.join(", "))
                .build(),
        )?;
    }
    Ok(field.build())
}
