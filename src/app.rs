// ============================================================================
// APP - Mounts the partner-resort and blog screens into #app
// ============================================================================
// Every state change schedules one full re-render on the next tick, so a
// burst of updates from one request renders once.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, capture_focus, clear, get_element_by_id, release_listeners, restore_focus, BrowserConfirm,
    ElementBuilder,
};
use crate::models::{Blog, RecordId, Resort, Resource};
use crate::services::{ApiClient, HttpTransport};
use crate::state::ReactiveState;
use crate::viewmodels::resort_wizard::{FailurePolicy, InputValue};
use crate::viewmodels::{ListViewModel, ResortWizard};
use crate::views::{render_table, render_wizard_form, render_wizard_header, OnInput, TableRow};

type Wizard = Rc<ResortWizard<HttpTransport>>;

pub struct App {
    root: Element,
    api: ApiClient,
    resorts: Rc<ListViewModel<Resort>>,
    blogs: Rc<ListViewModel<Blog>>,
    wizard: Rc<RefCell<Option<Wizard>>>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;
        let api = ApiClient::browser();

        let app = Self {
            root,
            resorts: Rc::new(ListViewModel::new(api.clone())),
            blogs: Rc::new(ListViewModel::new(api.clone())),
            wizard: Rc::new(RefCell::new(None)),
            api,
        };
        rerender_on_change(app.resorts.state());
        rerender_on_change(app.blogs.state());

        spawn_fetch(app.resorts.clone());
        spawn_fetch(app.blogs.clone());
        Ok(app)
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let focus = capture_focus();
        clear(&self.root);
        let released = release_listeners();
        log::debug!("🧹 Released {} listeners", released);

        let shell = ElementBuilder::new("main")?
            .class("admin-console")
            .child(self.render_resorts()?)?
            .child(self.render_list("Blogs", &self.blogs)?)?
            .build();
        append_child(&self.root, &shell)?;

        // Every keystroke in the wizard re-renders; keep the cursor where it was
        if let Some(focus) = focus {
            restore_focus(&focus);
        }
        Ok(())
    }

    fn render_list<R: Resource + TableRow + 'static>(
        &self,
        title: &str,
        list: &Rc<ListViewModel<R>>,
    ) -> Result<Element, JsValue> {
        let on_delete = {
            let list = list.clone();
            Rc::new(move |id: RecordId| {
                let list = list.clone();
                spawn_local(async move {
                    // Failures already land in the list state
                    let _ = list.delete(&id, &BrowserConfirm).await;
                });
            }) as Rc<dyn Fn(RecordId)>
        };
        list.state().with(|state| render_table(title, state, on_delete))
    }

    fn render_resorts(&self) -> Result<Element, JsValue> {
        let table = self.render_list("Partner Resorts", &self.resorts)?;
        let current = self.wizard.borrow().clone();

        match current {
            Some(wizard) => {
                let panel = self.render_wizard(&wizard)?;
                ElementBuilder::new("div")?.child(table)?.child(panel).map(|b| b.build())
            }
            None => {
                let slot = self.wizard.clone();
                let api = self.api.clone();
                let open = ElementBuilder::new("button")?
                    .class("btn btn-primary")
                    .text("Add Resort")
                    .on_click(move |_| {
                        let wizard = Rc::new(ResortWizard::new(api.clone(), FailurePolicy::default()));
                        rerender_on_change(wizard.state());
                        *slot.borrow_mut() = Some(wizard);
                        schedule_render();
                    })?
                    .build();
                ElementBuilder::new("div")?.child(open)?.child(table).map(|b| b.build())
            }
        }
    }

    fn render_wizard(&self, wizard: &Wizard) -> Result<Element, JsValue> {
        let header = wizard.state().with(render_wizard_header)?;
        let on_input: OnInput = {
            let wizard = wizard.clone();
            Rc::new(move |name: &'static str, value: InputValue| {
                wizard.set_input(name, value);
            })
        };
        let form = wizard.state().with(|state| render_wizard_form(state, on_input))?;

        let next = {
            let wizard = wizard.clone();
            let slot = self.wizard.clone();
            let resorts = self.resorts.clone();
            ElementBuilder::new("button")?
                .class("btn btn-primary")
                .text("Save & Continue")
                .on_click(move |_| {
                    let wizard = wizard.clone();
                    let slot = slot.clone();
                    let resorts = resorts.clone();
                    spawn_local(async move {
                        if wizard.submit().await.is_ok() && wizard.step().number().is_none() {
                            slot.borrow_mut().take();
                            let _ = resorts.fetch().await;
                        }
                    });
                })?
                .build()
        };

        let back = {
            let wizard = wizard.clone();
            ElementBuilder::new("button")?
                .class("btn")
                .text("Back")
                .on_click(move |_| wizard.back())?
                .build()
        };

        let close = {
            let wizard = wizard.clone();
            let slot = self.wizard.clone();
            ElementBuilder::new("button")?
                .class("btn")
                .text("Close")
                .on_click(move |_| {
                    wizard.close();
                    slot.borrow_mut().take();
                    schedule_render();
                })?
                .build()
        };

        Ok(ElementBuilder::new("div")?
            .class("modal wizard")
            .child(header)?
            .child(form)?
            .children([back, next, close])?
            .build())
    }
}

fn spawn_fetch<R: Resource + 'static>(list: Rc<ListViewModel<R>>) {
    spawn_local(async move {
        let _ = list.fetch().await;
    });
}

fn rerender_on_change<T: 'static>(state: &ReactiveState<T>) {
    state.subscribe(schedule_render);
}

fn schedule_render() {
    Timeout::new(0, crate::rerender_app).forget();
}
