//! Project input form view.
//!
//! # Responsibility
//! - Read the title, description and people fields on submit.
//! - Validate them and either create a project or alert the user.
//!
//! # Invariants
//! - The submit handler holds a weak handle to the form captured at
//!   registration; it never depends on how the renderer invokes it.
//! - A rejected submission leaves the store and the inputs untouched.
//! - An accepted submission adds exactly one project, then clears all inputs.

use crate::app::BoardConfig;
use crate::store::project_store::ProjectStore;
use crate::validation::rule::{FieldValue, ValidationRule};
use crate::view::component::{DetachedComponent, View, ViewComponent};
use crate::view::renderer::{InsertPosition, MountError, Renderer, SubmitEvent};
use log::info;
use std::ops::RangeInclusive;
use std::rc::Rc;

/// Message shown when any field fails validation.
pub const INVALID_INPUT_ALERT: &str = "Invalid input, please try again!";

/// Validated form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people_count: u32,
}

/// Form creating projects in the shared store.
pub struct ProjectInputForm<R: Renderer> {
    component: ViewComponent<R>,
    store: Rc<ProjectStore>,
    title_input: R::Element,
    description_input: R::Element,
    people_input: R::Element,
    people_range: RangeInclusive<u32>,
}

/// Form whose template and inputs are resolved but not yet attached.
pub struct PendingInputForm<R: Renderer> {
    component: DetachedComponent<R>,
    store: Rc<ProjectStore>,
    title_input: R::Element,
    description_input: R::Element,
    people_input: R::Element,
    people_range: RangeInclusive<u32>,
}

impl<R: Renderer + 'static> PendingInputForm<R> {
    /// Attaches at the start of the host and registers the submit handler.
    pub fn mount(self) -> Rc<ProjectInputForm<R>> {
        let form = Rc::new(ProjectInputForm {
            component: self.component.attach(),
            store: self.store,
            title_input: self.title_input,
            description_input: self.description_input,
            people_input: self.people_input,
            people_range: self.people_range,
        });
        form.configure();
        form
    }
}

impl<R: Renderer + 'static> ProjectInputForm<R> {
    /// Resolves the template, host and the three inputs without attaching.
    pub fn prepare(
        renderer: Rc<R>,
        store: Rc<ProjectStore>,
        config: &BoardConfig,
    ) -> Result<PendingInputForm<R>, MountError> {
        let component = ViewComponent::prepare(
            renderer,
            &config.input_template_id,
            &config.host_id,
            InsertPosition::Start,
            Some(&config.form_element_id),
        )?;
        let title_input = component.require(&config.title_selector, "project input form")?;
        let description_input =
            component.require(&config.description_selector, "project input form")?;
        let people_input = component.require(&config.people_selector, "project input form")?;

        Ok(PendingInputForm {
            component,
            store,
            title_input,
            description_input,
            people_input,
            people_range: config.people_range.clone(),
        })
    }

    /// Mounts the form at the start of the board host and registers its
    /// submit handler.
    pub fn new(
        renderer: Rc<R>,
        store: Rc<ProjectStore>,
        config: &BoardConfig,
    ) -> Result<Rc<Self>, MountError> {
        Ok(Self::prepare(renderer, store, config)?.mount())
    }

    pub fn element(&self) -> &R::Element {
        self.component.element()
    }

    pub fn title_input(&self) -> &R::Element {
        &self.title_input
    }

    pub fn description_input(&self) -> &R::Element {
        &self.description_input
    }

    pub fn people_input(&self) -> &R::Element {
        &self.people_input
    }

    /// Reads and validates the three fields.
    ///
    /// Returns `None` when any field violates its rule or the headcount is
    /// not a whole number.
    pub fn gather_input(&self) -> Option<ProjectInput> {
        let renderer = self.component.renderer();
        let title = renderer.input_value(&self.title_input);
        let description = renderer.input_value(&self.description_input);
        let people_raw = renderer.input_value(&self.people_input);
        let people = people_raw.trim().parse::<f64>().unwrap_or(f64::NAN);

        let rules = [
            ("title", ValidationRule::new(title.as_str()).required()),
            (
                "description",
                ValidationRule::new(description.as_str()).required(),
            ),
            (
                "people",
                ValidationRule::new(FieldValue::Number(people))
                .required()
                .min(f64::from(*self.people_range.start()))
                .max(f64::from(*self.people_range.end())),
            ),
        ];
        for (field, rule) in &rules {
            if let Err(violation) = rule.check() {
                info!(
                    "event=project_submit module=view status=rejected field={} constraint={}",
                    field,
                    violation.as_str()
                );
                return None;
            }
        }

        if people.fract() != 0.0 {
            info!("event=project_submit module=view status=rejected field=people constraint=integer");
            return None;
        }
        // In range and integral, so the cast is exact.
        let people_count = people as u32;
        Some(ProjectInput {
            title,
            description,
            people_count,
        })
    }

    /// Resets all three inputs to empty strings.
    pub fn clear_inputs(&self) {
        let renderer = self.component.renderer();
        for input in [&self.title_input, &self.description_input, &self.people_input] {
            renderer.set_input_value(input, "");
        }
    }

    fn submit(&self, event: &mut SubmitEvent) {
        event.prevent_default();
        match self.gather_input() {
            Some(input) => {
                let project_id =
                    self.store
                        .add_project(input.title, input.description, input.people_count);
                info!(
                    "event=project_submit module=view status=ok project_id={}",
                    project_id
                );
                self.clear_inputs();
            }
            None => self.component.renderer().alert(INVALID_INPUT_ALERT),
        }
    }
}

impl<R: Renderer + 'static> View for ProjectInputForm<R> {
    fn configure(self: &Rc<Self>) {
        let form = Rc::downgrade(self);
        self.component.renderer().on_submit(
            self.component.element(),
            Rc::new(move |event: &mut SubmitEvent| {
                if let Some(form) = form.upgrade() {
                    form.submit(event);
                }
            }),
        );
    }

    fn render_content(&self) {}
}
