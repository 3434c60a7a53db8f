//! HTML presenter backed by `minijinja` templates.
//!
//! Each todo renders to one `<li>` fragment. The presenter keeps the
//! fragments in display order, which makes it usable as a headless view in
//! hosts and tests. Template names end in `.html`, so todo text is
//! auto-escaped.

use minijinja::{Environment, context};
use std::sync::Mutex;

use crate::todo::{
    domain::{Todo, TodoId},
    ports::TodoPresenter,
};

const ITEM_TEMPLATE_NAME: &str = "todo_item.html";

const ITEM_TEMPLATE: &str = r#"<li class="todo-item{% if todo.completed %} completed{% endif %}" data-id="{{ todo.id }}" draggable="true">
  <span class="drag-handle">⋮⋮</span>
  <input type="checkbox" class="todo-checkbox"{% if todo.completed %} checked{% endif %} />
  {% if todo.editing -%}
  <input class="edit-input" type="text" value="{{ todo.text }}" />
  {%- else -%}
  <span class="todo-text{% if todo.completed %} completed{% endif %}">{{ todo.text }}</span>
  {%- endif %}
  <button class="delete-button">×</button>
</li>"#;

/// Markup shown when the list has no todos.
pub const EMPTY_STATE_MARKUP: &str =
    r#"<div class="empty-state">No tasks yet. Add one to get started!</div>"#;

/// A rendered todo fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    /// Todo the fragment belongs to.
    pub id: TodoId,
    /// Rendered `<li>` markup.
    pub markup: String,
}

/// Current state of the rendered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView {
    items: Vec<RenderedItem>,
    focused: Option<TodoId>,
}

impl RenderedView {
    /// Returns the fragments in display order.
    #[must_use]
    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    /// Returns the fragment for a todo.
    #[must_use]
    pub fn item(&self, id: TodoId) -> Option<&RenderedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the todo whose edit field has focus.
    #[must_use]
    pub const fn focused(&self) -> Option<TodoId> {
        self.focused
    }

    /// Returns the full list markup, or the empty-state message.
    #[must_use]
    pub fn markup(&self) -> String {
        if self.items.is_empty() {
            return EMPTY_STATE_MARKUP.to_owned();
        }
        self.items
            .iter()
            .map(|item| item.markup.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Presenter that renders todos to HTML fragments.
#[derive(Debug)]
pub struct TemplatePresenter {
    environment: Environment<'static>,
    view: Mutex<RenderedView>,
}

impl TemplatePresenter {
    /// Creates a presenter with the built-in item template.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when the template fails to compile.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        environment.add_template(ITEM_TEMPLATE_NAME, ITEM_TEMPLATE)?;
        Ok(Self {
            environment,
            view: Mutex::new(RenderedView::default()),
        })
    }

    /// Renders a single todo without touching the view.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn render_item(&self, todo: &Todo) -> Result<String, minijinja::Error> {
        self.environment
            .get_template(ITEM_TEMPLATE_NAME)?
            .render(context! { todo => todo })
    }

    /// Returns a copy of the current view.
    #[must_use]
    pub fn view(&self) -> RenderedView {
        self.view
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Returns the full list markup.
    #[must_use]
    pub fn markup(&self) -> String {
        self.view().markup()
    }

    fn rendered(&self, todo: &Todo) -> Option<RenderedItem> {
        match self.render_item(todo) {
            Ok(markup) => Some(RenderedItem {
                id: todo.id(),
                markup,
            }),
            Err(err) => {
                tracing::warn!(todo_id = %todo.id(), error = %err, "failed to render todo");
                None
            }
        }
    }

    fn update_view(&self, update: impl FnOnce(&mut RenderedView)) {
        match self.view.lock() {
            Ok(mut guard) => update(&mut guard),
            Err(err) => tracing::warn!(error = %err, "rendered view is poisoned"),
        }
    }
}

impl TodoPresenter for TemplatePresenter {
    fn render_all(&self, todos: &[Todo]) {
        let items: Vec<RenderedItem> = todos
            .iter()
            .filter_map(|todo| self.rendered(todo))
            .collect();
        self.update_view(|view| {
            view.focused = view
                .focused
                .filter(|focused| items.iter().any(|item| item.id == *focused));
            view.items = items;
        });
    }

    fn render_one(&self, todo: &Todo) {
        let Some(rendered) = self.rendered(todo) else {
            return;
        };
        self.update_view(|view| {
            match view.items.iter_mut().find(|item| item.id == rendered.id) {
                Some(existing) => *existing = rendered,
                None => view.items.push(rendered),
            }
        });
    }

    fn remove_one(&self, id: TodoId) {
        self.update_view(|view| {
            view.items.retain(|item| item.id != id);
            if view.focused == Some(id) {
                view.focused = None;
            }
        });
    }

    fn focus_edit(&self, id: TodoId) {
        self.update_view(|view| {
            if view.item(id).is_some() {
                view.focused = Some(id);
            }
        });
    }
}
