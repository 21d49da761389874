//! Todo item and todo list views.

use hxtodo_db::models::Todo;
use hxtodo_html::{Element, Node};

use super::TodoMode;

/// Element id of the list container that new todos are appended to.
pub(crate) const LIST_ID: &str = "todos";

/// Render one todo in the given mode.
///
/// Controls that answer with another rendering of the same todo swap with
/// `outerHTML`, so the page keeps exactly one `todo-<id>` article.
pub fn todo_item(todo: &Todo, mode: TodoMode) -> Node {
    let el = match mode {
        TodoMode::Normal => normal(todo),
        TodoMode::Edit => edit(todo),
    };
    el.into()
}

fn normal(todo: &Todo) -> Element {
    let target = format!("#{}", todo.id.element_id());
    let toggle_class = if todo.completed {
        "outline primary"
    } else {
        "primary"
    };

    Element::new("article")
        .id(todo.id.element_id())
        .child(Element::new("h3").text(todo.title.as_str()))
        .child(
            Element::new("button")
                .class(toggle_class)
                .attr("hx-post", format!("/todos/{}/toggle", todo.id))
                .attr("hx-target", target.as_str())
                .attr("hx-swap", "outerHTML")
                .text("Active"),
        )
        .child(
            Element::new("button")
                .class("secondary")
                .attr("hx-get", format!("/todos/{}/edit", todo.id))
                .attr("hx-target", target.as_str())
                .attr("hx-swap", "outerHTML")
                .text("Edit"),
        )
        .child(
            Element::new("button")
                .class("contrast")
                .attr("hx-delete", format!("/todos/{}", todo.id))
                .attr("hx-target", target)
                .attr("hx-swap", "delete")
                .text("Delete"),
        )
}

fn edit(todo: &Todo) -> Element {
    Element::new("article").id(todo.id.element_id()).child(
        Element::new("form")
            .attr("hx-post", format!("/todos/{}/save", todo.id))
            .attr("hx-target", format!("#{}", todo.id.element_id()))
            .attr("hx-swap", "outerHTML")
            .child(
                Element::new("input")
                    .attr("name", "title")
                    .attr("value", todo.title.as_str())
                    .attr("placeholder", "Enter todo title..."),
            )
            .child(Element::new("button").attr("type", "submit").text("Save")),
    )
}

/// Render the heading, the add button, and every todo in normal mode.
pub fn todo_list(todos: &[Todo]) -> Node {
    Element::new("div")
        .child(Element::new("h1").text("Todos"))
        .child(
            Element::new("button")
                .attr("hx-post", "/todos/new")
                .attr("hx-target", format!("#{LIST_ID}"))
                .attr("hx-swap", "beforeend")
                .text("Add"),
        )
        .child(
            Element::new("div")
                .id(LIST_ID)
                .children(todos.iter().map(|t| todo_item(t, TodoMode::Normal))),
        )
        .into()
}
