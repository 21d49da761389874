//! Full-page views and the client-side counter widget.

use hxtodo_db::models::Todo;
use hxtodo_html::{Element, Node};

use super::todo::todo_list;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@2.0.1/dist/htmx.js";

const COUNTER_EFFECT: &str = "this.style.backgroundColor = $state(this).count > 3 ? 'red' : \
                              $state(this).count < -3 ? 'blue' : '';";

/// The index response: page metadata, the todo list, and the counter.
pub fn index_page(todos: &[Todo]) -> Node {
    Node::Fragment(vec![
        Element::new("title").text("App").into(),
        Element::new("link")
            .attr("rel", "stylesheet")
            .attr("href", PICO_CSS)
            .into(),
        Element::new("script").attr("src", HTMX_JS).into(),
        Element::new("script")
            .attr("src", "/static/signals.js")
            .attr("type", "module")
            .into(),
        Element::new("script").attr("src", "/static/hx-state.js").into(),
        Element::new("body")
            .class("container")
            .attr("style", "width: 50%;")
            .child(todo_list(todos))
            .into(),
        counter(),
    ])
}

/// A counter whose state lives entirely in the browser.
///
/// `hx-state` scopes a reactive object to the article, `hx-bind` mirrors
/// `count` into the paragraph, and `hx-effect` recolours the `+` button.
/// The server never sees the count.
pub fn counter() -> Node {
    Element::new("article")
        .attr("hx-state", "")
        .child(
            Element::new("button")
                .attr("onclick", "$state(this).count += 1")
                .attr("hx-effect", COUNTER_EFFECT)
                .text("+"),
        )
        .child(
            Element::new("p")
                .attr("hx-bind", "innerText=count:Number")
                .text("0"),
        )
        .child(
            Element::new("button")
                .attr("onclick", "$state(this).count -= 1")
                .text("-"),
        )
        .into()
}

/// The standalone hello page.
pub fn hello_page() -> Node {
    Node::Fragment(vec![
        Element::new("title").text("App").into(),
        Element::new("h1").text("Hello, World!").into(),
        Element::new("p").text("This is a paragraph.").into(),
    ])
}
