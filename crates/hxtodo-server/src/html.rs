//! HTML fragment responses.

use axum::response::{IntoResponse, Response};
use hxtodo_html::{render, Node};

/// A rendered node tree served as `text/html; charset=utf-8`.
#[derive(Debug, Clone)]
pub struct HtmlFragment(pub Node);

impl From<Node> for HtmlFragment {
    fn from(node: Node) -> Self {
        Self(node)
    }
}

impl IntoResponse for HtmlFragment {
    fn into_response(self) -> Response {
        axum::response::Html(render(&self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::StatusCode;
    use hxtodo_html::Element;

    #[test]
    fn sets_html_content_type() {
        let response = HtmlFragment(Element::new("p").text("hi").into()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }
}
