use axum::response::Html;

use crate::render;

pub async fn index() -> Html<String> {
    render::index_page()
}

pub async fn menu() -> Html<String> {
    render::menu_page()
}
