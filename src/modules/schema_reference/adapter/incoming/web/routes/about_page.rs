use actix_web::{get, http::StatusCode, web, Responder};

use crate::schema_reference::adapter::incoming::web::view::render_about;
use crate::shared::web::{html_response, render_page, NavItem};
use crate::AppState;

#[get("/")]
pub async fn about_page_handler(data: web::Data<AppState>) -> impl Responder {
    let catalog = data.get_column_catalog_use_case.execute().await;
    html_response(
        StatusCode::OK,
        render_page(catalog.overview.title, NavItem::About, &render_about(&catalog)),
    )
}
