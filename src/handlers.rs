use crate::dashboard::{load_dashboard, load_summary};
use crate::errors::AppError;
use crate::models::Summary;
use crate::state::AppState;
use crate::submission::{submit_entry, EntryForm};
use crate::ui::{render_dashboard, render_entry, render_index};
use axum::{extract::State, response::Html, Form, Json};
use chrono::Local;

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn entry_form() -> Html<String> {
    Html(render_entry(&EntryForm::cleared(), None))
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<EntryForm>) -> Html<String> {
    let outcome = submit_entry(&state.client, form).await;
    Html(render_entry(&outcome.form, Some(&outcome.notification)))
}

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let dashboard = load_dashboard(&state.client).await;
    Html(render_dashboard(&dashboard, &updated_at()))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<Summary>, AppError> {
    let summary = load_summary(&state.client).await?;
    Ok(Json(summary))
}

fn updated_at() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}
