//! Palette endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{patch, post},
    Json, Router,
};

use super::{ensure_exists, CreatedResponse};
use crate::db::Table;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::{CreatePaletteRequest, RenameRequest};

/// POST /palettes - create a palette under an existing project
async fn create_palette(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePaletteRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let palette = req.validate()?;
    let id = state.store().insert_palette(&palette).await?;

    tracing::info!(palette_id = id, project_id = palette.project_id, "palette created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PATCH /palettes/{id} - rename a palette
async fn rename_palette(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    JsonBody(req): JsonBody<RenameRequest>,
) -> Result<StatusCode, ApiError> {
    let name = req.validate()?;
    ensure_exists(&state, Table::Palettes, id).await?;
    state.store().rename_palette(id, &name).await?;

    Ok(StatusCode::ACCEPTED)
}

/// DELETE /palettes/{id}
async fn delete_palette(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    ensure_exists(&state, Table::Palettes, id).await?;
    state.store().delete_palette(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Palette routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/palettes", post(create_palette))
        .route("/palettes/{id}", patch(rename_palette).delete(delete_palette))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    use crate::db::{PaletteStore, Table};
    use crate::http::testing::{json, TestApp};
    use crate::models::{Palette, ProjectFilter, PALETTE_FIELDS};

    async fn first_project_id(app: &TestApp) -> i64 {
        app.store
            .list_projects(&ProjectFilter::default())
            .await
            .unwrap()[0]
            .id
    }

    fn palette_body(project_id: i64) -> Value {
        json!({
            "name": "palette q",
            "color1": "#000000",
            "color2": "#000000",
            "color3": "#000000",
            "color4": "#000000",
            "color5": "#000000",
            "project_id": project_id
        })
    }

    async fn some_palette(app: &TestApp) -> Palette {
        let project_id = first_project_id(app).await;
        app.store.list_palettes(project_id).await.unwrap().remove(0)
    }

    #[tokio::test]
    async fn create_returns_201_and_round_trips() {
        let app = TestApp::seeded().await;
        let project_id = first_project_id(&app).await;
        let body = palette_body(project_id);

        let (status, created) = app
            .send(Method::POST, "/api/v1/palettes", Some(body.clone()))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = json(&created)["id"].as_i64().unwrap();

        let (status, listed) = app
            .get(&format!("/api/v1/projects/{}/palettes", project_id))
            .await;
        assert_eq!(status, StatusCode::OK);

        let mut expected = body;
        expected["id"] = json!(id);
        let listed = json(&listed);
        let entry = listed
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["id"] == json!(id))
            .unwrap();
        assert_eq!(entry, &expected);
    }

    #[tokio::test]
    async fn each_missing_field_is_422_naming_it() {
        let app = TestApp::seeded().await;
        let project_id = first_project_id(&app).await;
        let before = app.store.row_counts().await;

        for field in PALETTE_FIELDS {
            let mut body = palette_body(project_id);
            body.as_object_mut().unwrap().remove(field);

            let (status, message) = app.send(Method::POST, "/api/v1/palettes", Some(body)).await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "field {}", field);
            let message = json(&message);
            let message = message.as_str().unwrap();
            assert!(message.starts_with("Request body must include name: <string>"));
            assert!(message.ends_with(&format!("Please provide {}.", field)));
        }

        assert_eq!(app.store.row_counts().await, before);
    }

    // Compatibility: a zero project id is indistinguishable from a missing one.
    #[tokio::test]
    async fn zero_project_id_is_treated_as_missing() {
        let app = TestApp::seeded().await;
        let (status, message) = app
            .send(Method::POST, "/api/v1/palettes", Some(palette_body(0)))
            .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json(&message)
            .as_str()
            .unwrap()
            .ends_with("Please provide project_id."));
    }

    #[tokio::test]
    async fn unknown_project_is_500_without_detail() {
        let app = TestApp::seeded().await;
        let before = app.store.row_counts().await;

        let (status, body) = app
            .send(Method::POST, "/api/v1/palettes", Some(palette_body(999)))
            .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());
        assert_eq!(app.store.row_counts().await, before);
    }

    #[tokio::test]
    async fn rename_existing_palette_is_202() {
        let app = TestApp::seeded().await;
        let palette = some_palette(&app).await;

        let (status, _) = app
            .send(
                Method::PATCH,
                &format!("/api/v1/palettes/{}", palette.id),
                Some(json!({ "name": "renamed" })),
            )
            .await;

        assert_eq!(status, StatusCode::ACCEPTED);
        let renamed = app.store.list_palettes(palette.project_id).await.unwrap();
        let renamed = renamed.iter().find(|p| p.id == palette.id).unwrap();
        assert_eq!(renamed.name, "renamed");
        assert_eq!(renamed.color1, palette.color1);
    }

    #[tokio::test]
    async fn rename_missing_palette_is_404() {
        let app = TestApp::seeded().await;
        let (status, _) = app
            .send(Method::PATCH, "/api/v1/palettes/0", Some(json!({ "name": "x" })))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rename_palette_without_name_is_422() {
        let app = TestApp::seeded().await;
        let palette = some_palette(&app).await;

        let (status, body) = app
            .send(
                Method::PATCH,
                &format!("/api/v1/palettes/{}", palette.id),
                Some(json!({ "name": "" })),
            )
            .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json(&body), json!("Please provide a name."));
    }

    #[tokio::test]
    async fn rename_palette_without_json_content_type_is_422() {
        let app = TestApp::seeded().await;
        let palette = some_palette(&app).await;
        let uri = format!("/api/v1/palettes/{}", palette.id);

        let (status, body) = app
            .send_untyped(Method::PATCH, &uri, r#"{"name":"renamed"}"#)
            .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json(&body), json!("Please provide a name."));
    }

    #[tokio::test]
    async fn delete_palette_is_204_then_404() {
        let app = TestApp::seeded().await;
        let palette = some_palette(&app).await;
        let uri = format!("/api/v1/palettes/{}", palette.id);

        let (status, body) = app.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
        assert!(!app.store.exists(Table::Palettes, palette.id).await.unwrap());
        assert_eq!(app.store.row_counts().await, (2, 4));

        let (status, _) = app.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn palettes_of_deleted_project_are_gone() {
        let app = TestApp::seeded().await;
        let palette = some_palette(&app).await;

        let (status, _) = app
            .send(
                Method::DELETE,
                &format!("/api/v1/projects/{}", palette.project_id),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = app
            .send(Method::DELETE, &format!("/api/v1/palettes/{}", palette.id), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
