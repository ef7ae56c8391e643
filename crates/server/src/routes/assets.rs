use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Serialize;
use service::assets::{AssetKind, AssetRecord, AssetSummary, SaveAssetInput};
use tracing::info;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Serialize, Debug)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
}

#[derive(Serialize, Debug)]
pub struct LoadResponse {
    pub success: bool,
    pub data: AssetRecord,
}

#[derive(Serialize, Debug)]
pub struct ListResponse {
    pub success: bool,
    pub assets: Vec<AssetSummary>,
}

#[derive(Serialize, Debug)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/assets/save
pub async fn save_asset(
    State(state): State<ServerState>,
    payload: Result<Json<SaveAssetInput>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::bad_request(format!("no data provided: {}", e.body_text())))?;
    let (kind, name, code) = input.validate()?;
    let saved = state.store.save(kind, &name, &code).await?;
    info!(%kind, %name, filename = %saved.filename, "asset saved");
    Ok(Json(SaveResponse {
        success: true,
        message: format!("{kind} saved successfully"),
        filename: saved.filename,
    }))
}

/// GET /api/assets/load/:asset_type/:name
pub async fn load_asset(
    State(state): State<ServerState>,
    Path((asset_type, name)): Path<(String, String)>,
) -> Result<Json<LoadResponse>, ApiError> {
    let kind = asset_type.parse::<AssetKind>()?;
    let data = state.store.load(kind, &name).await?;
    Ok(Json(LoadResponse { success: true, data }))
}

/// GET /api/assets/list/:asset_type
pub async fn list_assets(
    State(state): State<ServerState>,
    Path(asset_type): Path<String>,
) -> Result<Json<ListResponse>, ApiError> {
    let kind = asset_type.parse::<AssetKind>()?;
    let assets = state.store.list(kind).await?;
    Ok(Json(ListResponse { success: true, assets }))
}

/// DELETE /api/assets/delete/:asset_type/:name
pub async fn delete_asset(
    State(state): State<ServerState>,
    Path((asset_type, name)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let kind = asset_type.parse::<AssetKind>()?;
    state.store.delete(kind, &name).await?;
    info!(%kind, %name, "asset deleted");
    Ok(Json(DeleteResponse {
        success: true,
        message: format!("{kind} deleted successfully"),
    }))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use service::file::asset_store::FsAssetStore;
    use tower::ServiceExt;
    use tower_http::cors::CorsLayer;

    use crate::routes::{build_router, ServerState};

    async fn app() -> anyhow::Result<(Router, PathBuf)> {
        let root = std::env::temp_dir().join(format!("server_routes_{}", uuid::Uuid::new_v4()));
        let store = FsAssetStore::open(root.join("assets")).await?;
        let router = build_router(ServerState { store }, CorsLayer::very_permissive(), "/nonexistent-frontend");
        Ok((router, root))
    }

    async fn call(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let res = app.clone().oneshot(req).await?;
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    fn save_req(body: Value) -> Request<Body> {
        Request::post("/api/assets/save")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn save_load_list_delete() -> anyhow::Result<()> {
        let (app, root) = app().await?;

        let (status, body) = call(&app, save_req(json!({"type": "map", "name": "dunes", "code": "sand()"}))).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["filename"], "dunes.json");

        let (status, body) = call(&app, Request::get("/api/assets/load/map/dunes").body(Body::empty())?).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["code"], "sand()");
        assert_eq!(body["data"]["type"], "map");

        let (status, body) = call(&app, Request::get("/api/assets/list/map").body(Body::empty())?).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["assets"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["assets"][0]["filename"], "dunes.json");

        let (status, _) = call(&app, Request::delete("/api/assets/delete/map/dunes").body(Body::empty())?).await?;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call(&app, Request::get("/api/assets/load/map/dunes").body(Body::empty())?).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);

        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }

    #[tokio::test]
    async fn rejects_bad_input() -> anyhow::Result<()> {
        let (app, root) = app().await?;

        let (status, body) = call(&app, save_req(json!({"type": "weapon", "name": "axe", "code": "x"}))).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap_or_default().contains("weapon"));

        let (status, _) = call(&app, save_req(json!({"type": "map", "name": "axe"}))).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(&app, save_req(json!({"type": "map", "name": "../axe", "code": "x"}))).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let req = Request::post("/api/assets/save")
            .header("content-type", "application/json")
            .body(Body::from("not json"))?;
        let (status, body) = call(&app, req).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (status, _) = call(&app, Request::get("/api/assets/list/weapon").body(Body::empty())?).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = call(&app, Request::delete("/api/assets/delete/map/ghost").body(Body::empty())?).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }
}
