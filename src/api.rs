//! REST client for the flowl backend. All endpoints are same-origin
//! under `/api`; errors are normalized to a status plus the `message`
//! field of the error body, falling back to the HTTP status text.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::model::{
    AppInfo, CareEvent, CareEventsPage, ImportResult, Location, MqttRepairResult, MqttStatus,
    NewCareEvent, NewPlant, Plant, PlantPatch, Stats,
};

/// Backup download target; consumed as a plain link, never fetched here.
pub const EXPORT_URL: &str = "/api/data/export";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response with its normalized message.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Transport or decoding failure before a response was usable.
    #[error("{0}")]
    Network(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

async fn check(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let fallback = resp.status_text();
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or(fallback);
    Err(ApiError::Status { status, message })
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = check(Request::get(url).send().await?).await?;
    Ok(resp.json().await?)
}

fn form_with_file(file: &File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob("file", file).map_err(js_error)?;
    Ok(form)
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

pub async fn fetch_app_info() -> Result<AppInfo, ApiError> {
    get_json("/api/info").await
}

pub async fn fetch_stats() -> Result<Stats, ApiError> {
    get_json("/api/stats").await
}

pub async fn fetch_mqtt_status() -> Result<MqttStatus, ApiError> {
    get_json("/api/mqtt/status").await
}

pub async fn repair_mqtt() -> Result<MqttRepairResult, ApiError> {
    let resp = check(Request::post("/api/mqtt/repair").send().await?).await?;
    Ok(resp.json().await?)
}

pub async fn fetch_plants() -> Result<Vec<Plant>, ApiError> {
    get_json("/api/plants").await
}

pub async fn fetch_plant(id: i64) -> Result<Plant, ApiError> {
    get_json(&format!("/api/plants/{id}")).await
}

pub async fn create_plant(data: &NewPlant) -> Result<Plant, ApiError> {
    let resp = check(Request::post("/api/plants").json(data)?.send().await?).await?;
    Ok(resp.json().await?)
}

pub async fn update_plant(id: i64, data: &PlantPatch) -> Result<Plant, ApiError> {
    let resp = check(
        Request::put(&format!("/api/plants/{id}"))
            .json(data)?
            .send()
            .await?,
    )
    .await?;
    Ok(resp.json().await?)
}

pub async fn delete_plant(id: i64) -> Result<(), ApiError> {
    check(Request::delete(&format!("/api/plants/{id}")).send().await?).await?;
    Ok(())
}

pub async fn water_plant(id: i64) -> Result<Plant, ApiError> {
    let resp = check(
        Request::post(&format!("/api/plants/{id}/water"))
            .send()
            .await?,
    )
    .await?;
    Ok(resp.json().await?)
}

pub async fn upload_plant_photo(plant_id: i64, file: &File) -> Result<Plant, ApiError> {
    let form = form_with_file(file)?;
    let resp = check(
        Request::post(&format!("/api/plants/{plant_id}/photo"))
            .body(form)?
            .send()
            .await?,
    )
    .await?;
    Ok(resp.json().await?)
}

pub async fn delete_plant_photo(plant_id: i64) -> Result<(), ApiError> {
    check(
        Request::delete(&format!("/api/plants/{plant_id}/photo"))
            .send()
            .await?,
    )
    .await?;
    Ok(())
}

pub async fn fetch_care_events(plant_id: i64) -> Result<Vec<CareEvent>, ApiError> {
    get_json(&format!("/api/plants/{plant_id}/care")).await
}

pub async fn fetch_all_care_events(
    limit: Option<u32>,
    before: Option<i64>,
    event_type: Option<&str>,
) -> Result<CareEventsPage, ApiError> {
    get_json(&care_events_url(limit, before, event_type)).await
}

pub async fn create_care_event(
    plant_id: i64,
    data: &NewCareEvent,
) -> Result<CareEvent, ApiError> {
    let resp = check(
        Request::post(&format!("/api/plants/{plant_id}/care"))
            .json(data)?
            .send()
            .await?,
    )
    .await?;
    Ok(resp.json().await?)
}

pub async fn delete_care_event(plant_id: i64, event_id: i64) -> Result<(), ApiError> {
    check(
        Request::delete(&format!("/api/plants/{plant_id}/care/{event_id}"))
            .send()
            .await?,
    )
    .await?;
    Ok(())
}

pub async fn import_data(file: &File) -> Result<ImportResult, ApiError> {
    let form = form_with_file(file)?;
    let resp = check(Request::post("/api/data/import").body(form)?.send().await?).await?;
    Ok(resp.json().await?)
}

pub async fn fetch_locations() -> Result<Vec<Location>, ApiError> {
    get_json("/api/locations").await
}

pub async fn create_location(name: &str) -> Result<Location, ApiError> {
    let resp = check(
        Request::post("/api/locations")
            .json(&json!({ "name": name }))?
            .send()
            .await?,
    )
    .await?;
    Ok(resp.json().await?)
}

pub async fn update_location(id: i64, name: &str) -> Result<Location, ApiError> {
    let resp = check(
        Request::put(&format!("/api/locations/{id}"))
            .json(&json!({ "name": name }))?
            .send()
            .await?,
    )
    .await?;
    Ok(resp.json().await?)
}

pub async fn delete_location(id: i64) -> Result<(), ApiError> {
    check(
        Request::delete(&format!("/api/locations/{id}"))
            .send()
            .await?,
    )
    .await?;
    Ok(())
}

/// Query string for the global care timeline; omitted parameters are
/// left out entirely.
fn care_events_url(limit: Option<u32>, before: Option<i64>, event_type: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(limit) = limit {
        params.push(format!("limit={limit}"));
    }
    if let Some(before) = before {
        params.push(format!("before={before}"));
    }
    if let Some(event_type) = event_type {
        params.push(format!("type={event_type}"));
    }
    if params.is_empty() {
        "/api/care".to_string()
    } else {
        format!("/api/care?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn care_url_without_params_has_no_query() {
        assert_eq!(care_events_url(None, None, None), "/api/care");
    }

    #[test]
    fn care_url_with_all_params() {
        assert_eq!(
            care_events_url(Some(20), Some(184), Some("watered")),
            "/api/care?limit=20&before=184&type=watered"
        );
    }

    #[test]
    fn care_url_skips_absent_params() {
        assert_eq!(care_events_url(Some(20), None, None), "/api/care?limit=20");
        assert_eq!(
            care_events_url(None, Some(9), Some("custom")),
            "/api/care?before=9&type=custom"
        );
    }

    #[test]
    fn status_error_displays_its_message() {
        let err = ApiError::Status {
            status: 404,
            message: "plant not found".to_string(),
        };
        assert_eq!(err.to_string(), "plant not found");
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = PlantPatch {
            name: Some("Monstera".to_string()),
            location_id: Some(None),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        let fields = value.as_object().unwrap();
        assert_eq!(fields["name"], "Monstera");
        // Clearing the location sends an explicit null.
        assert!(fields.contains_key("location_id"));
        assert!(fields["location_id"].is_null());
        assert!(!fields.contains_key("species"));
        assert!(!fields.contains_key("watering_interval_days"));
    }
}
