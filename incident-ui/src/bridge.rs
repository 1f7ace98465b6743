use gloo_net::http::{Request, Response};
use incident_api::dto::{
    AllIncidentsBody, DashboardReport, GenerateResponseBody, GenerateResponseRequest,
    IncidentRecord, IncidentTypesBody, LoginBody, LoginRequest, LookupItem, RecentIncident,
    RecentIncidentsBody, RegisterBody, RegisterRequest, SeverityLevelsBody, Session, SubmitReport,
    attachment_field,
};
use incident_api::{routes, ApiConfig, ApiEnvelope, ApiError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

fn config() -> ApiConfig {
    ApiConfig::from_build_env()
}

fn request_error(e: impl std::fmt::Display) -> ApiError {
    ApiError::Request(e.to_string())
}

async fn read_envelope<T>(resp: Response) -> Result<(bool, ApiEnvelope<T>), ApiError>
where
    T: DeserializeOwned,
{
    let ok = resp.ok();
    let text = resp.text().await.map_err(request_error)?;
    Ok((ok, ApiEnvelope::decode(&text)?))
}

async fn get<T>(path: &str) -> Result<(bool, ApiEnvelope<T>), ApiError>
where
    T: DeserializeOwned,
{
    let url = config().endpoint(path);
    log::debug!("GET {url}");
    let resp = Request::get(&url).send().await.map_err(request_error)?;
    read_envelope(resp).await
}

async fn post<A, T>(path: &str, body: &A) -> Result<(bool, ApiEnvelope<T>), ApiError>
where
    A: Serialize,
    T: DeserializeOwned,
{
    let url = config().endpoint(path);
    log::debug!("POST {url}");
    let resp = Request::post(&url)
        .json(body)
        .map_err(request_error)?
        .send()
        .await
        .map_err(request_error)?;
    read_envelope(resp).await
}

/// Body of a read endpoint; failure envelopes without a body read as empty.
async fn body_or_default<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let (_, envelope) = get::<T>(path).await?;
    Ok(envelope.body.unwrap_or_default())
}

pub async fn login(req: &LoginRequest) -> Result<Session, ApiError> {
    let (ok, envelope) = post::<_, LoginBody>(routes::LOGIN, req).await?;
    req.session(ok, envelope)
}

pub async fn register(req: &RegisterRequest) -> Result<Session, ApiError> {
    let (ok, envelope) = post::<_, RegisterBody>(routes::REGISTER, req).await?;
    req.session(ok, envelope)
}

pub async fn dashboard_report() -> Result<Option<DashboardReport>, ApiError> {
    let (_, envelope) = get::<DashboardReport>(routes::DASHBOARD_REPORT).await?;
    Ok(envelope.body)
}

pub async fn recent_incidents() -> Result<Vec<RecentIncident>, ApiError> {
    Ok(body_or_default::<RecentIncidentsBody>(routes::RECENT_INCIDENTS)
        .await?
        .recent_incidents)
}

pub async fn all_incidents() -> Result<Vec<IncidentRecord>, ApiError> {
    Ok(body_or_default::<AllIncidentsBody>(routes::ALL_INCIDENTS)
        .await?
        .incidents)
}

async fn lookup<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let (ok, envelope) = get::<T>(path).await?;
    if !ok {
        return Err(ApiError::Status {
            status: envelope.status_code.unwrap_or_default(),
            message: envelope.message,
        });
    }
    Ok(envelope.body.unwrap_or_default())
}

pub async fn incident_types() -> Result<Vec<LookupItem>, ApiError> {
    Ok(lookup::<IncidentTypesBody>(routes::INCIDENT_TYPES)
        .await?
        .emergency_types)
}

pub async fn severity_levels() -> Result<Vec<LookupItem>, ApiError> {
    Ok(lookup::<SeverityLevelsBody>(routes::SEVERITY_LEVELS)
        .await?
        .severity_levels)
}

pub async fn generate_response(req: &GenerateResponseRequest) -> Result<Option<String>, ApiError> {
    let (_, envelope) = post::<_, GenerateResponseBody>(routes::GENERATE_RESPONSE, req).await?;
    Ok(envelope.body.and_then(|b| b.response))
}

pub async fn submit_report(report: &SubmitReport, files: &[File]) -> Result<(), ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    for (name, value) in report.form_fields() {
        form.append_with_str(name, &value)
            .map_err(|e| ApiError::Request(format!("{e:?}")))?;
    }
    for file in files {
        let Some(field) = attachment_field(&file.type_()) else {
            log::info!("skipping attachment {} of type {}", file.name(), file.type_());
            continue;
        };
        form.append_with_blob_and_filename(field, file, &file.name())
            .map_err(|e| ApiError::Request(format!("{e:?}")))?;
    }

    let url = config().submit_endpoint();
    log::info!("submitting report to {url}");
    let resp = Request::post(&url)
        .body(form)
        .map_err(request_error)?
        .send()
        .await
        .map_err(request_error)?;
    if !resp.ok() {
        return Err(ApiError::Status {
            status: resp.status(),
            message: None,
        });
    }
    Ok(())
}
