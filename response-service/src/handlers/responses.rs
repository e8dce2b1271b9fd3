use crate::dtos::{
    DeleteResponseBody, GenerateRequest, GenerateResponseBody, GetResponseBody,
    ListResponsesBody, ResponseData, UpdateRequest, UpdateResponseBody,
};
use crate::error::AppError;
use crate::models::ResponseRecord;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Generate text for a prompt and store the resulting record.
///
/// The prompt is validated before the provider or the store is touched. If
/// generation succeeds but the insert fails, the generated text is lost and
/// the caller must re-submit.
pub async fn generate_response(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let prompt = match req.prompt.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Err(AppError::BadRequest(anyhow::anyhow!("Prompt is required"))),
    };

    let content = state.text_provider.generate(prompt).await?;

    let record = ResponseRecord::new(prompt.to_string(), content);
    state.db.insert_response(&record).await?;

    tracing::info!(
        response_id = %record.id,
        prompt_len = prompt.len(),
        "Response generated and stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(GenerateResponseBody {
            message: "Response generated and stored".to_string(),
            data: ResponseData::from(record),
        }),
    ))
}

pub async fn list_responses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.db.find_all_responses().await?;

    Ok(Json(ListResponsesBody {
        data: records.into_iter().map(ResponseData::from).collect(),
    }))
}

pub async fn get_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .db
        .find_response(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Response not found")))?;

    Ok(Json(GetResponseBody {
        data: ResponseData::from(record),
    }))
}

/// Update the supplied fields of a stored response. Changing the prompt does
/// not re-generate content.
pub async fn update_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .db
        .update_response(&id, req.prompt.as_deref(), req.content.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Response not found")))?;

    tracing::info!(response_id = %id, "Response updated");

    Ok(Json(UpdateResponseBody {
        message: "Response updated successfully".to_string(),
        data: ResponseData::from(record),
    }))
}

pub async fn delete_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.db.delete_response(&id).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!("Response not found")));
    }

    tracing::info!(response_id = %id, "Response deleted");

    Ok(Json(DeleteResponseBody {
        message: "Response deleted successfully".to_string(),
    }))
}
