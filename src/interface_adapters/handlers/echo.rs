use crate::domain::errors::EchoError;
use crate::interface_adapters::protocol::{EchoQuery, EchoResponse, ErrorResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::echo::EchoUseCase;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::warn;

// Echo the query text back with optional case transform and repetition.
pub async fn echo(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EchoQuery>,
) -> Result<Json<EchoResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = EchoUseCase {
        max_repetitions: state.max_repetitions,
    };

    let response_string = use_case.execute(query).map_err(map_echo_error)?;

    Ok(Json(EchoResponse { response_string }))
}

// Maps domain errors to the fixed wire error contract.
fn map_echo_error(err: EchoError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        EchoError::EmptyText => {
            warn!("rejected echo request with empty data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "bad input".to_string(),
                    status: 500,
                }),
            )
        }
    }
}
