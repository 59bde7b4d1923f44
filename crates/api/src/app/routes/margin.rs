use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use profitlens_catalog::ProductFinancials;
use profitlens_margin::{CalculationInputs, MarginReport, aggregate_inputs};

use crate::app::dto::{MarginResponse, ReportResponse};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/analyze", post(analyze))
        .route("/report", post(report))
}

/// Run the calculator on caller-supplied inputs once they are within limits.
pub async fn calculate(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CalculationInputs>, JsonRejection>,
) -> axum::response::Response {
    let Json(inputs) = match body {
        Ok(v) => v,
        Err(rejection) => return invalid_body(rejection),
    };

    if let Err(e) = inputs.validate() {
        tracing::info!(error = %e, "rejected calculation inputs");
        return errors::domain_error_to_response(e);
    }

    let report = MarginReport::compute(inputs);
    let flag = report.flag(services.alert_threshold());
    tracing::debug!(%flag, orders = report.inputs.order_details.len(), "margin calculated");

    (StatusCode::OK, Json(MarginResponse { report, flag })).into_response()
}

/// Aggregate raw product records, then calculate.
pub async fn analyze(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductFinancials>, JsonRejection>,
) -> axum::response::Response {
    let Json(financials) = match body {
        Ok(v) => v,
        Err(rejection) => return invalid_body(rejection),
    };

    let inputs = match aggregate_inputs(&financials) {
        Ok(v) => v,
        Err(e) => {
            tracing::info!(product_id = %financials.product.id, error = %e, "rejected financial records");
            return errors::domain_error_to_response(e);
        }
    };

    let report = MarginReport::compute(inputs);
    let flag = report.flag(services.alert_threshold());
    tracing::debug!(product_id = %financials.product.id, %flag, "product margin analyzed");

    (StatusCode::OK, Json(MarginResponse { report, flag })).into_response()
}

/// Full pipeline: calculation, agent insights, recommendations.
pub async fn report(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductFinancials>, JsonRejection>,
) -> axum::response::Response {
    let Json(financials) = match body {
        Ok(v) => v,
        Err(rejection) => return invalid_body(rejection),
    };

    let output = match services.pipeline().run(&financials).await {
        Ok(v) => v,
        Err(e) => return errors::agent_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(ReportResponse::from_output(output, services.currency())),
    )
        .into_response()
}

fn invalid_body(rejection: JsonRejection) -> axum::response::Response {
    errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}
