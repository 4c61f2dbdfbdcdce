//! HTTP boundary: `POST /api/payments`.
//!
//! Translates JSON bodies into orchestrator calls. Amounts travel as exact
//! JSON numbers in both directions. This is the only layer that logs.

use crate::application::orchestrator::PaymentOrchestrator;
use crate::domain::payment::{DEFAULT_CURRENCY, PaymentResult, PaymentStatus};
use crate::error::Result;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestDto {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResultDto {
    pub id: u64,
    pub external_id: String,
    pub status: PaymentStatus,
    pub provider: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub gross_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub fee: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub net_amount: Decimal,
}

impl From<PaymentResult> for PaymentResultDto {
    fn from(result: PaymentResult) -> Self {
        Self {
            id: result.id(),
            external_id: result.external_id().to_string(),
            status: result.status(),
            provider: result.provider().to_string(),
            gross_amount: result.gross_amount(),
            fee: result.fee(),
            net_amount: result.net_amount(),
        }
    }
}

async fn create_payment(
    State(orchestrator): State<Arc<PaymentOrchestrator>>,
    Json(body): Json<PaymentRequestDto>,
) -> Result<Json<PaymentResultDto>> {
    match orchestrator.submit(body.amount, &body.currency).await {
        Ok(result) => {
            tracing::info!(
                id = result.id(),
                provider = result.provider(),
                status = %result.status(),
                "payment processed"
            );
            Ok(Json(result.into()))
        }
        Err(e) => {
            tracing::warn!(amount = %body.amount, error = %e, "payment rejected");
            Err(e)
        }
    }
}

pub fn router(orchestrator: Arc<PaymentOrchestrator>) -> Router {
    Router::new()
        .route("/api/payments", post(create_payment))
        .layer(TraceLayer::new_for_http())
        .with_state(orchestrator)
}

/// Binds `addr` and serves the payment API until the process is stopped.
pub async fn serve(addr: SocketAddr, orchestrator: Arc<PaymentOrchestrator>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "payment API listening");
    axum::serve(listener, router(orchestrator)).await?;
    Ok(())
}
