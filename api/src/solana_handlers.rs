//! Solana passthrough handlers

use crate::{ApiError, ApiResult, ApiState};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub public_key: String,
    pub lamports: u64,
    pub owner: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSolRequest {
    pub recipient_public_key: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SendSolResponse {
    pub message: String,
    pub signature: String,
}

/// Look up balance and owner for a chain account.
///
/// Every call re-queries the provider. A malformed key surfaces as the
/// same generic provider error as any other RPC failure.
pub async fn get_account(
    State(state): State<ApiState>,
    Path(public_key): Path<String>,
) -> ApiResult<Json<AccountResponse>> {
    let summary = state.chain.account_summary(&public_key).await.map_err(|e| {
        tracing::error!(error = %e, "Error retrieving Solana account");
        ApiError::Upstream("Failed to retrieve Solana account".to_string())
    })?;

    match summary {
        Some(account) => Ok(Json(AccountResponse {
            public_key: account.public_key,
            lamports: account.lamports,
            owner: account.owner,
        })),
        None => Err(ApiError::NotFound("Account not found".to_string())),
    }
}

/// Send SOL from the configured wallet to another account.
pub async fn send_sol(
    State(state): State<ApiState>,
    Json(req): Json<SendSolRequest>,
) -> ApiResult<Json<SendSolResponse>> {
    // A zero amount is rejected the same way as an absent one.
    let recipient = req.recipient_public_key.filter(|r| !r.is_empty());
    let amount = req.amount.filter(|a| *a != 0.0);

    let (Some(recipient), Some(amount)) = (recipient, amount) else {
        return Err(ApiError::BadRequest(
            "Recipient public key and amount are required".to_string(),
        ));
    };

    let signature = state.chain.transfer_sol(&recipient, amount).await.map_err(|e| {
        tracing::error!(error = %e, "Error sending transaction");
        ApiError::Upstream("Failed to send SOL".to_string())
    })?;

    Ok(Json(SendSolResponse {
        message: "Transaction sent successfully".to_string(),
        signature,
    }))
}
