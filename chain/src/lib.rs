//! Solana ledger access
//!
//! Wraps the RPC client behind the two operations the service needs:
//! reading an account and sending a SOL transfer from the configured
//! signing keypair. Nothing is cached; every call re-queries the
//! provider.

use solana_client::client_error::ClientError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::native_token::sol_to_lamports;
use solana_sdk::pubkey::{ParsePubkeyError, Pubkey};
use solana_sdk::signature::{read_keypair_file, Keypair, Signer};
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Public devnet RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Confirmation polling cadence after a transfer is submitted.
const CONFIRM_POLL_INTERVAL: Duration = Duration::from_millis(500);
const CONFIRM_ATTEMPTS: usize = 60;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Invalid public key: {0}")]
    InvalidPubkey(#[from] ParsePubkeyError),

    #[error("RPC request failed: {0}")]
    Rpc(#[from] ClientError),

    #[error("Failed to read keypair file: {0}")]
    KeypairFile(String),

    #[error("No signing keypair configured")]
    SignerMissing,

    #[error("Transaction {0} was not confirmed in time")]
    Unconfirmed(String),
}

/// Account fields relayed from the provider.
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub public_key: String,
    pub lamports: u64,
    pub owner: String,
}

/// RPC client plus the optional transfer-signing keypair.
pub struct ChainClient {
    rpc: RpcClient,
    signer: Option<Keypair>,
}

impl ChainClient {
    /// Create a client against the given RPC endpoint.
    ///
    /// Reads and confirmation checks use the `confirmed` commitment
    /// level. Transfers require `signer`; without one the service can
    /// still serve account lookups.
    pub fn new(rpc_url: impl Into<String>, signer: Option<Keypair>) -> Self {
        ChainClient {
            rpc: RpcClient::new_with_commitment(rpc_url.into(), CommitmentConfig::confirmed()),
            signer,
        }
    }

    /// Address transfers are sent from, when a signer is configured.
    pub fn signer_pubkey(&self) -> Option<Pubkey> {
        self.signer.as_ref().map(|keypair| keypair.pubkey())
    }

    /// Load a Solana CLI JSON keypair file.
    pub fn load_keypair(path: impl AsRef<Path>) -> Result<Keypair, ChainError> {
        read_keypair_file(&path)
            .map_err(|e| ChainError::KeypairFile(format!("{}: {}", path.as_ref().display(), e)))
    }

    /// Fetch balance and owner for an account.
    ///
    /// Returns `Ok(None)` when the provider reports no such account. A
    /// malformed key string fails the whole call.
    pub async fn account_summary(
        &self,
        pubkey_str: &str,
    ) -> Result<Option<AccountSummary>, ChainError> {
        let pubkey = Pubkey::from_str(pubkey_str)?;

        let account = self
            .rpc
            .get_account_with_commitment(&pubkey, self.rpc.commitment())
            .await?
            .value;

        Ok(account.map(|account| AccountSummary {
            public_key: pubkey.to_string(),
            lamports: account.lamports,
            owner: account.owner.to_string(),
        }))
    }

    /// Send `amount_sol` from the configured signer to `recipient` and
    /// wait until the ledger confirms the transaction.
    ///
    /// Submission runs preflight checks at the `processed` level. The
    /// transfer is not retried and carries no idempotency key; a caller
    /// that resubmits after a transport error can double-spend.
    pub async fn transfer_sol(&self, recipient: &str, amount_sol: f64) -> Result<String, ChainError> {
        let signer = self.signer.as_ref().ok_or(ChainError::SignerMissing)?;
        let recipient = Pubkey::from_str(recipient)?;
        let lamports = sol_to_lamports(amount_sol);

        let instruction = system_instruction::transfer(&signer.pubkey(), &recipient, lamports);
        let blockhash = self.rpc.get_latest_blockhash().await?;
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&signer.pubkey()),
            &[signer],
            blockhash,
        );

        let signature = self
            .rpc
            .send_transaction_with_config(
                &transaction,
                RpcSendTransactionConfig {
                    skip_preflight: false,
                    preflight_commitment: Some(CommitmentLevel::Processed),
                    ..Default::default()
                },
            )
            .await?;

        tracing::info!(%signature, to = %recipient, lamports, "transfer submitted");

        for _ in 0..CONFIRM_ATTEMPTS {
            if self.rpc.confirm_transaction(&signature).await? {
                return Ok(signature.to_string());
            }
            tokio::time::sleep(CONFIRM_POLL_INTERVAL).await;
        }

        Err(ChainError::Unconfirmed(signature.to_string()))
    }
}
