//! Error taxonomy for the deployment sequence.
//!
//! Nothing here is recovered from locally. Every variant propagates unchanged
//! to `main`, which logs it and terminates the process with a nonzero exit
//! code.

/// Revert payloads produced by OpenZeppelin's `Ownable` when the caller is
/// not the owner: the custom error introduced in v5 (by name and by its
/// 4-byte selector) and the legacy require reason string.
const UNAUTHORIZED_MARKERS: &[&str] = &[
    "OwnableUnauthorizedAccount",
    "0x118cdaa7",
    "caller is not the owner",
];

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A contract creation transaction was rejected, reverted in its
    /// constructor or never got confirmed.
    #[error("deployment of {contract} failed: {cause:#}")]
    Deployment {
        contract: &'static str,
        cause: anyhow::Error,
    },

    /// A post-deployment call was rejected or reverted.
    #[error("{method} on {contract} failed: {cause:#}")]
    Transaction {
        contract: &'static str,
        method: &'static str,
        cause: anyhow::Error,
    },

    /// A guarded method reverted because the caller lacks permission.
    #[error("caller is not allowed to call {method} on {contract}")]
    Authorization {
        contract: &'static str,
        method: &'static str,
    },
}

impl Error {
    /// Classifies a failed post-deployment call. Ownership guard reverts
    /// become [`Error::Authorization`], everything else stays a plain
    /// [`Error::Transaction`].
    pub fn call_failed(
        contract: &'static str,
        method: &'static str,
        cause: anyhow::Error,
    ) -> Self {
        let message = format!("{cause:#}");
        if UNAUTHORIZED_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
        {
            Self::Authorization { contract, method }
        } else {
            Self::Transaction {
                contract,
                method,
                cause,
            }
        }
    }
}
