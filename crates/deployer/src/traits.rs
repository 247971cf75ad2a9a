//! Trait definition for the chain boundary.
//!
//! This abstracts the deployment and transaction submission so the sequencing
//! logic can be unit tested with mocks.

use {crate::error::Error, alloy::primitives::Address};

/// Abstracts blockchain write operations. Every method submits a transaction
/// and waits for it to be confirmed before returning.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChainWrite: Send + Sync {
    /// Deploys `DAppToken` with the given initial owner, returning the
    /// address the contract ended up at.
    async fn deploy_dapp_token(&self, initial_owner: Address) -> Result<Address, Error>;

    /// Deploys `LPToken` with the given initial owner.
    async fn deploy_lp_token(&self, initial_owner: Address) -> Result<Address, Error>;

    /// Deploys `TokenFarm` wired to the two previously deployed token
    /// contracts. The constructor takes the reward token first and the
    /// staking token second.
    async fn deploy_token_farm(
        &self,
        dapp_token: Address,
        lp_token: Address,
    ) -> Result<Address, Error>;

    /// Hands administrative control of the `DAppToken` instance at
    /// `dapp_token` over to `new_owner`.
    async fn transfer_dapp_token_ownership(
        &self,
        dapp_token: Address,
        new_owner: Address,
    ) -> Result<(), Error>;
}
