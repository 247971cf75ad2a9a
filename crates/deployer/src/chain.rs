//! Production implementation of the chain boundary on top of alloy.

use {
    crate::{error::Error, traits::ChainWrite},
    alloy::{
        network::EthereumWallet,
        primitives::Address,
        providers::{DynProvider, Provider, ProviderBuilder},
        signers::local::PrivateKeySigner,
    },
    anyhow::Context,
    contracts::{DAppToken, LPToken, TokenFarm},
    url::Url,
};

pub struct Onchain {
    provider: DynProvider,
}

impl Onchain {
    /// Connects to the node and registers the signer for all outgoing
    /// transactions.
    pub async fn connect(node_url: &Url, signer: PrivateKeySigner) -> anyhow::Result<Self> {
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::new(signer))
            .connect(node_url.as_str())
            .await
            .context("failed to connect to the node")?;
        let chain_id = provider
            .get_chain_id()
            .await
            .context("could not fetch current chain id")?;
        tracing::info!(chain_id, "connected to test network");

        Ok(Self {
            provider: provider.erased(),
        })
    }
}

#[async_trait::async_trait]
impl ChainWrite for Onchain {
    async fn deploy_dapp_token(&self, initial_owner: Address) -> Result<Address, Error> {
        let instance = DAppToken::Instance::deploy(self.provider.clone(), initial_owner)
            .await
            .map_err(|err| Error::Deployment {
                contract: "DAppToken",
                cause: err.into(),
            })?;
        Ok(*instance.address())
    }

    async fn deploy_lp_token(&self, initial_owner: Address) -> Result<Address, Error> {
        let instance = LPToken::Instance::deploy(self.provider.clone(), initial_owner)
            .await
            .map_err(|err| Error::Deployment {
                contract: "LPToken",
                cause: err.into(),
            })?;
        Ok(*instance.address())
    }

    async fn deploy_token_farm(
        &self,
        dapp_token: Address,
        lp_token: Address,
    ) -> Result<Address, Error> {
        let instance = TokenFarm::Instance::deploy(self.provider.clone(), dapp_token, lp_token)
            .await
            .map_err(|err| Error::Deployment {
                contract: "TokenFarm",
                cause: err.into(),
            })?;
        Ok(*instance.address())
    }

    async fn transfer_dapp_token_ownership(
        &self,
        dapp_token: Address,
        new_owner: Address,
    ) -> Result<(), Error> {
        let instance = DAppToken::Instance::new(dapp_token, self.provider.clone());
        instance
            .transferOwnership(new_owner)
            .send()
            .await
            .map_err(|err| Error::call_failed("DAppToken", "transferOwnership", err.into()))?
            .watch()
            .await
            .map_err(|err| Error::call_failed("DAppToken", "transferOwnership", err.into()))?;
        Ok(())
    }
}
