//! The deployment sequence itself.
//!
//! Strictly sequential: every transaction is awaited to confirmation before
//! the next one is submitted, and the first failure aborts the remaining
//! steps. Partially committed on-chain state after a mid-sequence failure is
//! accepted; this is a best-effort setup script for a development network,
//! not a transactional deployment.

use {
    crate::{error::Error, traits::ChainWrite},
    alloy::primitives::Address,
};

/// Addresses of a completed deployment. `Display` renders the final banner.
#[derive(Debug)]
pub struct Deployment {
    pub dapp_token: Address,
    pub lp_token: Address,
    pub token_farm: Address,
}

impl std::fmt::Display for Deployment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Contract addresses:")?;
        writeln!(f, "DApp Token: {}", self.dapp_token)?;
        writeln!(f, "LP Token: {}", self.lp_token)?;
        writeln!(f, "Token Farm: {}", self.token_farm)?;
        write!(f, "{}", "=".repeat(50))
    }
}

/// Deploys the two tokens and the farm, then hands `DAppToken`'s ownership to
/// the farm so it can mint rewards.
///
/// `TokenFarm` consumes the token addresses in its constructor, so the token
/// deployments must have been confirmed before it can be created.
pub async fn run(chain: &dyn ChainWrite, admin: Address) -> Result<Deployment, Error> {
    tracing::info!(owner = ?admin, "deploying DAppToken");
    let dapp_token = chain.deploy_dapp_token(admin).await?;
    tracing::info!(address = ?dapp_token, "DAppToken deployed");

    tracing::info!(owner = ?admin, "deploying LPToken");
    let lp_token = chain.deploy_lp_token(admin).await?;
    tracing::info!(address = ?lp_token, "LPToken deployed");

    tracing::info!("deploying TokenFarm");
    let token_farm = chain.deploy_token_farm(dapp_token, lp_token).await?;
    tracing::info!(address = ?token_farm, "TokenFarm deployed");

    tracing::info!(new_owner = ?token_farm, "transferring DAppToken ownership to TokenFarm");
    chain
        .transfer_dapp_token_ownership(dapp_token, token_farm)
        .await?;
    tracing::info!("ownership transferred");

    Ok(Deployment {
        dapp_token,
        lp_token,
        token_farm,
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::traits::MockChainWrite,
        anyhow::anyhow,
        mockall::{Sequence, predicate::eq},
    };

    fn addr(byte: u8) -> Address {
        Address::with_last_byte(byte)
    }

    #[tokio::test]
    async fn deploys_in_order_and_wires_addresses() {
        let admin = addr(0xad);
        let (dapp, lp, farm) = (addr(1), addr(2), addr(3));

        let mut chain = MockChainWrite::new();
        let mut seq = Sequence::new();
        chain
            .expect_deploy_dapp_token()
            .with(eq(admin))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(dapp));
        chain
            .expect_deploy_lp_token()
            .with(eq(admin))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(lp));
        chain
            .expect_deploy_token_farm()
            .with(eq(dapp), eq(lp))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(farm));
        chain
            .expect_transfer_dapp_token_ownership()
            .with(eq(dapp), eq(farm))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let deployment = run(&chain, admin).await.unwrap();
        assert_eq!(deployment.dapp_token, dapp);
        assert_eq!(deployment.lp_token, lp);
        assert_eq!(deployment.token_farm, farm);
    }

    #[tokio::test]
    async fn failing_token_deployment_short_circuits() {
        let admin = addr(0xad);
        let dapp = addr(1);

        let mut chain = MockChainWrite::new();
        chain
            .expect_deploy_dapp_token()
            .times(1)
            .returning(move |_| Ok(dapp));
        chain
            .expect_deploy_lp_token()
            .times(1)
            .returning(|_| {
                Err(Error::Deployment {
                    contract: "LPToken",
                    cause: anyhow!("node rejected the transaction"),
                })
            });
        chain.expect_deploy_token_farm().times(0);
        chain.expect_transfer_dapp_token_ownership().times(0);

        let err = run(&chain, admin).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Deployment {
                contract: "LPToken",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn reverted_ownership_transfer_aborts_the_banner() {
        let admin = addr(0xad);
        let (dapp, lp, farm) = (addr(1), addr(2), addr(3));

        let mut chain = MockChainWrite::new();
        chain
            .expect_deploy_dapp_token()
            .times(1)
            .returning(move |_| Ok(dapp));
        chain
            .expect_deploy_lp_token()
            .times(1)
            .returning(move |_| Ok(lp));
        chain
            .expect_deploy_token_farm()
            .times(1)
            .returning(move |_, _| Ok(farm));
        chain
            .expect_transfer_dapp_token_ownership()
            .with(eq(dapp), eq(farm))
            .times(1)
            .returning(|_, _| {
                Err(Error::Authorization {
                    contract: "DAppToken",
                    method: "transferOwnership",
                })
            });

        let err = run(&chain, admin).await.unwrap_err();
        assert!(matches!(err, Error::Authorization { .. }));
    }

    #[test]
    fn banner_lists_all_addresses_under_their_labels() {
        let deployment = Deployment {
            dapp_token: addr(1),
            lp_token: addr(2),
            token_farm: addr(3),
        };
        let banner = deployment.to_string();
        assert!(banner.contains(&format!("DApp Token: {}", addr(1))));
        assert!(banner.contains(&format!("LP Token: {}", addr(2))));
        assert!(banner.contains(&format!("Token Farm: {}", addr(3))));
    }
}
