use {
    alloy::{primitives::Address, signers::local::PrivateKeySigner},
    clap::Parser,
    url::Url,
};

/// First pre-funded development account of both Hardhat and Anvil. Publicly
/// known, only ever usable against a local test node.
const DEV_ACCOUNT_0_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Private key used to sign all deployment transactions.
    #[clap(long, env, default_value = DEV_ACCOUNT_0_KEY, hide_default_value = true)]
    pub private_key: PrivateKeySigner,

    /// Account set as the initial owner of both token contracts.
    /// Defaults to the signer's own address.
    #[clap(long, env)]
    pub admin: Option<Address>,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "private_key: SECRET")?;
        writeln!(f, "admin: {:?}", self.admin)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address};

    #[test]
    fn defaults() {
        let args = Arguments::try_parse_from(["deployer"]).unwrap();
        assert_eq!(args.node_url.as_str(), "http://localhost:8545/");
        assert_eq!(
            args.private_key.address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
        );
        assert_eq!(args.admin, None);
    }

    #[test]
    fn explicit_admin() {
        let args = Arguments::try_parse_from([
            "deployer",
            "--admin",
            "0x000000000000000000000000000000000000beef",
        ])
        .unwrap();
        assert_eq!(
            args.admin,
            Some(address!("0x000000000000000000000000000000000000beef")),
        );
    }

    #[test]
    fn display_does_not_leak_the_key() {
        let args = Arguments::try_parse_from(["deployer"]).unwrap();
        let displayed = args.to_string();
        assert!(displayed.contains("private_key: SECRET"));
        assert!(!displayed.contains("ac0974be"));
    }
}
