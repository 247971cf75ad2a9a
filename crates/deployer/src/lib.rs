pub mod arguments;
pub mod chain;
pub mod deployment;
pub mod error;
pub mod traits;

pub async fn main(args: arguments::Arguments) -> anyhow::Result<()> {
    let signer = args.private_key;
    let admin = args.admin.unwrap_or_else(|| signer.address());
    let chain = chain::Onchain::connect(&args.node_url, signer).await?;
    let deployment = deployment::run(&chain, admin).await?;

    // The final banner is the script's output contract, so it goes to stdout
    // as is rather than through the log formatter.
    println!("{deployment}");
    Ok(())
}
