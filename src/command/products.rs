use clap::Args;

use crate::context::Context;

use super::Command;

#[derive(Args, Clone, Debug)]
pub struct ProductsArgs {}

#[async_trait::async_trait]
impl Command for ProductsArgs {
    async fn run(&self, context: &mut Context) -> anyhow::Result<()> {
        let products = context.navs.provider().products().await?;
        if products.is_empty() {
            eprintln!(
                "No indexes found in {}",
                context.navs.provider().root().display()
            );
        }
        for product in products {
            println!("{}", product);
        }
        Ok(())
    }
}
