use crate::context::Context;

pub mod label;
pub mod products;
pub mod tree;

#[async_trait::async_trait]
pub trait Command {
    /// Run the command.
    async fn run(&self, context: &mut Context) -> anyhow::Result<()>;
}
