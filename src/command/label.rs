use clap::Args;

use crate::{context::Context, entity::EntityKind, nav::NavTreeBuilder};

use super::Command;

#[derive(Args, Clone, Debug)]
pub struct LabelArgs {
    /// The entity kind, e.g. `class` or `Traits`.
    kind: EntityKind,
}

#[async_trait::async_trait]
impl Command for LabelArgs {
    async fn run(&self, _context: &mut Context) -> anyhow::Result<()> {
        println!("{}", NavTreeBuilder::root_label_for(self.kind));
        Ok(())
    }
}
