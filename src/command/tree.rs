use std::path::PathBuf;

use clap::{Args, ValueEnum};
use stanza::{
    renderer::{console::Console, Renderer as _},
    style::{Header, Styles},
    table::{Row, Table},
};

use crate::{
    context::Context,
    nav::{NavDataNode, NavTree},
};

use super::Command;

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
    Table,
}

#[derive(Args, Clone, Debug)]
pub struct TreeArgs {
    /// The output format.
    #[arg(long, default_value = "json", value_enum)]
    format: OutputFormat,
    /// Write the tree as JSON to this file instead of printing it.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

trait Outputs {
    fn render(&self, tree: &NavTree) -> anyhow::Result<String>;
}

struct JsonOutput;

impl Outputs for JsonOutput {
    fn render(&self, tree: &NavTree) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(tree)?)
    }
}

struct TextOutput;

impl TextOutput {
    fn render_node(node: &NavDataNode, depth: usize, out: &mut String) {
        out.push_str(&format!(
            "{:indent$}{}  {}\n",
            "",
            node.name,
            node.url_path,
            indent = depth * 2
        ));
        for child in node.children.values() {
            Self::render_node(child, depth + 1, out);
        }
    }
}

impl Outputs for TextOutput {
    fn render(&self, tree: &NavTree) -> anyhow::Result<String> {
        let mut out = String::new();
        for (_, root) in tree.iter() {
            Self::render_node(root, 0, &mut out);
        }
        Ok(out)
    }
}

struct TableOutput;

impl Outputs for TableOutput {
    fn render(&self, tree: &NavTree) -> anyhow::Result<String> {
        let mut table = Table::default().with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Category".into(),
                "Name".into(),
                "Path".into(),
                "Methods".into(),
            ],
        ));
        for (label, root) in tree.iter() {
            for entry in root.children.values() {
                table.push_row(vec![
                    label.to_string(),
                    entry.name.clone(),
                    entry.url_path.clone(),
                    entry.children.len().to_string(),
                ]);
            }
        }
        let renderer = Console::default();
        Ok(renderer.render(&table).to_string())
    }
}

impl OutputFormat {
    fn to_output(self) -> Box<dyn Outputs> {
        match self {
            OutputFormat::Json => Box::new(JsonOutput),
            OutputFormat::Text => Box::new(TextOutput),
            OutputFormat::Table => Box::new(TableOutput),
        }
    }
}

#[async_trait::async_trait]
impl Command for TreeArgs {
    async fn run(&self, context: &mut Context) -> anyhow::Result<()> {
        let product = context.config.product();
        let navs = &context.navs;
        let builder = tokio::task::block_in_place(|| navs.get_instance(&product))?;
        let tree = builder.build_nav_tree();

        match &self.output {
            Some(path) => {
                context.write_json(path, &tree).await?;
                tracing::info!(%product, path = %path.display(), "wrote nav tree");
            }
            None => print!("{}", self.format.to_output().render(&tree)?),
        }
        Ok(())
    }
}
