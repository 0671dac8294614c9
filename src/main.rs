use apinav::{
    command::{label::LabelArgs, products::ProductsArgs, tree::TreeArgs, Command},
    config::Config,
    context::Context,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Build navigation trees for API reference docs")]
struct Cli {
    #[command(flatten)]
    config: Config,
    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print or write the nav tree of the configured product.
    Tree(TreeArgs),
    /// Print the root label for an entity kind.
    Label(LabelArgs),
    /// List products with an index in the index directory.
    Products(ProductsArgs),
}

impl Commands {
    fn as_command(&self) -> &dyn Command {
        match self {
            Commands::Tree(args) => args,
            Commands::Label(args) => args,
            Commands::Products(args) => args,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::new(cli.config);
    let mut context = Context::new(config);
    cli.command.as_command().run(&mut context).await
}
