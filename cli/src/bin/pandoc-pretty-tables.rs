//! pandoc-pretty-tables - render captioned tables as ruled LaTeX tabulars

use clap::Parser;

use panlatex::{PrettyTablesFilter, TableOptions};
use panlatex_cli::FilterArgs;

#[derive(Parser)]
#[command(name = "pandoc-pretty-tables")]
#[command(version)]
#[command(about = "Pandoc filter rendering tables as fully ruled LaTeX tabulars", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: FilterArgs,

    /// Output format the filter acts on
    #[arg(long, env = "PANDOC_TABLES_TARGET", default_value = panlatex::latex::DEFAULT_TARGET_FORMAT)]
    target_format: String,

    /// Float placement specifier; empty for none
    #[arg(long, env = "PANDOC_TABLES_PLACEMENT", default_value = "h")]
    placement: String,
}

fn main() {
    panlatex_cli::init_logging();

    let cli = Cli::parse();
    let mut filter = PrettyTablesFilter::new(
        TableOptions::new()
            .with_target_format(cli.target_format)
            .with_placement(cli.placement),
    );

    if let Err(e) = panlatex_cli::run(&mut filter, &cli.args) {
        panlatex_cli::exit_with_error(&*e);
    }
}
