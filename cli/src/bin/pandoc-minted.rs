//! pandoc-minted - render code as minted listings

use clap::Parser;

use panlatex::{MintedFilter, MintedOptions};
use panlatex_cli::FilterArgs;

#[derive(Parser)]
#[command(name = "pandoc-minted")]
#[command(version)]
#[command(about = "Pandoc filter rendering code blocks and inline code with minted", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: FilterArgs,

    /// Output format the filter acts on
    #[arg(long, env = "PANDOC_MINTED_TARGET", default_value = panlatex::latex::DEFAULT_TARGET_FORMAT)]
    target_format: String,

    /// Language for code without a class
    #[arg(long, env = "PANDOC_MINTED_LANGUAGE", default_value = panlatex::latex::DEFAULT_LANGUAGE)]
    default_language: String,
}

fn main() {
    panlatex_cli::init_logging();

    let cli = Cli::parse();
    let options = MintedOptions::new()
        .with_target_format(cli.target_format)
        .with_default_language(cli.default_language);

    let mut filter = match MintedFilter::try_new(options) {
        Ok(filter) => filter,
        Err(e) => panlatex_cli::exit_with_error(&e),
    };

    if let Err(e) = panlatex_cli::run(&mut filter, &cli.args) {
        panlatex_cli::exit_with_error(&*e);
    }
}
