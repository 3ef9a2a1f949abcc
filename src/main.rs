use clap::Parser;
use price_finder::{cli, config, error, export, loader, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use price_finder_common::Catalog;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "price_finder=debug,price_finder_common=debug"
    } else {
        "price_finder=info,price_finder_common=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Search { folder, query, format, output } => {
            println!("🔎 price-finder - 商品検索\n");

            let catalog = load_catalog(&folder, &config)?;

            let output = output.unwrap_or_else(|| config.export_file.clone().into());

            match query {
                Some(query) => {
                    session::find_text(&catalog, &query, &format, &output)?;
                }
                None => {
                    let options = session::SessionOptions {
                        exit_word: config.exit_word.clone(),
                        format,
                        output,
                    };
                    session::run_interactive(&catalog, &options)?;
                }
            }
        }

        Commands::List { folder } => {
            println!("📋 price-finder - 商品一覧\n");

            let catalog = load_catalog(&folder, &config)?;
            let items: Vec<_> = catalog.iter().collect();
            print!("{}", export::table::render_table(&items));
        }

        Commands::Config { set_marker, set_export_file, show } => {
            let mut config = config;

            if let Some(marker) = set_marker {
                config.set_marker(marker)?;
                println!("✔ 目印を設定しました");
            }

            if let Some(file) = set_export_file {
                config.set_export_file(file)?;
                println!("✔ 出力ファイル名を設定しました");
            }

            if show {
                let table = config.keyword_table();
                println!("設定:");
                println!("  目印: {}", config.marker);
                println!("  拡張子: {}", config.extension);
                println!("  HTML出力: {}", config.export_file);
                println!("  終了コマンド: {}", config.exit_word);
                for (role, keywords) in table.entries() {
                    println!("  {}キーワード: {}", role, keywords.join(", "));
                }
            }
        }
    }

    Ok(())
}

fn load_catalog(folder: &Path, config: &Config) -> Result<Catalog> {
    println!("- 価格表を読み込み中...");
    let mut catalog = Catalog::new();
    let report = loader::load_prices(
        folder,
        &config.file_selector(),
        &config.keyword_table(),
        &mut catalog,
    )?;
    println!("✔ {}\n", report);
    Ok(catalog)
}
