use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use holonet_core::swapi::{Page, Record};
use prettytable::row;

use super::SwapiClient;

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Character name, or part of it
    #[clap(env = "HOLONET_SEARCH")]
    pub nombre: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, client: &SwapiClient, global: &crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Searching characters matching {:?}...", options.nombre);
    }

    let results = search_data(client, &options.nombre).await?;

    if options.json {
        let json = serde_json::to_string_pretty(&results)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_search_text(&results, &options.nombre));
    }

    Ok(())
}

/// Ask the catalog's own search for `nombre`
///
/// Returns the first page of upstream matches untouched: no further pages are
/// followed and nothing is filtered, sorted or paginated locally.
pub async fn search_data(client: &SwapiClient, nombre: &str) -> Result<Vec<Record>, FetchError> {
    let page: Page<Record> = client.fetch(&client.search_url(nombre)).await?;
    Ok(page.results)
}

fn format_search_text(results: &[Record], nombre: &str) -> String {
    if results.is_empty() {
        return f!(
            "\n{}\n",
            f!("No characters match \"{}\".", nombre).yellow()
        );
    }

    let mut table = new_table();
    table.set_titles(row![b->"Name", b->"Height", b->"Mass", b->"Birth year"]);

    for character in results {
        let field = |key: &str| {
            character
                .get(key)
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown")
                .to_string()
        };
        table.add_row(row![b->field("name"), field("height"), field("mass"), field("birth_year")]);
    }

    f!("\n{}", table)
}
