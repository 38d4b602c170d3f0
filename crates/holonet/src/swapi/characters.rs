use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use holonet_core::pagination::{paginate, parse_page, total_pages, PaginatedOutput, DEFAULT_LIMIT};
use holonet_core::sort::{sort_characters, SortField};
use holonet_core::swapi::Record;
use prettytable::row;

use super::SwapiClient;

#[derive(Debug, clap::Args, Clone)]
pub struct CharactersOptions {
    /// Sort field: nombre, peso, altura (upstream order when omitted)
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Page number (1-indexed)
    #[arg(short, long)]
    pub page: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: CharactersOptions, client: &SwapiClient, global: &crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Fetching characters (sort={:?}, page={:?})...",
            options.sort, options.page
        );
    }

    let output = characters_data(client, options.sort.as_deref(), options.page.as_deref()).await?;

    if options.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_characters_text(&output, options.sort.as_deref()));
    }

    Ok(())
}

/// Fetch every character, optionally sort, and cut out one page
///
/// Both parameters are validated before any upstream request is made.
/// `ordenar` takes the public Spanish field names (`nombre`, `peso`,
/// `altura`); `page` is a 1-based page number.
pub async fn characters_data(
    client: &SwapiClient,
    ordenar: Option<&str>,
    page: Option<&str>,
) -> Result<PaginatedOutput<Record>, Error> {
    let field = SortField::from_ordenar(ordenar)?;
    let page = parse_page(page)?;

    let characters = client.all_characters().await?;
    let characters = match field {
        Some(field) => sort_characters(characters, field),
        None => characters,
    };

    Ok(paginate(characters, page, DEFAULT_LIMIT))
}

fn text_field<'a>(record: &'a Record, key: &str) -> &'a str {
    record
        .get(key)
        .and_then(serde_json::Value::as_str)
        .unwrap_or("unknown")
}

fn format_characters_text(output: &PaginatedOutput<Record>, sort: Option<&str>) -> String {
    let mut result = String::new();
    let pages = total_pages(output.total, output.limit);

    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!(
        "{}\n",
        f!("CHARACTERS (Page {} of {})", output.page, pages)
            .bright_cyan()
            .bold()
    ));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));

    if output.results.is_empty() {
        result.push_str(&f!("\n{}\n", "No characters on this page.".yellow()));
    } else {
        let mut table = new_table();
        table.set_titles(row![b->"#", b->"Name", b->"Height", b->"Mass"]);

        for (idx, character) in output.results.iter().enumerate() {
            let number = (output.page - 1) * output.limit + idx + 1;
            table.add_row(row![
                Fy->number,
                b->text_field(character, "name"),
                text_field(character, "height"),
                text_field(character, "mass"),
            ]);
        }

        result.push_str(&f!("\n{}", table));
    }

    let sort_flag = sort.map(|s| f!(" --sort {s}")).unwrap_or_default();

    result.push_str(&f!("\n{}:\n", "To navigate".bright_white().bold()));
    if output.page < pages {
        result.push_str(&f!(
            "  {}: {}\n",
            "Next page".green(),
            f!("holonet swapi characters{} --page {}", sort_flag, output.page + 1).cyan()
        ));
    }
    if output.page > 1 {
        result.push_str(&f!(
            "  {}: {}\n",
            "Previous page".green(),
            f!("holonet swapi characters{} --page {}", sort_flag, output.page - 1).cyan()
        ));
    }
    result.push_str(&f!(
        "  {}: {}\n",
        "Sort".green(),
        "holonet swapi characters --sort <nombre|peso|altura>".cyan()
    ));

    result.push('\n');
    result
}
