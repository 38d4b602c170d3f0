use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use holonet_core::swapi::{resident_plan, stamp_homeworld, Record, HOMEWORLD};
use prettytable::row;

use super::SwapiClient;

#[derive(Debug, clap::Args, Clone)]
pub struct ResidentsOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ResidentsOptions, client: &SwapiClient, global: &crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching planets and their residents...");
    }

    let residents = residents_data(client).await?;

    if options.json {
        let json = serde_json::to_string_pretty(&residents)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_residents_text(&residents));
    }

    Ok(())
}

/// Fetch every planet resident, stamped with its homeworld name
///
/// Planets are visited in name order and each planet's residents in upstream
/// order. Resident details are fetched one at a time; the first failure
/// aborts the whole listing.
pub async fn residents_data(client: &SwapiClient) -> Result<Vec<Record>, FetchError> {
    let planets = client.all_planets().await?;
    let plan = resident_plan(planets);

    let mut residents = Vec::with_capacity(plan.len());
    for link in plan {
        let resident: Record = client.fetch(&link.url).await?;
        residents.push(stamp_homeworld(resident, &link.homeworld));
    }

    log::info!("Enriched {} residents", residents.len());

    Ok(residents)
}

fn text_field<'a>(record: &'a Record, key: &str) -> &'a str {
    record
        .get(key)
        .and_then(serde_json::Value::as_str)
        .unwrap_or("unknown")
}

fn format_residents_text(residents: &[Record]) -> String {
    if residents.is_empty() {
        return f!("\n{}\n", "No residents found.".yellow());
    }

    let mut table = new_table();
    table.set_titles(row![b->"Homeworld", b->"Name", b->"Height", b->"Mass"]);

    for resident in residents {
        table.add_row(row![
            Fc->text_field(resident, HOMEWORLD),
            b->text_field(resident, "name"),
            text_field(resident, "height"),
            text_field(resident, "mass"),
        ]);
    }

    f!(
        "\n{}\n{}\n",
        table,
        f!("Total residents: {}", residents.len()).bright_black()
    )
}
