//! Catalog data shapes and resident enrichment
//!
//! Records coming from the Star Wars catalog are kept as opaque JSON objects so
//! every upstream field is passed through untouched. Only the pieces the
//! aggregation reads (a page envelope and a planet's name and residents) get
//! typed views.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collation::locale_cmp;

/// Opaque catalog record (character, resident, ...)
pub type Record = Map<String, Value>;

/// Field stamped on every enriched resident
pub const HOMEWORLD: &str = "homeworld";

/// One page of a catalog listing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Planet fields needed to enrich its residents
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Planet {
    pub name: String,
    #[serde(default)]
    pub residents: Vec<String>,
}

/// A resident detail URL paired with the planet it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentLink {
    pub homeworld: String,
    pub url: String,
}

/// Plan the resident fetches for a planet listing
///
/// Planets are ordered by name (locale-aware, ascending). Each planet's
/// resident URLs keep their upstream order.
pub fn resident_plan(mut planets: Vec<Planet>) -> Vec<ResidentLink> {
    planets.sort_by(|a, b| locale_cmp(&a.name, &b.name));

    planets
        .into_iter()
        .flat_map(|planet| {
            let homeworld = planet.name;
            planet.residents.into_iter().map(move |url| ResidentLink {
                homeworld: homeworld.clone(),
                url,
            })
        })
        .collect()
}

/// Overwrite the resident's `homeworld` with the owning planet's name
pub fn stamp_homeworld(mut resident: Record, homeworld: &str) -> Record {
    resident.insert(HOMEWORLD.to_string(), Value::String(homeworld.to_string()));
    resident
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn planet(name: &str, residents: &[&str]) -> Planet {
        Planet {
            name: name.to_string(),
            residents: residents.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_page_deserialize_with_next() {
        let page: Page<Value> = serde_json::from_value(json!({
            "count": 3,
            "next": "https://swapi.py4e.com/api/people/?page=2",
            "previous": null,
            "results": [{"name": "Luke"}, {"name": "Leia"}]
        }))
        .unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(
            page.next.as_deref(),
            Some("https://swapi.py4e.com/api/people/?page=2")
        );
    }

    #[test]
    fn test_page_deserialize_last_page() {
        let page: Page<Value> =
            serde_json::from_value(json!({ "next": null, "results": [] })).unwrap();
        assert!(page.next.is_none());

        let page: Page<Value> = serde_json::from_value(json!({ "results": [] })).unwrap();
        assert!(page.next.is_none());
    }

    #[test]
    fn test_page_without_results_is_rejected() {
        let page = serde_json::from_value::<Page<Value>>(json!({ "detail": "Not found" }));
        assert!(page.is_err());
    }

    #[test]
    fn test_planet_ignores_extra_fields_and_defaults_residents() {
        let planet: Planet = serde_json::from_value(json!({
            "name": "Hoth",
            "climate": "frozen",
        }))
        .unwrap();

        assert_eq!(planet.name, "Hoth");
        assert!(planet.residents.is_empty());
    }

    #[test]
    fn test_resident_plan_orders_planets_by_name() {
        let planets = vec![
            planet("Tatooine", &["t/1", "t/2"]),
            planet("Alderaan", &["a/1"]),
            planet("Yavin IV", &["y/1"]),
        ];

        let plan = resident_plan(planets);
        let homeworlds: Vec<&str> = plan.iter().map(|l| l.homeworld.as_str()).collect();

        assert_eq!(homeworlds, vec!["Alderaan", "Tatooine", "Tatooine", "Yavin IV"]);
    }

    #[test]
    fn test_resident_plan_keeps_resident_order_within_planet() {
        let plan = resident_plan(vec![planet("Tatooine", &["t/9", "t/1", "t/5"])]);
        let urls: Vec<&str> = plan.iter().map(|l| l.url.as_str()).collect();

        assert_eq!(urls, vec!["t/9", "t/1", "t/5"]);
    }

    #[test]
    fn test_resident_plan_skips_empty_planets() {
        let plan = resident_plan(vec![planet("Hoth", &[]), planet("Dagobah", &[])]);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_stamp_homeworld_overwrites_existing_value() {
        let resident = match json!({
            "name": "Luke Skywalker",
            "homeworld": "https://swapi.py4e.com/api/planets/1/",
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let stamped = stamp_homeworld(resident, "Tatooine");

        assert_eq!(stamped[HOMEWORLD], json!("Tatooine"));
        assert_eq!(stamped["name"], json!("Luke Skywalker"));
    }

    #[test]
    fn test_stamp_homeworld_adds_missing_field() {
        let stamped = stamp_homeworld(Record::new(), "Naboo");
        assert_eq!(stamped.get(HOMEWORLD), Some(&json!("Naboo")));
    }
}
