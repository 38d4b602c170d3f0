use crate::prelude::{println, *};
use futures::stream::{self, Stream, TryStreamExt};
use holonet_core::swapi::{Page, Planet, Record};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub mod characters;
pub mod residents;
pub mod search;

// Re-export public data functions
pub use characters::characters_data;
pub use residents::residents_data;
pub use search::search_data;

pub const DEFAULT_UPSTREAM_URL: &str = "https://swapi.py4e.com/api";

#[derive(Debug, clap::Parser)]
#[command(name = "swapi")]
#[command(about = "Query the aggregated Star Wars catalog from the command line")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List every planet resident with its homeworld name
    #[clap(name = "residents")]
    Residents(residents::ResidentsOptions),

    /// Search characters by name
    #[clap(name = "search")]
    Search(search::SearchOptions),

    /// List characters, optionally sorted, one page at a time
    #[clap(name = "characters")]
    Characters(characters::CharactersOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Star Wars API Base: {}", global.upstream_url);
        println!();
    }

    let client = SwapiClient::from_global(&global)?;

    match app.command {
        Commands::Residents(options) => residents::run(options, &client, &global).await,
        Commands::Search(options) => search::run(options, &client, &global).await,
        Commands::Characters(options) => characters::run(options, &client, &global).await,
    }
}

/// HTTP client bound to one upstream catalog
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("holonet/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_global(global: &crate::Global) -> Result<Self> {
        Self::new(
            global.upstream_url.clone(),
            global.timeout.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn people_url(&self) -> String {
        f!("{}/people/", self.base_url)
    }

    pub fn planets_url(&self) -> String {
        f!("{}/planets/", self.base_url)
    }

    pub fn search_url(&self, term: &str) -> String {
        f!(
            "{}/people/?search={}",
            self.base_url,
            urlencoding::encode(term)
        )
    }

    /// GET `url` and decode its JSON body
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        log::debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Lazily walk a paginated listing, one request per polled page
    ///
    /// The stream follows each page's `next` link and ends after the page whose
    /// `next` is null. Pages are requested strictly one after another.
    pub fn pages<T: DeserializeOwned>(
        &self,
        seed: &str,
    ) -> impl Stream<Item = Result<Page<T>, FetchError>> + '_ {
        stream::try_unfold(Some(seed.to_string()), move |cursor: Option<String>| async move {
            let Some(url) = cursor else {
                return Ok::<_, FetchError>(None);
            };

            let page: Page<T> = self.fetch(&url).await?;
            let next = page.next.clone();

            Ok(Some((page, next)))
        })
    }

    /// Collect every `results` entry of a paginated listing, in page order
    pub async fn collect_all<T: DeserializeOwned>(&self, seed: &str) -> Result<Vec<T>, FetchError> {
        let records = self
            .pages::<T>(seed)
            .try_fold(Vec::new(), |mut records, page| async move {
                records.extend(page.results);
                Ok(records)
            })
            .await?;

        log::info!("Collected {} records from {}", records.len(), seed);

        Ok(records)
    }

    pub async fn all_characters(&self) -> Result<Vec<Record>, FetchError> {
        self.collect_all(&self.people_url()).await
    }

    pub async fn all_planets(&self) -> Result<Vec<Planet>, FetchError> {
        self.collect_all(&self.planets_url()).await
    }
}
