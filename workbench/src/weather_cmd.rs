use tracing::info;
use weather::{lookup, render_bundle, Endpoints};

use crate::fetch::CommandFetcher;

pub fn run(city: &str, api_key: &str, fetcher: &str) -> anyhow::Result<()> {
    let endpoints = Endpoints::new(api_key);
    let mut fetch = CommandFetcher::new(fetcher);

    let bundle = lookup(&mut fetch, &endpoints, city)?;
    info!(
        name = %bundle.location.name,
        lat = bundle.location.lat,
        lon = bundle.location.lon,
        "Resolved location"
    );

    print!("{}", render_bundle(&bundle));
    Ok(())
}
