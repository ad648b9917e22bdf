//! Line handling for the interactive prompt.

use tracing_subscriber::filter::LevelFilter;

use zonecheck::geocoder::Geocoder;
use zonecheck::presentation::summary;
use zonecheck::{Error, ZoneSession};

/// What a single input line produced
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Output(String),
    NotFound,
    Failed(String),
    /// Blank line, or a view requested before any result exists
    Nothing,
    Quit,
}

impl Outcome {
    /// Whether a one-shot run should exit unsuccessfully
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::NotFound | Outcome::Failed(_))
    }
}

pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Run one line: a `:command` or an address to check
pub async fn handle_line<G: Geocoder>(session: &mut ZoneSession<G>, line: &str) -> Outcome {
    let line = line.trim();

    match line {
        ":quit" | ":q" => Outcome::Quit,
        ":map" => match session.map_view() {
            Some(map) => match serde_json::to_string_pretty(&map) {
                Ok(text) => Outcome::Output(text),
                Err(e) => Outcome::Failed(e.to_string()),
            },
            None => Outcome::Nothing,
        },
        ":steps" => session
            .steps_view()
            .map_or(Outcome::Nothing, Outcome::Output),
        ":zones" => {
            let listing = session
                .zones()
                .iter()
                .map(|z| format!("{}  {}  radius {} miles", z.name, z.center, z.radius_miles))
                .collect::<Vec<_>>()
                .join("\n");
            Outcome::Output(listing)
        }
        address => match session.submit(address).await {
            Ok(Some(result)) => Outcome::Output(summary(result)),
            Ok(None) => Outcome::Nothing,
            Err(Error::NotFound { .. }) => Outcome::NotFound,
            Err(e) => Outcome::Failed(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonecheck::models::{sample_zones, Coordinate};

    /// Resolves one fixed phrase, nothing else
    struct OneAddress;

    impl Geocoder for OneAddress {
        async fn geocode(&self, address: &str) -> zonecheck::Result<Coordinate> {
            if address == "Columbus Circle" {
                Ok(Coordinate {
                    lat: 40.7681,
                    lon: -73.9819,
                })
            } else {
                Err(Error::not_found(address))
            }
        }
    }

    fn session() -> ZoneSession<OneAddress> {
        ZoneSession::new(sample_zones(), OneAddress).unwrap()
    }

    #[tokio::test]
    async fn test_views_need_a_result() {
        let mut session = session();
        assert_eq!(handle_line(&mut session, ":map").await, Outcome::Nothing);
        assert_eq!(handle_line(&mut session, ":steps").await, Outcome::Nothing);
        assert_eq!(handle_line(&mut session, "").await, Outcome::Nothing);
    }

    #[tokio::test]
    async fn test_address_then_views() {
        let mut session = session();

        let outcome = handle_line(&mut session, "Columbus Circle").await;
        assert_eq!(
            outcome,
            Outcome::Output(
                "The location is 0.00 miles inside of New York City (Columbus Circle). No additional charges."
                    .to_string()
            )
        );

        match handle_line(&mut session, ":map").await {
            Outcome::Output(text) => assert!(text.contains("FeatureCollection")),
            other => panic!("unexpected {:?}", other),
        }
        match handle_line(&mut session, " :steps ").await {
            Outcome::Output(text) => assert!(text.contains("Result: 0.00 miles inside")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_address_and_quit() {
        let mut session = session();
        let outcome = handle_line(&mut session, "Atlantis").await;
        assert_eq!(outcome, Outcome::NotFound);
        assert!(outcome.is_failure());

        let outcome = handle_line(&mut session, ":quit").await;
        assert_eq!(outcome, Outcome::Quit);
        assert!(!outcome.is_failure());
    }

    #[tokio::test]
    async fn test_found_address_is_not_failure() {
        let mut session = session();
        assert!(!handle_line(&mut session, "Columbus Circle").await.is_failure());
        assert!(!handle_line(&mut session, "").await.is_failure());
        assert!(Outcome::Failed("boom".to_string()).is_failure());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(false), LevelFilter::INFO);
        assert_eq!(log_level(true), LevelFilter::DEBUG);
    }

    #[tokio::test]
    async fn test_zone_listing() {
        let mut session = session();
        match handle_line(&mut session, ":zones").await {
            Outcome::Output(text) => assert_eq!(text.lines().count(), 3),
            other => panic!("unexpected {:?}", other),
        }
    }
}
