mod artwork;
pub use artwork::{Artwork, ImageLink};
mod subway_line;
pub use subway_line::{Coordinates, Geometry, SubwayLine};
mod station;
pub use station::{group_by_station, StationGroup};
pub mod color;
pub mod config;
pub use config::Config;
mod popup;
pub use popup::{Popup, PopupView};
pub mod view;
pub use view::{LineOverlay, MapModel, StationMarker, Toggles, View};
pub mod render;
mod de;
mod error;
pub use error::{Error, MISSING_API_URL};
mod get_artworks;
mod get_map_data;
pub use get_map_data::MapData;
mod get_subway_lines;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// NYC Open Data subway line geometry.
pub const SUBWAY_LINES_URL: &str = "https://data.cityofnewyork.us/resource/s7zz-qmyz.json";
pub const NYC_CENTER: (f64, f64) = (40.7128, -74.0060);
pub const DEFAULT_ZOOM: u8 = 11;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub struct Gateway {
    client: reqwest::Client,
}

impl Gateway {
    /// Requests never time out unless `timeout` is given.
    pub fn new(timeout: Option<Duration>) -> Result<Gateway, Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Content-Type",
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "Accept",
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::ClientBuilder::new().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = match builder.build() {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::Unspecified(format!(
                    "Could not create reqwest client ({}).",
                    err
                )))
            }
        };

        Ok(Gateway { client })
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let text = self.get_string(url).await?;

        match serde_json::from_str(&text) {
            Ok(body) => Ok(body),
            Err(err) => Err(Error::SerializationError(format!(
                "Could not deserialize response from \"{}\" ({})",
                url, err
            ))),
        }
    }

    async fn get_string(&self, url: &str) -> Result<String, Error> {
        debug!(url, "GET");
        let res = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::NetworkError(format!(
                    "Could not send request ({})",
                    err
                )))
            }
        };

        let status = res.status().as_u16();
        let text = res
            .text()
            .await
            .unwrap_or_else(|_| String::from("Could not retrieve body text."));

        if !(200..=299).contains(&status) {
            return Err(Error::ApiError(status, text));
        }

        debug!(url, status, bytes = text.len(), "response received");
        Ok(text)
    }
}
