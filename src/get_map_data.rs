use crate::{Artwork, Config, Error, Gateway, SubwayLine};
use tracing::warn;

/// Everything the map draws. `subway_lines` is `None` when the overlay is
/// switched off in the configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapData {
    pub artworks: Vec<Artwork>,
    pub subway_lines: Option<Vec<SubwayLine>>,
}

impl Gateway {
    /// Both requests are issued together and must both succeed.
    pub async fn get_map_data(&self, config: &Config) -> Result<MapData, Error> {
        let result = if config.show_subway_lines {
            tokio::try_join!(
                self.get_artworks(&config.api_url),
                self.get_subway_lines(&config.subway_lines_url)
            )
            .map(|(artworks, lines)| MapData {
                artworks,
                subway_lines: Some(lines),
            })
        } else {
            self.get_artworks(&config.api_url)
                .await
                .map(|artworks| MapData {
                    artworks,
                    subway_lines: None,
                })
        };

        if let Err(err) = &result {
            warn!(error = %err, "could not load map data");
        }
        result
    }
}
