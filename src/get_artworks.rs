use crate::{Artwork, Error, Gateway};
use tracing::info;

impl Gateway {
    pub async fn get_artworks(&self, base_url: &str) -> Result<Vec<Artwork>, Error> {
        // https://<api>/artworks

        let url = format!("{}/artworks", base_url.trim_end_matches('/'));
        let artworks: Vec<Artwork> = self.get(&url).await?;
        info!(count = artworks.len(), "fetched artworks");
        Ok(artworks)
    }
}
