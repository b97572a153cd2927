use crate::{Error, Gateway, SubwayLine};
use tracing::info;

impl Gateway {
    pub async fn get_subway_lines(&self, url: &str) -> Result<Vec<SubwayLine>, Error> {
        //https://data.cityofnewyork.us/resource/s7zz-qmyz.json

        let lines: Vec<SubwayLine> = self.get(url).await?;
        info!(count = lines.len(), "fetched subway lines");
        Ok(lines)
    }
}
