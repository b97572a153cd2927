use crate::Artwork;
use std::collections::HashMap;

/// Artworks sharing one station name, drawn as a single marker.
#[derive(Debug, Clone, PartialEq)]
pub struct StationGroup {
    pub station_name: String,
    pub artworks: Vec<Artwork>,
}

impl StationGroup {
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Mean `(latitude, longitude)` of the members.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.artworks.is_empty() {
            return None;
        }

        let (lat_sum, lon_sum) = self
            .artworks
            .iter()
            .fold((0.0, 0.0), |(lat, lon), a| (lat + a.latitude, lon + a.longitude));
        let n = self.artworks.len() as f64;
        Some((lat_sum / n, lon_sum / n))
    }
}

/// Groups by exact station name. Groups keep the order in which their
/// station was first seen, members keep input order.
// TODO: key on a normalized station identifier once the API exposes one; spelling variants still split into separate markers.
pub fn group_by_station(artworks: &[Artwork]) -> Vec<StationGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<StationGroup> = Vec::new();

    for artwork in artworks {
        match index.get(artwork.station_name.as_str()) {
            Some(&i) => groups[i].artworks.push(artwork.clone()),
            None => {
                index.insert(&artwork.station_name, groups.len());
                groups.push(StationGroup {
                    station_name: artwork.station_name.clone(),
                    artworks: vec![artwork.clone()],
                });
            }
        }
    }

    groups
}
