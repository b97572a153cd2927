use crate::de;
use serde::{Deserialize, Serialize};

/// Positions are `[longitude, latitude]` as published.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Coordinates {
    LineString(Vec<[f64; 2]>),
    MultiLineString(Vec<Vec<[f64; 2]>>),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Geometry {
    #[serde(default)]
    pub r#type: Option<String>,

    pub coordinates: Coordinates,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubwayLine {
    #[serde(deserialize_with = "de::string_or_number")]
    pub objectid: String,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub rt_symbol: String,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    pub the_geom: Geometry,
}

impl SubwayLine {
    /// One polyline per geometry part, as `(latitude, longitude)` pairs.
    pub fn paths(&self) -> Vec<Vec<(f64, f64)>> {
        let swap = |part: &Vec<[f64; 2]>| -> Vec<(f64, f64)> {
            part.iter().map(|[lon, lat]| (*lat, *lon)).collect()
        };
        match &self.the_geom.coordinates {
            Coordinates::LineString(part) => vec![swap(part)],
            Coordinates::MultiLineString(parts) => parts.iter().map(swap).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_string_is_swapped_to_lat_lon() {
        let json = r##"{
            "objectid": "734",
            "name": "A-C",
            "rt_symbol": "A",
            "url": "http://web.mta.info/nyct/service/",
            "the_geom": {
                "type": "LineString",
                "coordinates": [[-73.99106999861966, 40.73005400028978], [-73.99044500135637, 40.73092499891663]]
            }
        }"##;

        let line: SubwayLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.objectid, "734");
        assert_eq!(line.color, None);
        assert_eq!(
            line.paths(),
            vec![vec![
                (40.73005400028978, -73.99106999861966),
                (40.73092499891663, -73.99044500135637)
            ]]
        );
    }

    #[test]
    fn multi_line_string_yields_one_path_per_part() {
        let json = r##"{
            "objectid": 12,
            "name": "G",
            "rt_symbol": "G",
            "color": "#6CBE45",
            "the_geom": {
                "type": "MultiLineString",
                "coordinates": [[[-73.95, 40.70], [-73.94, 40.71]], [[-73.93, 40.72]]]
            }
        }"##;

        let line: SubwayLine = serde_json::from_str(json).unwrap();
        let paths = line.paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[1], vec![(40.72, -73.93)]);
        assert_eq!(line.color.as_deref(), Some("#6CBE45"));
    }
}
