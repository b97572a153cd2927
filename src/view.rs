use crate::color::{line_color, tier_color};
use crate::render::{escape, http_url};
use crate::{group_by_station, Error, MapData, Popup, StationGroup, SubwayLine};
use serde::Serialize;

pub const EMPTY_MESSAGE: &str = "No artworks found. The API might be empty or returning an empty array.";

/// The two overlay switches. They never affect each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    pub legend_expanded: bool,
    pub lines_shown: bool,
}

impl Default for Toggles {
    fn default() -> Toggles {
        Toggles {
            legend_expanded: false,
            lines_shown: true,
        }
    }
}

impl Toggles {
    pub fn toggle_legend(&mut self) {
        self.legend_expanded = !self.legend_expanded;
    }

    pub fn toggle_lines(&mut self) {
        self.lines_shown = !self.lines_shown;
    }

    pub fn legend_label(&self) -> &'static str {
        if self.legend_expanded {
            "Hide Legend"
        } else {
            "Show Legend"
        }
    }

    pub fn lines_label(&self) -> &'static str {
        if self.lines_shown {
            "Hide Subway Lines"
        } else {
            "Show Subway Lines"
        }
    }
}

/// Pre-rendered popup panes for one station: the list (multi-artwork
/// stations only) and one detail pane per artwork.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PopupPanes {
    pub list: Option<String>,
    pub details: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StationMarker {
    pub station_name: String,
    pub position: (f64, f64),
    pub count: usize,
    pub color: &'static str,
    pub popup: PopupPanes,
}

impl StationMarker {
    pub fn from_group(group: &StationGroup) -> Option<StationMarker> {
        let position = group.centroid()?;

        let mut popup = Popup::open(group);
        let list = if popup.has_list() {
            Some(popup.render())
        } else {
            None
        };
        let details = (0..group.len())
            .filter_map(|i| {
                if popup.select(i) {
                    Some(popup.render())
                } else {
                    None
                }
            })
            .collect();

        Some(StationMarker {
            station_name: group.station_name.clone(),
            position,
            count: group.len(),
            color: tier_color(group.len()),
            popup: PopupPanes { list, details },
        })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LineOverlay {
    pub name: String,
    pub rt_symbol: String,
    pub color: String,
    pub paths: Vec<Vec<(f64, f64)>>,
    pub popup: String,
}

impl LineOverlay {
    pub fn from_line(line: &SubwayLine) -> LineOverlay {
        let mut popup = format!(
            "<div class=\"popup\"><h3>{}</h3><p>Route: {}</p>",
            escape(&line.name),
            escape(&line.rt_symbol)
        );
        if let Some(url) = line.url.as_deref().and_then(http_url) {
            popup.push_str(&format!(
                "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Service Information</a></p>",
                escape(url)
            ));
        }
        popup.push_str("</div>");

        LineOverlay {
            name: line.name.clone(),
            rt_symbol: line.rt_symbol.clone(),
            color: line_color(line),
            paths: line.paths(),
            popup,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapModel {
    pub markers: Vec<StationMarker>,
    pub lines: Vec<LineOverlay>,
    /// False when the line overlay was switched off and never fetched.
    pub has_line_overlay: bool,
}

impl MapModel {
    pub fn build(data: &MapData) -> MapModel {
        let markers = group_by_station(&data.artworks)
            .iter()
            .filter_map(StationMarker::from_group)
            .collect();
        let lines = data
            .subway_lines
            .iter()
            .flatten()
            .map(LineOverlay::from_line)
            .collect();
        MapModel {
            markers,
            lines,
            has_line_overlay: data.subway_lines.is_some(),
        }
    }

    pub fn visible_lines(&self, toggles: &Toggles) -> &[LineOverlay] {
        if self.has_line_overlay && toggles.lines_shown {
            &self.lines
        } else {
            &[]
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading,
    Error(String),
    Empty,
    Map(MapModel),
}

impl View {
    /// Any failure replaces the whole map.
    pub fn from_result(result: Result<MapData, Error>) -> View {
        match result {
            Err(err) => View::Error(err.user_message()),
            Ok(data) if data.artworks.is_empty() && data.subway_lines.is_none() => View::Empty,
            Ok(data) => View::Map(MapModel::build(&data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Artwork, Coordinates, Geometry, MISSING_API_URL};

    fn artwork(station: &str, latitude: f64, longitude: f64) -> Artwork {
        Artwork {
            station_name: station.to_owned(),
            art_title: format!("Art at {}", station),
            latitude,
            longitude,
            ..Default::default()
        }
    }

    fn line(rt_symbol: &str) -> SubwayLine {
        SubwayLine {
            objectid: "1".to_owned(),
            name: format!("{} line", rt_symbol),
            rt_symbol: rt_symbol.to_owned(),
            color: None,
            url: Some("http://web.mta.info/".to_owned()),
            the_geom: Geometry {
                r#type: None,
                coordinates: Coordinates::LineString(vec![[-74.0, 40.7], [-73.9, 40.8]]),
            },
        }
    }

    #[test]
    fn toggles_are_independent() {
        let mut toggles = Toggles::default();
        assert_eq!(toggles.lines_label(), "Hide Subway Lines");
        assert_eq!(toggles.legend_label(), "Show Legend");

        toggles.toggle_lines();
        assert!(!toggles.lines_shown);
        assert!(!toggles.legend_expanded);
        assert_eq!(toggles.lines_label(), "Show Subway Lines");

        toggles.toggle_legend();
        assert!(toggles.legend_expanded);
        assert!(!toggles.lines_shown);

        toggles.toggle_lines();
        assert!(toggles.lines_shown);
        assert!(toggles.legend_expanded);
    }

    #[test]
    fn hiding_lines_keeps_markers() {
        let data = MapData {
            artworks: vec![artwork("Canal St", 40.72, -74.0)],
            subway_lines: Some(vec![line("A"), line("7")]),
        };
        let model = MapModel::build(&data);
        let mut toggles = Toggles::default();
        assert_eq!(model.visible_lines(&toggles).len(), 2);

        toggles.toggle_lines();
        assert!(model.visible_lines(&toggles).is_empty());
        assert_eq!(model.markers.len(), 1);

        toggles.toggle_lines();
        assert_eq!(model.visible_lines(&toggles), &model.lines[..]);
    }

    #[test]
    fn markers_sit_on_centroids_with_tier_colors() {
        let data = MapData {
            artworks: vec![
                artwork("Fulton St", 40.70, -74.00),
                artwork("Canal St", 40.72, -74.00),
                artwork("Fulton St", 40.72, -74.02),
            ],
            subway_lines: None,
        };
        let model = MapModel::build(&data);
        assert_eq!(model.markers.len(), 2);

        let fulton = &model.markers[0];
        assert!(!model.has_line_overlay);
        assert!(model.visible_lines(&Toggles::default()).is_empty());
        assert_eq!(fulton.station_name, "Fulton St");
        assert_eq!(fulton.count, 2);
        assert_eq!(fulton.color, "#2ECC71");
        assert!((fulton.position.0 - 40.71).abs() < 1e-9);
        assert!((fulton.position.1 + 74.01).abs() < 1e-9);
        assert!(fulton.popup.list.as_ref().unwrap().contains("Total Artworks: 2"));
        assert_eq!(fulton.popup.details.len(), 2);

        let canal = &model.markers[1];
        assert_eq!(canal.popup.list, None);
        assert_eq!(canal.popup.details.len(), 1);
    }

    #[test]
    fn line_overlays_resolve_colors() {
        let overlay = LineOverlay::from_line(&line("A"));
        assert_eq!(overlay.color, "#0039A6");
        assert_eq!(overlay.paths, vec![vec![(40.7, -74.0), (40.8, -73.9)]]);
        assert!(overlay.popup.contains("Service Information"));
        assert_eq!(LineOverlay::from_line(&line("??")).color, "#000000");

        let mut scripted = line("A");
        scripted.url = Some("javascript:alert(1)".to_owned());
        let overlay = LineOverlay::from_line(&scripted);
        assert!(!overlay.popup.contains("javascript:"));
        assert!(!overlay.popup.contains("Service Information"));
    }

    #[test]
    fn view_states() {
        let err = Error::Configuration(MISSING_API_URL.to_owned());
        assert_eq!(View::from_result(Err(err)), View::Error(MISSING_API_URL.to_owned()));

        let empty = MapData {
            artworks: vec![],
            subway_lines: None,
        };
        assert_eq!(View::from_result(Ok(empty)), View::Empty);

        let lines_only = MapData {
            artworks: vec![],
            subway_lines: Some(vec![line("G")]),
        };
        match View::from_result(Ok(lines_only)) {
            View::Map(model) => {
                assert!(model.markers.is_empty());
                assert_eq!(model.lines.len(), 1);
            }
            other => panic!("expected map, got {:?}", other),
        }
    }
}
