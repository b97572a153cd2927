//! Marker colors by station size, line colors by route.

use crate::SubwayLine;

pub const FALLBACK_LINE_COLOR: &str = "#000000";

/// Marker color bands: `(label, color)` for 1, 2, 3, 4 and 5+ artworks.
pub const TIERS: [(&str, &str); 5] = [
    ("1 artwork", "#3388FF"),
    ("2 artworks", "#2ECC71"),
    ("3 artworks", "#F1C40F"),
    ("4 artworks", "#E67E22"),
    ("5+ artworks", "#E74C3C"),
];

pub fn tier_color(count: usize) -> &'static str {
    let band = count.clamp(1, TIERS.len()) - 1;
    TIERS[band].1
}

/// MTA trunk line colors.
pub fn route_color(symbol: &str) -> &'static str {
    let symbol = symbol.trim();
    // Express services (6X, 7X, FX) share the local's color.
    let base = match symbol.strip_suffix('X') {
        Some(base) if !base.is_empty() => base,
        _ => symbol,
    };

    match base {
        "A" | "C" | "E" => "#0039A6",
        "B" | "D" | "F" | "M" => "#FF6319",
        "G" => "#6CBE45",
        "J" | "Z" => "#996633",
        "L" => "#A7A9AC",
        "N" | "Q" | "R" | "W" => "#FCCC0A",
        "1" | "2" | "3" => "#EE352E",
        "4" | "5" | "6" => "#00933C",
        "7" => "#B933AD",
        "S" | "GS" | "FS" | "H" => "#808183",
        "SI" | "SIR" => "#0039A6",
        _ => FALLBACK_LINE_COLOR,
    }
}

/// A color supplied by the record wins over the route table.
pub fn line_color(line: &SubwayLine) -> String {
    match line.color.as_deref().map(str::trim) {
        Some(color) if !color.is_empty() => color.to_owned(),
        _ => route_color(&line.rt_symbol).to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinates, Geometry};

    fn line(rt_symbol: &str, color: Option<&str>) -> SubwayLine {
        SubwayLine {
            objectid: "1".to_owned(),
            name: rt_symbol.to_owned(),
            rt_symbol: rt_symbol.to_owned(),
            color: color.map(str::to_owned),
            url: None,
            the_geom: Geometry {
                r#type: Some("LineString".to_owned()),
                coordinates: Coordinates::LineString(vec![]),
            },
        }
    }

    #[test]
    fn tiers_follow_count() {
        assert_eq!(tier_color(1), "#3388FF");
        assert_eq!(tier_color(2), "#2ECC71");
        assert_eq!(tier_color(3), "#F1C40F");
        assert_eq!(tier_color(4), "#E67E22");
        assert_eq!(tier_color(5), "#E74C3C");
        assert_eq!(tier_color(27), "#E74C3C");
        assert_eq!(tier_color(0), "#3388FF");
    }

    #[test]
    fn route_symbols_resolve() {
        assert_eq!(route_color("A"), "#0039A6");
        assert_eq!(route_color("7"), "#B933AD");
        assert_eq!(route_color("6X"), "#00933C");
        assert_eq!(route_color("L"), "#A7A9AC");
        assert_eq!(route_color("unknown"), "#000000");
        assert_eq!(route_color("X"), "#000000");
        assert_eq!(route_color(""), "#000000");
    }

    #[test]
    fn explicit_color_wins() {
        assert_eq!(line_color(&line("A", Some("#123456"))), "#123456");
        assert_eq!(line_color(&line("A", None)), "#0039A6");
        assert_eq!(line_color(&line("A", Some("  "))), "#0039A6");
        assert_eq!(line_color(&line("Q?", None)), "#000000");
    }
}
