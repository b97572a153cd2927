//! Turns a [`View`] into a self-contained HTML page driven by Leaflet.

use crate::color::TIERS;
use crate::{Toggles, View, DEFAULT_ZOOM, NYC_CENTER, TILE_ATTRIBUTION, TILE_URL};
use serde_json::json;

pub const TITLE: &str = "NYC Subway Art Map";
pub const LOADING_MESSAGE: &str = "Loading...";

const PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>%TITLE%</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <style>
    body { margin: 0; font-family: sans-serif; }
    #map { height: 90vh; width: 100%; }
    .controls { position: absolute; top: 10px; right: 10px; z-index: 1000; display: flex; flex-direction: column; gap: 6px; }
    .legend { background: white; padding: 8px; border-radius: 4px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.3); }
    .legend .swatch { display: inline-block; width: 12px; height: 12px; border-radius: 50%; margin-right: 6px; }
    .popup { max-height: 500px; overflow-y: auto; padding: 10px; }
  </style>
</head>
<body>
%BODY%
</body>
</html>
"#;

const MAP_SCRIPT: &str = r#"
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script>
  const data = %DATA%;
  const map = L.map('map').setView(data.center, data.zoom);
  L.tileLayer(data.tileUrl, { attribution: data.attribution }).addTo(map);

  const lines = L.layerGroup();
  data.lines.forEach(line => line.paths.forEach(path =>
    L.polyline(path, { color: line.color, weight: 3 }).bindPopup(line.popup).addTo(lines)));
  if (data.linesShown) lines.addTo(map);

  data.markers.forEach(marker => {
    const el = document.createElement('div');
    const reset = () => { el.innerHTML = marker.popup.list ?? marker.popup.details[0]; };
    reset();
    el.addEventListener('click', event => {
      const target = event.target.closest('a[data-select], a[data-back]');
      if (!target) return;
      event.preventDefault();
      if (target.hasAttribute('data-back')) reset();
      else el.innerHTML = marker.popup.details[Number(target.dataset.select)];
    });
    L.circleMarker(marker.position, { radius: 8, color: marker.color, fillColor: marker.color, fillOpacity: 0.8 })
      .bindPopup(el, { maxHeight: 500 })
      .on('popupclose', reset)
      .addTo(map);
  });

  const linesButton = document.getElementById('toggle-lines');
  const linesCount = document.getElementById('lines-count');
  if (linesButton) linesButton.addEventListener('click', () => {
    data.linesShown = !data.linesShown;
    if (data.linesShown) lines.addTo(map); else lines.remove();
    linesButton.textContent = data.linesShown ? 'Hide Subway Lines' : 'Show Subway Lines';
    linesCount.textContent = data.linesShown ? data.lines.length : 0;
  });

  const legendButton = document.getElementById('toggle-legend');
  const legend = document.getElementById('legend-body');
  legendButton.addEventListener('click', () => {
    legend.hidden = !legend.hidden;
    legendButton.textContent = legend.hidden ? 'Show Legend' : 'Hide Legend';
  });
</script>
"#;

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Links taken from API records are only emitted for `http` and `https`.
pub fn http_url(url: &str) -> Option<&str> {
    let url = url.trim();
    let scheme = url.split_once(':').map(|(scheme, _)| scheme.to_ascii_lowercase());
    match scheme.as_deref() {
        Some("http") | Some("https") => Some(url),
        _ => None,
    }
}

/// `api_url` is echoed on the error page so a wrong setting is visible.
pub fn render_page(view: &View, toggles: &Toggles, api_url: Option<&str>) -> String {
    let body = match view {
        View::Loading => format!("<div>{}</div>", LOADING_MESSAGE),
        View::Error(message) => format!(
            "<div><h1>Error</h1><p>{}</p><p>Current API URL: {}</p>\
             <p>If this URL is incorrect, please update your environment variables.</p></div>",
            escape(message),
            escape(api_url.unwrap_or(""))
        ),
        View::Empty => format!(
            "<div><h1>{}</h1><p>{}</p></div>",
            TITLE,
            crate::view::EMPTY_MESSAGE
        ),
        View::Map(model) => {
            let data = json!({
                "center": [NYC_CENTER.0, NYC_CENTER.1],
                "zoom": DEFAULT_ZOOM,
                "tileUrl": TILE_URL,
                "attribution": TILE_ATTRIBUTION,
                "linesShown": toggles.lines_shown,
                "markers": model.markers,
                "lines": model.lines,
            });
            // A literal "</" would end the script element early.
            let data = data.to_string().replace("</", "<\\/");

            let legend_rows: String = TIERS
                .iter()
                .map(|(label, color)| {
                    format!(
                        "<div><span class=\"swatch\" style=\"background: {}\"></span>{}</div>",
                        color, label
                    )
                })
                .collect();

            let (lines_button, lines_summary) = if model.has_line_overlay {
                (
                    format!("<button id=\"toggle-lines\">{}</button>", toggles.lines_label()),
                    format!(
                        ", <span id=\"lines-count\">{}</span> subway lines shown",
                        model.visible_lines(toggles).len()
                    ),
                )
            } else {
                (String::new(), String::new())
            };

            format!(
                "<h1>{}</h1>\n<div id=\"map\"></div>\n<div class=\"controls\">{}\
                 <div class=\"legend\"><button id=\"toggle-legend\">{}</button>\
                 <div id=\"legend-body\"{}>{}</div></div></div>\n\
                 <p class=\"summary\">{} stations{}</p>{}",
                TITLE,
                lines_button,
                toggles.legend_label(),
                if toggles.legend_expanded { "" } else { " hidden" },
                legend_rows,
                model.markers.len(),
                lines_summary,
                MAP_SCRIPT.replace("%DATA%", &data)
            )
        }
    };

    PAGE.replace("%TITLE%", TITLE).replace("%BODY%", &body)
}
