use crate::render::{escape, http_url};
use crate::StationGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupView {
    List,
    Detail(usize),
}

/// Navigation state of one open station popup. Closing the popup drops it,
/// so reopening always starts over.
#[derive(Debug, Clone)]
pub struct Popup<'a> {
    group: &'a StationGroup,
    view: PopupView,
}

impl<'a> Popup<'a> {
    /// Single-artwork stations skip the list.
    pub fn open(group: &'a StationGroup) -> Popup<'a> {
        let view = if group.len() > 1 {
            PopupView::List
        } else {
            PopupView::Detail(0)
        };
        Popup { group, view }
    }

    pub fn view(&self) -> PopupView {
        self.view
    }

    pub fn group(&self) -> &'a StationGroup {
        self.group
    }

    pub fn has_list(&self) -> bool {
        self.group.len() > 1
    }

    /// Returns false and stays put when `index` is not a member.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.group.len() {
            return false;
        }
        self.view = PopupView::Detail(index);
        true
    }

    pub fn back(&mut self) -> bool {
        match self.view {
            PopupView::Detail(_) if self.has_list() => {
                self.view = PopupView::List;
                true
            }
            _ => false,
        }
    }

    pub fn selected(&self) -> Option<&'a crate::Artwork> {
        match self.view {
            PopupView::List => None,
            PopupView::Detail(i) => self.group.artworks.get(i),
        }
    }

    pub fn render(&self) -> String {
        let mut html = format!(
            "<div class=\"popup\"><h3>{}</h3><p>Total Artworks: {}</p>",
            escape(&self.group.station_name),
            self.group.len()
        );

        match self.view {
            PopupView::List => {
                html.push_str("<ul class=\"artwork-list\">");
                for (i, artwork) in self.group.artworks.iter().enumerate() {
                    html.push_str(&format!(
                        "<li><a href=\"#\" data-select=\"{}\">{}</a></li>",
                        i,
                        escape(&artwork.art_title)
                    ));
                }
                html.push_str("</ul>");
            }
            PopupView::Detail(_) => {
                if let Some(artwork) = self.selected() {
                    html.push_str(&format!(
                        "<h4>{}</h4><p>Artist: {}</p><p>Date: {}</p><p>Material: {}</p><p>Description: {}</p>",
                        escape(&artwork.art_title),
                        escape(&artwork.artist),
                        escape(&artwork.art_date),
                        escape(&artwork.art_material),
                        escape(&artwork.art_description),
                    ));
                    if let Some(url) = artwork.image_url().and_then(http_url) {
                        html.push_str(&format!(
                            "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">More Information</a></p>",
                            escape(url)
                        ));
                    }
                }
                if self.has_list() {
                    html.push_str("<p><a href=\"#\" data-back>Back to list</a></p>");
                }
            }
        }

        html.push_str("</div>");
        html
    }
}
