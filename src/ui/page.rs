//! HTML page surface: the form plus four display regions, rendered as
//! escaped fragments with the stylesheet's class names.

use super::view::{View, ViewState};
use super::view_model::{ErrorNotice, RouteCard, ViewModel};
use std::fmt::Write;

pub const FORM_ID: &str = "routeForm";
pub const LOADING_ID: &str = "loading";
pub const RESULTS_ID: &str = "results";
pub const ROUTE_LIST_ID: &str = "routeList";
pub const MAP_ID: &str = "map";

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_card(card: &RouteCard) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"route-card\">");
    let _ = write!(
        html,
        "<div class=\"route-header\"><div class=\"route-name\">{}</div>\
         <div class=\"safety-score {}\">{}</div></div>",
        escape_html(&card.name),
        card.badge.css_class(),
        card.badge.label()
    );
    html.push_str("<div class=\"route-details\">");
    for detail in &card.details {
        let _ = write!(
            html,
            "<div class=\"detail-item\"><div class=\"detail-label\">{}</div>\
             <div class=\"detail-value\">{}</div></div>",
            detail.label,
            escape_html(&detail.value)
        );
    }
    html.push_str("</div>");
    let _ = write!(
        html,
        "<div class=\"safety-features\"><strong>Safety Features:</strong> {}</div>",
        escape_html(&card.safety_features)
    );
    html.push_str("</div>");
    html
}

pub fn render_error(notice: &ErrorNotice) -> String {
    format!(
        "<div class=\"route-error\"><h3>{}</h3><p>{}</p></div>",
        notice.heading,
        escape_html(&notice.message)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: &'static str,
    pub hidden: bool,
}

/// In-memory page state.
#[derive(Debug, Clone)]
pub struct PageView {
    loading: Region,
    results: Region,
    map: Region,
    route_list: String,
    state: ViewState,
}

impl Default for PageView {
    fn default() -> Self {
        PageView {
            loading: Region {
                id: LOADING_ID,
                hidden: true,
            },
            results: Region {
                id: RESULTS_ID,
                hidden: true,
            },
            map: Region {
                id: MAP_ID,
                hidden: true,
            },
            route_list: String::new(),
            state: ViewState::Idle,
        }
    }
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        [&self.loading, &self.results, &self.map]
            .into_iter()
            .find(|r| r.id == id)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.region(id).is_some_and(|r| !r.hidden)
    }

    /// Inner HTML of the route list.
    pub fn route_list_html(&self) -> &str {
        &self.route_list
    }

    pub fn card_count(&self) -> usize {
        self.route_list.matches("class=\"route-card\"").count()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }
}

impl View for PageView {
    fn apply_state(&mut self, state: ViewState) {
        let regions = state.regions();
        self.loading.hidden = !regions.loading;
        self.results.hidden = !regions.results;
        self.map.hidden = !regions.map;
        self.state = state;
    }

    fn render(&mut self, model: &ViewModel) {
        self.route_list = match model {
            ViewModel::Results(cards) => cards.iter().map(render_card).collect(),
            ViewModel::Error(notice) => render_error(notice),
        };
    }
}
