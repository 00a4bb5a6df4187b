use super::view::{View, ViewState};
use super::view_model::ViewModel;
use std::fmt::Write;

/// Plain-text surface for terminals. Rendering replaces the buffer.
#[derive(Debug, Default)]
pub struct TextView {
    state: ViewState,
    output: String,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl View for TextView {
    fn apply_state(&mut self, state: ViewState) {
        if state == ViewState::Loading {
            self.output = "Finding routes...\n".to_string();
        }
        self.state = state;
    }

    fn render(&mut self, model: &ViewModel) {
        let mut out = String::new();
        match model {
            ViewModel::Results(cards) if cards.is_empty() => {
                out.push_str("No routes found.\n");
            }
            ViewModel::Results(cards) => {
                for card in cards {
                    let _ = writeln!(
                        out,
                        "{}. {} [{}]",
                        card.index + 1,
                        card.name,
                        card.badge.label()
                    );
                    for detail in &card.details {
                        let label = format!("{}:", detail.label);
                        let _ = writeln!(out, "   {:<13} {}", label, detail.value);
                    }
                    let _ = writeln!(out, "   Safety Features: {}", card.safety_features);
                    out.push('\n');
                }
            }
            ViewModel::Error(notice) => {
                let _ = writeln!(out, "{}: {}", notice.heading, notice.message);
            }
        }
        self.output = out;
    }
}
