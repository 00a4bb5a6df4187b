use super::view_model::ViewModel;

/// Mutually exclusive display states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Results,
    Error,
}

/// Which display regions are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub loading: bool,
    pub results: bool,
    pub map: bool,
}

impl ViewState {
    /// Errors are drawn inside the results region, with the map hidden.
    pub fn regions(&self) -> Regions {
        match self {
            ViewState::Idle => Regions {
                loading: false,
                results: false,
                map: false,
            },
            ViewState::Loading => Regions {
                loading: true,
                results: false,
                map: false,
            },
            ViewState::Results => Regions {
                loading: false,
                results: true,
                map: true,
            },
            ViewState::Error => Regions {
                loading: false,
                results: true,
                map: false,
            },
        }
    }
}

/// A display surface the controller drives.
pub trait View {
    fn apply_state(&mut self, state: ViewState);
    /// Replace the route list content. Never merges with earlier content.
    fn render(&mut self, model: &ViewModel);
}
