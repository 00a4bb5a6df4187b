pub mod badge;
pub mod controller;
pub mod form;
pub mod page;
pub mod text;
pub mod view;
pub mod view_model;

pub use badge::SafetyBand;
pub use controller::{Outcome, RequestTicket, RouteQueryController};
pub use form::QueryForm;
pub use page::PageView;
pub use text::TextView;
pub use view::{Regions, View, ViewState};
pub use view_model::{DetailField, ErrorNotice, RouteCard, ViewModel};
