//! Session-level UI state: which page is showing, open dialogs, the signed-in user, the
//! registered partner and the confirmation banner. One owner drives it through `&mut self`.

mod controller;
mod dashboard;
mod state;

pub use controller::{AppShell, PARTNER_BANNER_TEXT, REQUEST_BANNER_TEXT};
pub use dashboard::Dashboard;
pub use state::{Banner, ModalItem, RequestModal, Screen, ServiceKind, UnknownView, View};
