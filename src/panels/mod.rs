mod central_panel;
mod options_panel;
mod tools_panel;

pub use central_panel::{InputTracker, central_panel, translate_events};
pub use options_panel::options_panel;
pub use tools_panel::tools_panel;
