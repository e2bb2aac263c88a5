pub mod dialog;
pub mod header;
pub mod input_panel;
pub mod result_panel;

pub use dialog::Dialog;
pub use header::HeaderWidget;
pub use input_panel::InputPanel;
pub use result_panel::ResultPanel;
