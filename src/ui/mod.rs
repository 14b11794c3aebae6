//! UI-Layer mit egui: Zeichenfläche, Toolbar, Optionen, Status.

pub mod canvas;
pub mod input;
pub mod options_panel;
pub mod status;
pub mod toolbar;

pub use canvas::EguiCanvas;
pub use input::InputState;
pub use options_panel::render_options_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
