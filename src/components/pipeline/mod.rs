mod component;
mod palette;
mod panel;
mod state;
mod types;

pub use component::PipelineCanvas;
pub use palette::ComponentPalette;
pub use panel::ConfigPanel;
pub use state::PipelineState;
pub use types::{ConfigForm, Connection, Node, NodeKind, PipelineConfig};
