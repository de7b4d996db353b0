pub mod color;
pub mod composite;
pub mod input;
pub mod messages;
pub mod model;
pub mod palette;
pub mod render;
pub mod save;
pub mod settings;
pub mod settings_store;
pub mod snapshot;
pub mod state;

pub use input::GestureController;
pub use messages::{DrawHost, Milestone, PointerEvent};
pub use render::{render, DrawCommand};
pub use snapshot::{deserialize, serialize, CorruptSnapshotError, Snapshot};
pub use state::DrawSession;
