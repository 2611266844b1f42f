//! Process adapters for the `CommandRunner` port.

mod recording;
mod system;

pub use recording::RecordingRunner;
pub use system::SystemCommandRunner;
