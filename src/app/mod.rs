pub mod request_id;
pub mod state;

pub use request_id::RequestId;
pub use state::{AppShell, View};
