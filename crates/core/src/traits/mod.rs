pub mod control;
pub mod directory;
pub mod registry;

pub use control::DispatchControlService;
pub use directory::{DirectoryService, ParticipantStream};
pub use registry::{AccountRegistry, WorkerHandle};
