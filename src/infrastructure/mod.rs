/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - File system operations (registry file)
/// - Process execution (the external git binary)
pub mod filesystem;
pub mod process;

// Re-export commonly used types
pub use filesystem::registry_store::RegistryStore;
pub use process::{CommandExecutor, SystemCommandExecutor};
