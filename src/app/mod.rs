// Application layer - Use case interactors

pub mod remux_interactor;

// Re-export interactors
pub use remux_interactor::{RemuxConfig, RemuxInteractor};
