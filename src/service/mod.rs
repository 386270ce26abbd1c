//! DeveloperService: business rules over an injected record store.

mod developer;
pub use developer::DeveloperService;
