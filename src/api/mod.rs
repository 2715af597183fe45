//! Registry API seam.
//!
//! [`RegistryApi`] abstracts the remote service so orchestration code is
//! testable without a server: [`HttpRegistry`] is the production reqwest
//! implementation, [`MockRegistry`] a scripted stand-in for tests.

pub mod http;
pub mod mock;
pub mod traits;

pub use http::HttpRegistry;
pub use mock::{Endpoint, MockRegistry};
pub use traits::RegistryApi;
