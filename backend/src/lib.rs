//! Shopping cart backend library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] holds entities, ports, and
//! the resource service; [`inbound`] adapts HTTP requests onto the driving
//! ports; [`outbound`] implements the persistence port with Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
