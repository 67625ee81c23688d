pub mod holidays;
pub mod middleware;
pub mod router;

pub use middleware::*;
pub use router::build_router;
