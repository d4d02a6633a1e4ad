//! Domain entities - Objects with lifecycle beyond a single value

mod route;

pub use route::Route;
