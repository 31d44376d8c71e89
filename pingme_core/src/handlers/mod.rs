//! Route handlers and the route table

pub mod echo;
pub mod greeting;
pub mod health;
pub mod routes;

pub use echo::handle_echo;
pub use greeting::handle_greeting;
pub use health::handle_health;
pub use routes::create_routes;
