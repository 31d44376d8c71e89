pub mod envelope;
pub mod payloads;
pub mod request;

pub use envelope::{Envelope, ResponseData};
pub use payloads::{EchoPayload, GreetingPayload, HealthPayload, ECHO_PREFIX, GREETING, HEALTHY};
pub use request::EchoRequest;
