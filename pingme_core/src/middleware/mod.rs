//! Tower layers wrapped around the route table

pub mod logging;
