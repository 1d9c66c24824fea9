//! Call-time interception: replacement setters and call wrappers that run
//! the registered chains before delegating to the original body.

pub mod accessor;
pub mod parameters;
