//! Business operations behind the route handlers.
//!
//! Each operation is a short sequence of data-service calls with the
//! ordering contracts documented on the function itself; the handlers in
//! `routes/` stay thin.

pub mod nominations;
pub mod registrations;
pub mod roles;
pub mod rollover;
pub mod users;
