//! tapt-portal - backend for the TAPT membership-association website.
//!
//! Public informational pages and member forms talk to the routes in
//! [`routes::public`]; the admin back-office uses [`routes::admin`]
//! behind the bearer-token authorization gate in [`auth::user`]. The
//! multi-step business workflows (rollover, role bootstrap, intake
//! guards) live in [`ops`].

pub mod auth;
pub mod config;
pub mod database;
pub mod domain;
pub mod entities;
pub mod error;
pub mod ops;
pub mod router;
pub mod routes;
pub mod util;
