//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache expiry: purges expired cache entries at configured intervals

mod expiry;

pub use expiry::spawn_expiry_task;
