pub mod config;
pub mod connection;
pub mod entities;
pub mod repositories;
pub mod service;

pub use config::ServiceConfig;
pub use service::SubmissionService;
