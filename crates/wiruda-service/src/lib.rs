//! # wiruda-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Every operation takes the caller's resolved profile as an explicit
//! `Option<&Profile>` and runs the access policy before touching storage.

pub mod dto;
pub mod services;

pub use services::{ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
