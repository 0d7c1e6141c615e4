//! FGC stations service.
//!
//! Manages per-user favorite journeys between transit stations and per-user
//! friend lists. Every request is checked for shape first, then against the
//! business rules that depend on stored state, before anything is persisted.

pub mod config;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod store;
pub mod validation;
pub mod web;
