//! Core library for Captura.
//!
//! Everything that is not HTTP plumbing lives here: the submission record
//! and its tolerant-reader input type, the intake service that persists
//! submissions through a [`captura_store::DocumentStore`], the multi-step
//! form session (step navigation + per-field validation), and the submit
//! lifecycle controller that client front ends drive.

pub mod controller;
pub mod error;
pub mod form;
pub mod intake;
pub mod submission;
pub mod validate;
