#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # fcs-entities
//!
//! Reusable, agnostic domain entities of the film comment service.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod film;
pub mod id;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
