//! List-view (data-grid) engine.
//!
//! A [`ListView`](service::list_view::ListView) is declared per request with
//! columns, filters and actions, bound to a [`RecordRepository`] acting as its
//! base scope, and resolved once against the request parameters into a
//! display-ready [`ListViewResponseDTO`](service::list_view::dto::ListViewResponseDTO).
//!
//! [`RecordRepository`]: repository::record_repository::RecordRepository

pub mod config;
pub mod model;
pub mod repository;
pub mod service;
