pub mod error;
pub mod list_view;
pub(crate) mod mapper;
pub mod response;
