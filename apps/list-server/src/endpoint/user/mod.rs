pub mod controller;
pub(crate) mod view;
