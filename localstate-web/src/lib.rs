pub(crate) mod components;
pub(crate) mod vars;

pub mod app;
