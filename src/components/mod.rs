//! Interactive canvases and the shared pieces of the app shell.

pub mod annotation;
pub mod diagram;
pub mod generation;
pub mod layout;
pub mod pipeline;
