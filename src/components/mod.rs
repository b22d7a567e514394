pub mod app;
pub mod hint;
pub mod hub;
pub mod milestone;
pub mod pointer;
pub mod resize;
pub mod timeline;
pub mod timer;
