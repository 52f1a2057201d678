//! Forgeworks Engine library.
//!
//! ## Structure
//!
//! - `config` - Demo configuration from environment variables
//! - `app` - Application composition
//! - `demo` - The four factory demonstrations

pub mod app;
pub mod config;
pub mod demo;

pub use app::App;
pub use config::DemoConfig;
