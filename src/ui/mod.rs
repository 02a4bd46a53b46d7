//! UI rendering module for the Pokédex
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod catalog_list;
pub mod help_overlay;
pub mod record_detail;
pub mod widgets;

pub use catalog_list::render_catalog_list;
pub use help_overlay::render as render_help_overlay;
pub use record_detail::render as render_record_detail;
