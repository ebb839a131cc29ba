//! # portfolio
//!
//! Page state for a single-page personal portfolio: which section the
//! visitor is looking at, when the navbar turns opaque, what the hero
//! typewriter shows, and whether the contact form is ready to send.
//!
//! The browser build (`site/`, Leptos CSR) is a thin adapter over this crate:
//! it measures sections from the DOM, feeds scroll and pointer events into a
//! [`page::PageState`], and renders what comes out. Everything here runs
//! natively, which is where it is tested.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio::config::SiteConfig;
//! use portfolio::page::PageState;
//! use portfolio::section::{ScrollState, Section};
//!
//! let layout = vec![
//!     Section::new("home", 0.0, 800.0),
//!     Section::new("skills", 800.0, 400.0),
//! ];
//!
//! let mut page = PageState::portfolio(&SiteConfig::default());
//! page.on_scroll(ScrollState::new(500.0, 900.0), &layout);
//! assert_eq!(page.active(), Some("skills"));
//! assert!(page.flags().navbar_opaque);
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! portfolio check                                   # validate built-in content
//! portfolio probe --layout layout.json --y 500 --viewport 900
//! portfolio content > portfolio.json                # dump built-in content
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod flags;
pub mod glow;
pub mod page;
pub mod section;
pub mod tracker;
pub mod typewriter;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use page::PageState;
pub use section::{LayoutSource, ScrollState, Section, SectionGeometry, SectionTable};
pub use tracker::{ScrollDriver, SectionTracker};
