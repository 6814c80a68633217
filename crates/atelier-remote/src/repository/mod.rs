//! # Repository Module
//!
//! Typed repositories over the remote collections.
//!
//! ## Typed Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Row Types at the Boundary                              │
//! │                                                                         │
//! │  The hosted tables answer with loosely structured JSON rows. Each      │
//! │  repository defines an explicit serde row struct (snake_case columns,  │
//! │  every nullable column an Option) and converts it to an atelier-core   │
//! │  type IMMEDIATELY after fetch:                                         │
//! │                                                                         │
//! │  GET /rest/v1/products  ──► ProductRow (serde) ──► core::Product       │
//! │                              decimal price          integer cents      │
//! │                                                                         │
//! │  Nothing outside this module ever sees a raw row.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`products::ProductRepository`] - catalog CRUD and lookups
//! - [`orders::OrderRepository`] - checkout submission, admin listing, stage updates
//! - [`inquiries::InquiryRepository`] - contact-form submissions
//! - [`content::ContentRepository`] - collections, categories, articles

pub mod content;
pub mod inquiries;
pub mod orders;
pub mod products;
