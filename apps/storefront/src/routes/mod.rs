//! # Routes Module
//!
//! Route handlers grouped by concern.
//!
//! ## Route Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront API Surface                            │
//! │                                                                         │
//! │  catalog     GET  /products, /products/featured                        │
//! │              GET  /collections, /collections/{slug}/...                 │
//! │              GET  /articles, /articles/{slug}                           │
//! │                                                                         │
//! │  cart        GET  /cart           DELETE /cart                          │
//! │              POST /cart/items     PATCH/DELETE /cart/items/{id}         │
//! │                                                                         │
//! │  currency    GET  /currency       PUT /currency                         │
//! │                                                                         │
//! │  checkout    POST /checkout                                             │
//! │                                                                         │
//! │  inquiries   POST /inquiries                                            │
//! │                                                                         │
//! │  admin       /admin/orders, /admin/inquiries,                           │
//! │              /admin/products, /admin/articles, /admin/uploads           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod currency;
pub mod inquiries;
