//! Panchsutra: data-oriented core of a healthcare services site.
//!
//! ARCHITECTURE
//! ============
//! Pages are thin views over the library. Each interaction goes through a
//! validator or an action handler, which mutates the key-value store and/or
//! posts a notification, after which the page re-renders:
//!
//! - [`storage`] holds the key-value store and record CRUD,
//! - [`notify`] queues transient messages,
//! - [`validate`] holds field rules and form state,
//! - [`auth`] covers the mock login, sessions and role navigation,
//! - [`dashboard`], [`navigation`] and [`landing`] implement the page actions,
//! - [`chat`] is the widget plus the rule-based `/chat` responder.
//!
//! The binary serves `/chat`, `/healthz` and the static site via [`routes`].

pub mod auth;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod landing;
pub mod navigation;
pub mod notify;
pub mod routes;
pub mod state;
pub mod storage;
pub mod validate;
