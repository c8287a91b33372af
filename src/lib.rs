//! Bilingual (pt/en) personal portfolio page.
//!
//! The crate is the headless core of the page: static content tables, the
//! view state that user interaction mutates, a renderer that resolves it all
//! in the active language, and the outbound contact-message dispatch.

pub mod config;
pub mod contact;
pub mod content;
pub mod dispatch;
pub mod i18n;
pub mod page;
pub mod projects;
pub mod resume;
pub mod reveal;
pub mod toast;
