//! HTTP surface: the inventory page and its form actions.

pub mod app;
