// ABOUTME: Library crate for phoneflow exposing app state and components
// for testing and external use

#![allow(missing_docs)]

pub mod app;
pub mod components;
