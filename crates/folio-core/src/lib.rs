#![cfg_attr(not(test), no_std)]

//! Portfolio page motion core: typing effect, scroll-driven section tracking
//! and the page effects around them, driven by host ticks.

pub mod app;
pub mod clipboard;
pub mod contact;
pub mod counter;
pub mod input;
pub mod notify;
pub mod page;
pub mod render;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod settings;
pub mod typing;
