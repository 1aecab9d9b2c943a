// src/core/mod.rs

pub mod cell;
pub mod html;
pub mod net;
pub mod sanitize;
