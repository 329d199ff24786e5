// src/lib.rs

pub mod common;
pub mod data;
pub mod debug;
pub mod readers;
