// src/modules/mod.rs

pub mod chat;
pub mod completion;
pub mod session;
