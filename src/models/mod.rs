// src/models/mod.rs

pub mod question;
pub mod response;
