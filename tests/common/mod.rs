//! Integration test common infrastructure.
//!
//! Provides utilities for spawning test servers and scripting line-oriented
//! test clients against them.

#![allow(dead_code)]

pub mod client;
pub mod server;

#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use server::TestServer;
