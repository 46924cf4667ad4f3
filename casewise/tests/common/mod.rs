#![allow(dead_code)]

use std::any::Any;

// ============================================================================
// Test Input Types
// ============================================================================

/// The open input domain used throughout the tests.
pub type Input = dyn Any + Send + Sync;

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ping {
    pub seq: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shutdown {
    pub reason: String,
}

/// Boxes a value into the open input domain.
pub fn boxed<T: Any + Send + Sync>(value: T) -> Box<Input> {
    Box::new(value)
}
