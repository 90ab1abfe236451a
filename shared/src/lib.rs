pub mod auth;
pub mod error;
pub mod models;
pub mod offline;
pub mod share;
pub mod store;

#[cfg(test)]
mod tests;

// Test utilities - publicly exposed with test feature
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
