#[cfg(test)]
pub mod mocks;

#[cfg(test)]
pub use mocks::MockTransport;
