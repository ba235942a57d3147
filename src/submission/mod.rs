//! Registration submission collaborators

mod client;
mod traits;

pub use client::SimulatedSubmitter;
pub use traits::RegistrationSubmitter;

#[cfg(test)]
pub use traits::MockRegistrationSubmitter;
