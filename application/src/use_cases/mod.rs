//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod execute_plan;
pub mod mission_queries;
pub mod orchestrate_mission;
pub mod register_mission;
#[cfg(test)]
pub(crate) mod testing;
