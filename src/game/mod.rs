//! Game runtime
//!
//! Entity ids and the scheduling of per-entity work.
//!
//! Key concepts:
//! - Entity: Generational index for safe entity references
//! - EntityAllocator: hands out ids and keeps the live set in spawn order
//! - DispersedScheduler: runs a system over every live entity once per
//!   interval, a few entities per tick

pub mod dispersed;
pub mod entity;

pub use dispersed::{DispersedScheduler, DispersedSystem, SchedulerError, TickReport};
pub use entity::{Entity, EntityAllocator};
