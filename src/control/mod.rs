//! Game loop: lifecycle, tick scheduling and observer notifications

pub mod controller;
pub mod scheduler;

pub use controller::{Controller, GameObserver, NullObserver, Phase};
pub use scheduler::{ManualScheduler, Scheduler, TickToken, TokioScheduler};
