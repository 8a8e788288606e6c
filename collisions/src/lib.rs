pub mod config;
pub mod detection;
pub mod policy;
pub mod world;

pub use config::Config;
pub use detection::{detect_collisions, detect_collisions_with, Colliders, Proximity};
pub use policy::{marked, remove_colliders, CollisionPolicy};
pub use world::World;
