pub mod demo_level;
pub mod prefabs;

pub use demo_level::{load_demo_level, DemoLevel};
