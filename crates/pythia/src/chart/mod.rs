pub mod data;
pub mod engine;
pub mod horary;
pub mod houses;
pub mod natal;
pub mod settings;
pub mod task;

pub use data::{BodyReading, Chart};
pub use engine::ChartEngine;
pub use horary::HoraryReading;
pub use houses::{arc_contains, find_house, house_of};
pub use natal::{dominant_element, largest_gap, ChartShape, NatalChart};
pub use settings::{ChartSettings, HORARY_BODIES, NATAL_BODIES};
pub use task::{horary_off_thread, natal_off_thread};
