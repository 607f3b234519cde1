//! Binaura Engine
//! ==============
//! Real-time binaural spatialization core. A single audio source is
//! positioned around the listener's head with interaural level and time
//! difference cues; parameters arrive at control rate while blocks are
//! rendered at audio rate without locks or allocations.

pub mod config;
pub mod error;
pub mod params;
pub mod scene;
pub mod spatializer;

pub use config::{EffectMode, SpatializerConfig};
pub use error::SpatializerError;
pub use params::{ParamSnapshot, SpatialControl};
pub use scene::Vec3;
pub use spatializer::BinauralSpatializer;
