mod classifier;
mod presets;

pub use classifier::{classify, predict_services, predict_severity};
pub use presets::{demo_presets, DemoPreset};
