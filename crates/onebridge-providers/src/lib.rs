// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Classification rows
pub mod event_spec;

// Conversion options
pub mod options;

// Provider implementations
pub mod yunhu;

// Event envelope builder
pub mod builder;

// Provider registry
pub mod registry;

// Traits
pub use traits::EventConverter;

// Classification
pub use event_spec::{DetailType, EventCategory, EventSpec};

// Options
pub use options::{CommandFormPlacement, ConvertOptions};

// Provider converters
pub use yunhu::{YunhuConverter, convert_yunhu_event};

// Registry
pub use registry::{
    create_all_converters, create_converter, get_all_providers, get_provider_metadata,
    get_provider_names,
};

// Error types
pub use error::{Error, Result};
