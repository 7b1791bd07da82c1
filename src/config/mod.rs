//! Alignment configuration: property-bag parsing and session state.

mod properties;
mod state;

pub use properties::{bool_property, parse_property_file, properties_by_prefix, PropertyBag};
pub use state::{
    AlignmentConfig, Precedence, DEPENDENCY_MANAGEMENT_PROPERTY, DEPENDENCY_SOURCE_PROPERTY,
    REPORT_NON_ALIGNED_PROPERTY, REPORT_OUTPUT_FILE_PROPERTY,
};
