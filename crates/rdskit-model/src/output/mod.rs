//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

mod cluster;
mod custom_availability_zone;
mod event;
mod instance;
mod option_group;
mod parameter_group;
mod proxy;
mod snapshot;
mod tagging;

pub use cluster::*;
pub use custom_availability_zone::*;
pub use event::*;
pub use instance::*;
pub use option_group::*;
pub use parameter_group::*;
pub use proxy::*;
pub use snapshot::*;
pub use tagging::*;
