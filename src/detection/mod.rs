//! Machine classification.
//!
//! Produces the immutable [`Facts`] describing the machine being
//! provisioned: platform, architecture, distribution, device id, and
//! package manager kind. Facts are computed once at startup and passed
//! by value into every component.

pub mod command_detection;
pub mod facts;
pub mod package_manager;

pub use command_detection::command_succeeds;
pub use facts::{Facts, UNKNOWN_DEVICE};
pub use package_manager::{sudo_handle, PackageManagerKind};
