/*!
 * Volume Descriptors
 * Capability interface consumed from the volume-management layer
 */

mod info;

pub use info::{RootResolver, VolumeInfo};
