//! Runtime support crate for `tgvoip-jni`
//!
//! You probably don't need to use this crate directly. Use the
//! [`tgvoip-jni`](../tgvoip_jni) crate instead.
//!
//! This crate owns everything the export macros expand against: the
//! exported-name derivation for the `org.thunderdog.challegram.voip` bridge,
//! the per-declaration [`ExportSite`] records, the link-time [`EXPORTS`]
//! table they are collected into, and the global [`Registry`] the table is
//! registered with when the library is loaded.
//!
//! The table is a single `linkme` distributed slice declared here so that
//! every crate in the dependency graph of the final JNI library contributes
//! to the same table. A static constructor registers it on load, before the
//! VM resolves any native method.

mod name;
mod registry;
mod site;

pub use name::*;
pub use registry::*;
pub use site::*;

use linkme::distributed_slice;

/// Link-time table of every native entry point declared through the export
/// macros, across all crates linked into the current binary.
#[distributed_slice]
pub static EXPORTS: [ExportSite] = [..];

ctor::declarative::ctor! {
    #[ctor]
    #[doc(hidden)]
    pub fn _tgvoip_register_exports() {
        Registry::global().register_sites(&EXPORTS);
    }
}
