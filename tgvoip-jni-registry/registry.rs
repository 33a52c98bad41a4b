use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hashbrown::{HashMap, hash_map};

use crate::ExportSite;

/// The global table of exported native entry points.
///
/// Symbol resolution itself is performed by the managed runtime's dynamic
/// linker against the flat symbol names; this registry exists so that load
/// diagnostics and tooling can enumerate what the current binary exports.
pub struct Registry {
    store: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    by_symbol: HashMap<&'static str, &'static ExportSite>,
    by_short_name: HashMap<&'static str, &'static ExportSite>,
}

/// Export registry read lock guard
pub struct RegistryReadGuard {
    guard: RwLockReadGuard<'static, Store>,
}

impl Registry {
    #[inline]
    fn new() -> Self {
        Self {
            store: RwLock::default(),
        }
    }

    /// Get the global registry.
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }

    /// Acquire a global read lock of the registry's data.
    ///
    /// New sites cannot be registered while the read lock is held.
    #[inline]
    #[must_use]
    pub fn read(&'static self) -> RegistryReadGuard {
        RegistryReadGuard {
            guard: self
                .store
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        }
    }

    #[inline]
    fn write(&'static self) -> RwLockWriteGuard<'static, Store> {
        self.store
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Register the sites from an export table.
    ///
    /// You should never need to call this function manually: it runs in a
    /// static constructor when the binary (or the dynamic library containing
    /// it) is loaded, and again from `JNI_OnLoad` for loaders that skip
    /// static constructors. Registration is idempotent.
    ///
    /// A symbol that is already present from a *different* site can only mean
    /// two independently loaded libraries export the same entry point, since
    /// static linking fails on the duplicate long before this runs. The
    /// conflict is logged, and panics when the `debug-assertions` feature is
    /// enabled; the first registration wins either way.
    pub fn register_sites(&'static self, sites: &'static [ExportSite]) {
        let mut write = self.write();
        let Store {
            by_symbol,
            by_short_name,
        } = &mut *write;

        for site in sites {
            match by_symbol.entry(site.symbol()) {
                hash_map::Entry::Occupied(entry) => {
                    let existing: &'static ExportSite = entry.get();
                    if !core::ptr::eq(existing, site) {
                        log::warn!(
                            "duplicate native export {}: first registered in {}, ignored in {}",
                            site.symbol(),
                            existing.module(),
                            site.module(),
                        );
                        #[cfg(feature = "debug-assertions")]
                        panic!(
                            "duplicate native export {}: registered in both {} and {}",
                            site.symbol(),
                            existing.module(),
                            site.module(),
                        );
                    }
                }
                hash_map::Entry::Vacant(entry) => {
                    entry.insert(site);
                    by_short_name.insert(site.short_name(), site);
                }
            }
        }
    }

    /// Look up an export site by its flat symbol name.
    #[inline]
    #[must_use]
    pub fn get(&'static self, symbol: &str) -> Option<&'static ExportSite> {
        self.read().get(symbol)
    }

    /// Look up an export site by its short method name.
    #[inline]
    #[must_use]
    pub fn get_by_short_name(&'static self, short_name: &str) -> Option<&'static ExportSite> {
        self.read().get_by_short_name(short_name)
    }
}

impl RegistryReadGuard {
    /// Get the number of registered entry points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guard.by_symbol.len()
    }

    /// Whether or not any entry points are present in the registry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard.by_symbol.is_empty()
    }

    /// Look up an export site by its flat symbol name.
    ///
    /// This is a simple hash table lookup.
    #[inline]
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&'static ExportSite> {
        self.guard.by_symbol.get(symbol).copied()
    }

    /// Look up an export site by its short method name.
    #[inline]
    #[must_use]
    pub fn get_by_short_name(&self, short_name: &str) -> Option<&'static ExportSite> {
        self.guard.by_short_name.get(short_name).copied()
    }

    /// Iterate over all registered export sites, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &'static ExportSite> + '_ {
        self.guard.by_symbol.values().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SITES: [ExportSite; 2] = [
        ExportSite::new(
            "nativeAlpha",
            "Java_org_thunderdog_challegram_voip_nativeAlpha",
            module_path!(),
        ),
        ExportSite::new(
            "nativeBeta",
            "Java_org_thunderdog_challegram_voip_nativeBeta",
            module_path!(),
        ),
    ];

    #[test]
    fn registration_is_idempotent() {
        Registry::global().register_sites(&SITES);
        Registry::global().register_sites(&SITES);

        let read = Registry::global().read();
        assert!(read.len() >= 2);
        let alpha = read
            .get("Java_org_thunderdog_challegram_voip_nativeAlpha")
            .unwrap();
        assert_eq!(alpha.short_name(), "nativeAlpha");
        assert_eq!(
            read.get_by_short_name("nativeBeta").map(ExportSite::symbol),
            Some("Java_org_thunderdog_challegram_voip_nativeBeta")
        );
    }

    #[test]
    fn unknown_symbols_are_absent() {
        let read = Registry::global().read();
        assert!(read.get("Java_org_thunderdog_challegram_voip_nativeMissing").is_none());
        assert!(read.get_by_short_name("nativeMissing").is_none());
    }

    #[cfg(not(feature = "debug-assertions"))]
    #[test]
    fn first_site_wins_on_duplicate_symbol() {
        static FIRST: [ExportSite; 1] = [ExportSite::new(
            "nativeDup",
            "Java_org_thunderdog_challegram_voip_nativeDup",
            "first",
        )];
        static SECOND: [ExportSite; 1] = [ExportSite::new(
            "nativeDup",
            "Java_org_thunderdog_challegram_voip_nativeDup",
            "second",
        )];

        Registry::global().register_sites(&FIRST);
        Registry::global().register_sites(&SECOND);

        let read = Registry::global().read();
        assert_eq!(
            read.get("Java_org_thunderdog_challegram_voip_nativeDup")
                .map(ExportSite::module),
            Some("first")
        );
    }
}
