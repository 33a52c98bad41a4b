/// Registration record for one exported native entry point, created by the
/// `voip_func!` macro in `tgvoip-jni`.
///
/// You should never need to construct this manually.
#[derive(Debug)]
pub struct ExportSite {
    short_name: &'static str,
    symbol: &'static str,
    module: &'static str,
}

impl ExportSite {
    #[inline]
    #[must_use]
    #[doc(hidden)]
    pub const fn new(
        short_name: &'static str,
        symbol: &'static str,
        module: &'static str,
    ) -> Self {
        Self {
            short_name,
            symbol,
            module,
        }
    }

    /// The short method name, as written on the Java side.
    #[inline]
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        self.short_name
    }

    /// The flat symbol the dynamic loader resolves for this entry point.
    #[inline]
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Rust module path of the declaration site.
    #[inline]
    #[must_use]
    pub const fn module(&self) -> &'static str {
        self.module
    }
}

#[cfg(feature = "serde")]
const _: () = {
    impl serde::Serialize for ExportSite {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeStruct;

            let mut out = serializer.serialize_struct("ExportSite", 3)?;
            out.serialize_field("short_name", self.short_name)?;
            out.serialize_field("symbol", self.symbol)?;
            out.serialize_field("module", self.module)?;
            out.end()
        }
    }
};
