#![doc = include_str!("../README.md")]

pub use tgvoip_jni_registry::{
    EXPORTS, ExportSite, NameError, PACKAGE, Registry, RegistryReadGuard, SYMBOL_PREFIX,
    exported_name, mangled_export_name,
};

/// Raw JNI types (`JNIEnv`, `JavaVM`, `jboolean`, `jint`, ...), re-exported
/// for use in entry-point signatures.
pub use jni::sys;

/// Declare and define a native entry point of the
/// `org.thunderdog.challegram.voip` bridge.
///
/// Each function declared through this macro is emitted with flat (non-name-
/// mangled) external linkage under the symbol
/// `Java_org_thunderdog_challegram_voip_<name>`: the fixed package path with
/// `.` replaced by `_`, and the short name appended verbatim into the same
/// identifier. This is the exact string the managed runtime's dynamic linker
/// resolves when the Java class binds its `native` methods, so the symbol
/// name is deterministic and purely a function of the short name.
///
/// The first parameter of every entry point is always the opaque runtime
/// environment handle (`*mut JNIEnv`). The macro pins its type; the caller
/// chooses only the binding name, followed by any further parameters:
///
/// ```
/// use tgvoip_jni::sys::{JNI_TRUE, jboolean, jint, jlong, jobject};
///
/// tgvoip_jni::voip_func! {
///     /// Initializes the native voip library.
///     fn nativeInit(env) -> jboolean {
///         let _ = env;
///         JNI_TRUE
///     }
///
///     fn nativeCreate(env, controller: jobject, layer: jint) -> jlong {
///         let _ = (env, controller);
///         jlong::from(layer)
///     }
///
///     fn nativeRelease(env, handle: jlong) {
///         let _ = (env, handle);
///     }
/// }
/// # fn main() {}
/// ```
///
/// Declaring the same short name twice in one scope is a build failure, and
/// two crates exporting the same short name fail to link on the duplicate
/// flat symbol. Accidental double registration is caught at build time, not
/// at run time:
///
/// ```compile_fail
/// tgvoip_jni::voip_func! {
///     fn nativeStart(env) {
///         let _ = env;
///     }
///     fn nativeStart(env) {
///         let _ = env;
///     }
/// }
/// # fn main() {}
/// ```
///
/// # Safety
///
/// The generated function is `unsafe extern "system"`: it is meant to be
/// invoked by the VM with a valid `JNIEnv` pointer for the current thread,
/// and the body is responsible for upholding the JNI contract (local frame
/// discipline, no panics across the boundary, handle types matching the Java
/// declaration).
///
/// # Low-level details
///
/// The exported name is attached with `#[unsafe(export_name = ...)]` rather
/// than by pasting tokens into the Rust item name, so the function keeps its
/// short name on the Rust side and remains callable from tests. Each
/// expansion also records an [`ExportSite`] in the link-time [`EXPORTS`]
/// table (a `linkme` distributed slice); a static constructor registers the
/// table with the global [`Registry`] when the library is loaded, which is
/// what [`on_load!`] reports and what tooling can enumerate. The site entry
/// is plain static data; the macro adds no runtime behavior to the entry
/// point itself.
#[macro_export]
macro_rules! voip_func {
    ($($(#[$meta:meta])* fn $name:ident($env:ident $(, $arg:ident: $arg_ty:ty)* $(,)?) $(-> $ret:ty)? $body:block)+) => {
        $(
            $crate::voip_func! {
                @impl
                $(#[$meta])*
                fn $name($env $(, $arg: $arg_ty)*) -> ($($ret)?) $body
            }
        )+
    };
    (@impl $(#[$meta:meta])* fn $name:ident($env:ident $(, $arg:ident: $arg_ty:ty)*) -> $ret:ty $body:block) => {
        const _: () = {
            #[$crate::internal::linkme::distributed_slice($crate::internal::EXPORTS)]
            #[linkme(crate = $crate::internal::linkme)]
            static SITE: $crate::internal::ExportSite = $crate::internal::ExportSite::new(
                stringify!($name),
                concat!("Java_org_thunderdog_challegram_voip_", stringify!($name)),
                module_path!(),
            );
        };

        $(#[$meta])*
        #[unsafe(export_name = concat!("Java_org_thunderdog_challegram_voip_", stringify!($name)))]
        pub unsafe extern "system" fn $name(
            $env: *mut $crate::sys::JNIEnv
            $(, $arg: $arg_ty)*
        ) -> $ret $body
    };
}

/// Emit the library's `JNI_OnLoad` entry point.
///
/// The VM calls `JNI_OnLoad` once, right after `System.loadLibrary()` maps
/// the native library. The generated implementation installs the Android
/// `log` backend (on Android targets only), registers the [`EXPORTS`] table
/// with the global [`Registry`] (a no-op when the static constructor already
/// did), and returns `JNI_VERSION_1_6`.
///
/// ```
/// tgvoip_jni::on_load!();
/// # fn main() {}
/// ```
///
/// Engine-specific setup can run before the version is returned; the body
/// receives the raw `*mut JavaVM`:
///
/// ```
/// tgvoip_jni::on_load!(|vm| {
///     let _ = vm;
/// });
/// # fn main() {}
/// ```
///
/// **IMPORTANT:** Invoke this at most once per final binary. A second
/// invocation anywhere in the link fails on the duplicate `JNI_OnLoad`
/// symbol, the same way duplicate entry points do.
#[macro_export]
macro_rules! on_load {
    () => {
        $crate::on_load!(|_vm| {});
    };
    (|$vm:ident| $body:block) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "system" fn JNI_OnLoad(
            vm: *mut $crate::sys::JavaVM,
            _reserved: *mut ::core::ffi::c_void,
        ) -> $crate::sys::jint {
            $crate::internal::init_on_load();
            let $vm = vm;
            $body
            $crate::sys::JNI_VERSION_1_6
        }
    };
}

#[doc(hidden)]
pub mod internal {
    pub use linkme;
    pub use tgvoip_jni_registry::{EXPORTS, ExportSite, Registry};

    /// Bootstrap shared by every `on_load!` expansion.
    pub fn init_on_load() {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_tag("tgvoip")
                .with_max_level(log::LevelFilter::Info),
        );

        // Static constructors already ran when the loader mapped us, but
        // registration is idempotent and this covers platforms that skip
        // ctors.
        Registry::global().register_sites(&EXPORTS);
        log::info!(
            "tgvoip: {} native entry points registered",
            Registry::global().read().len()
        );
    }
}
