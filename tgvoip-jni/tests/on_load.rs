use tgvoip_jni::sys::{JNI_VERSION_1_6, jint};
use tgvoip_jni::voip_func;

voip_func! {
    fn nativeGetConnectionMaxLayer(env) -> jint {
        let _ = env;
        92
    }
}

tgvoip_jni::on_load!(|vm| {
    let _ = vm;
});

#[test]
fn on_load_reports_supported_version() {
    let version = unsafe { JNI_OnLoad(core::ptr::null_mut(), core::ptr::null_mut()) };
    assert_eq!(version, JNI_VERSION_1_6);
}

#[test]
fn on_load_registration_is_idempotent() {
    // `JNI_OnLoad` re-registers the export table after the static ctor
    // already did; the registry must not grow from the second pass.
    let before = tgvoip_jni::Registry::global().read().len();
    unsafe {
        JNI_OnLoad(core::ptr::null_mut(), core::ptr::null_mut());
    }
    assert_eq!(tgvoip_jni::Registry::global().read().len(), before);
    assert!(
        tgvoip_jni::Registry::global()
            .get_by_short_name("nativeGetConnectionMaxLayer")
            .is_some()
    );
}
