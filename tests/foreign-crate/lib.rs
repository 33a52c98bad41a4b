use tgvoip_jni::sys::{JNIEnv, jint};
use tgvoip_jni::voip_func;

voip_func! {
    /// Protocol layer advertised by this library.
    fn nativeGetForeignLayer(env) -> jint {
        let _ = env;
        74
    }
}

#[must_use]
pub fn foreign_layer() -> jint {
    let env: *mut JNIEnv = core::ptr::null_mut();
    unsafe { nativeGetForeignLayer(env) }
}
