use tgvoip_jni::sys::{JNI_TRUE, jboolean, jint, jlong};
use tgvoip_jni::voip_func;

voip_func! {
    fn nativeInit(env) -> jboolean {
        let _ = env;
        JNI_TRUE
    }

    fn nativeSetNetworkType(env, kind: jint) -> jlong {
        let _ = env;
        jlong::from(kind)
    }
}

fn main() {
    for site in tgvoip_jni::Registry::global().read().iter() {
        println!("{} -> {} ({})", site.short_name(), site.symbol(), site.module());
    }
}
