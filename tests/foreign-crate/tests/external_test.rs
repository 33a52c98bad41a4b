use foreign_crate::foreign_layer;
use tgvoip_jni::{Registry, exported_name};

// The export site lives in `foreign_crate`, not in this test crate; the
// link-time table must still pick it up.
#[test]
fn external_declaration_is_registered() {
    let symbol = exported_name("nativeGetForeignLayer").unwrap();
    let site = Registry::global().read().get(&symbol).expect("missing export site");
    assert_eq!(site.short_name(), "nativeGetForeignLayer");
}

#[test]
fn external_declaration_is_callable() {
    assert_eq!(foreign_layer(), 74);
}
