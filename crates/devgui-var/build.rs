use std::env;

fn main() {
    let feature = |name: &str| {
        let var = format!("CARGO_FEATURE_{}", name.to_uppercase());
        env::var_os(var).is_some()
    };
    let debug_build = env::var("PROFILE").is_ok_and(|p| p == "debug");

    if debug_build && feature("debug_default") && !feature("type_names") {
        println!("cargo:rustc-cfg=feature=\"type_names\"");
    }
}
