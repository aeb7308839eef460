use vergen::*;

fn main() {
    // Outside a git checkout the SHA is simply unavailable
    if let Err(e) = gen(ConstantsFlags::all()) {
        println!("cargo:warning=unable to generate version info: {}", e);
    }

    let mut features = vec![];
    for (k, _v) in std::env::vars() {
        match k.as_str() {
            "CARGO_FEATURE_WITH_MPI" => features.push("with-mpi"),
            _ => {}
        }
    }
    let features = features.join(",");
    println!("cargo:rustc-env=QELGEN_ACTIVE_FEATURES={}", features);
}
