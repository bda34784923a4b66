fn main() {
    // Footer shows when the site was built
    let built = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_TIME={built}");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data");
    for var in [
        "PORTFOLIO_PROJECTS_URL",
        "PORTFOLIO_BLOGS_URL",
        "PORTFOLIO_LECTURES_URL",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }
}
