//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `clubsite_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("clubsite_core ping={}", clubsite_core::ping());
    println!("clubsite_core version={}", clubsite_core::core_version());

    match clubsite_core::builtin_catalog() {
        Ok(catalog) => {
            println!(
                "catalog team={} alumni={} events={} projects={}",
                catalog.team().entries().len(),
                catalog.alumni().entries().len(),
                catalog.events().upcoming().len() + catalog.events().past().len(),
                catalog.projects().len()
            );
        }
        Err(err) => {
            eprintln!("catalog load failed: {err}");
            std::process::exit(1);
        }
    }
}
