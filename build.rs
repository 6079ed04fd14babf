fn main() {
    // ESP-IDF link/env plumbing — a no-op for host-target builds.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
