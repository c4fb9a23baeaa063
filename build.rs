fn main() {
    // Host builds (tests, fuzzing) have no ESP-IDF toolchain to point at.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
