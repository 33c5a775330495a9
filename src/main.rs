// This binary crate is intentionally minimal.
// All machine logic lives in the library (src/lib.rs and its modules).
// Run examples with:
//   cargo run --example clusters
fn main() {
    println!("magnetite-rbm: a from-scratch restricted Boltzmann machine in Rust.");
    println!("Run `cargo run --example clusters` to see the two-cluster demo.");
}
