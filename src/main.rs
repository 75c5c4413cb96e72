//! # Syntax Tour
//!
//! An interactive tour of Rust syntax.
//!

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
    tour::term::main();
}
