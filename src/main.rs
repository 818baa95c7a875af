//! Mini-Cross CLI (for testing purposes only)
//! The main interface is through WASM bindings.

fn main() {
    println!("Mini-Cross Crossword Widget Core");
    println!("================================");
    println!();
    println!("This is a library crate. To use it:");
    println!();
    println!("  1. Build WASM: wasm-pack build --target web");
    println!("  2. Serve the frontend and pass it the puzzle JSON");
    println!();
    println!("For testing the core library:");
    println!("  cargo test");
}
