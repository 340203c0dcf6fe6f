//! Lesson 4: Generic minimum
//!
//! Run with: cargo run --bin generics

use idiom_lessons::generics::g_min;

fn main() {
    println!("{}", g_min::<i32>(1, 2));
}
