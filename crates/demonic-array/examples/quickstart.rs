//! Demonic Quickstart — build, grow, reshape and drain a sequence.
//!
//! Demonstrates:
//!   1. Geometric growth on `push_back`
//!   2. Insertion and erasure with tail shifting
//!   3. `pop_back` on an empty sequence
//!   4. Lossy `reserve` and cursor walking
//!
//! Run with:
//!   RUST_LOG=demonic_array=trace cargo run --example quickstart

use demonic_array::Sequence;
use tracing_subscriber::EnvFilter;

fn show(label: &str, seq: &Sequence<i32>) {
    println!(
        "{label:<24} {seq:?}  len={} capacity={}",
        seq.len(),
        seq.capacity()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ─── Growth ─────────────────────────────────────────────────

    let mut seq = Sequence::new();
    for value in [5, 7, 9] {
        seq.push_back(value);
        show(&format!("push_back({value})"), &seq);
    }

    // ─── Shifting ───────────────────────────────────────────────

    seq.insert(1, 99);
    show("insert(1, 99)", &seq);
    seq.erase(0);
    show("erase(0)", &seq);

    // ─── Draining ───────────────────────────────────────────────

    while seq.pop_back() {
        show("pop_back()", &seq);
    }
    println!("pop_back() on empty returned false");

    // ─── Lossy reserve and cursors ──────────────────────────────

    let mut seq: Sequence<i32> = (1..=6).collect();
    seq.reserve(4);
    show("reserve(4) on 6 elements", &seq);

    let mut cursor = seq.begin();
    while cursor != seq.end() {
        if let Some(value) = cursor.get() {
            println!("  cursor at {} -> {value}", cursor.position());
        }
        cursor.move_next();
    }
}
