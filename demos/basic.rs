use std::env;

use log::info;
use priomap::PriorityMap;

fn main() {
    pretty_env_logger::init();

    let text = env::args()
        .nth(1)
        .unwrap_or_else(|| "supercalifragilisticexpialidocious".into());

    let mut freq: PriorityMap<char, u32> = PriorityMap::new();
    for c in text.chars() {
        freq.at(c).increment();
    }
    info!(
        "{} letters, {} distinct counts",
        freq.len(),
        freq.distinct_values()
    );

    // most frequent first
    while let Ok((c, n)) = freq.pop() {
        println!("{:?}: {}", c, n);
    }
}
