use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use log::info;
use parking_lot::Mutex;
use priomap::PriorityMap;

// The map has no locking of its own. Each worker holds the lock for the
// whole read-then-write of an increment.
fn worker(
    pm: Arc<Mutex<PriorityMap<u32, u64>>>,
    name: &'static str,
    keys: u32,
    rounds: u32,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name(name.into())
        .spawn(move || {
            info!("{}: start", name);
            for r in 0..rounds {
                for k in 0..keys {
                    if (k + r) % 3 != 0 {
                        pm.lock().at(k).increment();
                    }
                }
            }
            info!("{}: done", name);
        })
        .expect("failed to spawn worker")
}

fn main() {
    pretty_env_logger::init();

    let pm = Arc::new(Mutex::new(PriorityMap::new()));
    let threads = ["W0", "W1", "W2", "W3"].map(|name| worker(pm.clone(), name, 64, 1000));
    for t in threads {
        t.join().expect("worker failed");
    }

    let pm = pm.lock();
    match pm.top() {
        Ok((k, v)) => println!("top: {} = {} ({} keys)", k, v, pm.len()),
        Err(e) => println!("{}", e),
    }
}
