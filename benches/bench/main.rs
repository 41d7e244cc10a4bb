// std imports
use std::hash::{Hash, Hasher};

// third-party imports
use base32::Alphabet;
use criterion::criterion_main;
use fnv::FnvHasher;

const GROUP: &str = "extglob";
const ND: &str = ":"; // name delimiter

mod misc;
mod samples;

criterion_main!(misc::detect::benches, misc::detector::benches);

fn hash<T: Hash>(value: T) -> String {
    let mut hasher = FnvHasher::default();
    value.hash(&mut hasher);
    let hash = hasher.finish().to_be_bytes();
    base32::encode(Alphabet::Rfc4648Lower { padding: false }, &hash[..])
}
