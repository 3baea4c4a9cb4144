use crate::{common::outcome::Outcome, domain::registry::Registry};

pub fn handle(registry: &Registry) -> Outcome {
    Outcome::Listing(registry.snapshots())
}
