use tracing::{info, warn};

use crate::{
    common::{command::OpenRequest, money::Money, outcome::Outcome},
    domain::{account::Account, registry::Registry},
};

pub fn handle(registry: &mut Registry, request: OpenRequest) -> Outcome {
    let OpenRequest {
        number,
        name,
        initial,
        kind,
    } = request;

    if initial < Money::zero() {
        return Outcome::InvalidAmount { amount: initial };
    }

    match registry.open(Account::open(number, name, kind, initial)) {
        Ok(()) => {
            info!(number, kind = kind.name(), %initial, "account opened");
            Outcome::Opened { number }
        }
        Err(full) => {
            warn!(number, capacity = full.capacity, "registry full, account not opened");
            Outcome::RegistryFull {
                capacity: full.capacity,
            }
        }
    }
}
