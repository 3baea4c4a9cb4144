use tracing::debug;

use crate::{
    common::{command::Command, outcome::Outcome},
    domain::registry::Registry,
    worker::handlers::{deposit, list, open, withdrawal},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(&mut self, registry: &mut Registry, command: Command) -> Outcome {
        debug!(?command, "processing command");
        match command {
            Command::Open(request) => open::handle(registry, request),
            Command::Deposit { number, amount } => deposit::handle(registry, number, amount),
            Command::Withdraw { number, amount } => withdrawal::handle(registry, number, amount),
            Command::List => list::handle(registry),
            Command::Exit => Outcome::Exit,
        }
    }
}
