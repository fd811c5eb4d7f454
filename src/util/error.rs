use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
#[display("capacity overflow!")]
pub struct CapacityOverflow;

#[derive(Debug, Display, Error)]
#[display("attempted to shift an argument from an empty list!")]
pub struct NoArgumentsLeft;
