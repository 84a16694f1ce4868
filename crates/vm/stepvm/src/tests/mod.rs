mod helpers;

mod gas_atomicity;
mod jumps;
