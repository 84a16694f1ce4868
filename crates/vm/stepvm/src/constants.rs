use ethereum_types::U256;

pub const WORD_SIZE_IN_BYTES_USIZE: usize = 32;
pub const WORD_SIZE_IN_BYTES_U64: u64 = 32;

pub const STACK_LIMIT: usize = 1024;
/// Return stack bound for the subroutine extension (EIP-2315).
pub const RETURN_STACK_LIMIT: usize = 1023;

pub const MEMORY_EXPANSION_QUOTIENT: u64 = 512;

/// Gas allowance used when a session does not specify one.
pub const DEFAULT_GAS_LIMIT: u64 = 15_000_000;

pub const PUSH1_BYTE: u8 = 0x60;
pub const PUSH32_BYTE: u8 = 0x7f;
pub const JUMPDEST_BYTE: u8 = 0x5b;
pub const BEGINSUB_BYTE: u8 = 0x5c;

/// Hex fragment of [`STORAGE_SENTINEL`]. Storage views hide any value whose
/// hex form contains it.
pub const STORAGE_SENTINEL_MARKER: &str = "deadbeaf";

/// Value written by bootstrap tooling into a scratch storage slot so that the
/// account storage is never empty.
pub const STORAGE_SENTINEL: U256 = U256([
    0xdeadbeafdeadbeaf,
    0xdeadbeafdeadbeaf,
    0xdeadbeafdeadbeaf,
    0xdeadbeafdeadbeaf,
]);
