/// PDA seed prefix for voting session accounts.
pub const VOTING_SEED: &[u8] = b"voting";

/// Maximum number of registered voters per session.
pub const MAX_VOTERS: usize = 64;

/// Maximum number of proposal slots per session, including the
/// placeholder at index 0.
pub const MAX_PROPOSALS: usize = 32;

/// Maximum proposal description length in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Description of the non-votable placeholder seeded at index 0 when
/// proposal registration opens. Keeps real proposals 1-indexed.
pub const GENESIS_PROPOSAL: &str = "GENESIS";

/// Winning proposal id before tallying, and after tallying when no
/// proposal received a vote. Never addressable as a vote target.
pub const NO_WINNER: u16 = 0;
