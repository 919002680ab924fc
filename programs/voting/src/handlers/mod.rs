pub mod create_voting;
pub use create_voting::*;

pub mod register_voter;
pub use register_voter::*;

pub mod workflow;
pub use workflow::*;

pub mod submit_proposal;
pub use submit_proposal::*;

pub mod cast_vote;
pub use cast_vote::*;

pub mod tally_votes;
pub use tally_votes::*;
