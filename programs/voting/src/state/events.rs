use anchor_lang::prelude::*;

use crate::state::WorkflowStatus;

#[event]
pub struct VoterRegistered {
    pub voter_address: Pubkey,
}

#[event]
pub struct WorkflowStatusChange {
    pub previous_status: WorkflowStatus,
    pub new_status: WorkflowStatus,
}

#[event]
pub struct ProposalRegistered {
    /// 1-based index assigned at registration.
    pub proposal_id: u16,
}

#[event]
pub struct Voted {
    pub voter: Pubkey,
    pub proposal_id: u16,
}
