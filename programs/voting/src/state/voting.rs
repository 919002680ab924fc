use anchor_lang::prelude::*;

use crate::constants::{
    GENESIS_PROPOSAL, MAX_DESCRIPTION_LEN, MAX_PROPOSALS, MAX_VOTERS, NO_WINNER,
};
use crate::error::ErrorCode;

/// Lifecycle of a voting session. Strictly forward-moving, one step per
/// administrator action, no rollback.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum WorkflowStatus {
    RegisteringVoters,
    ProposalsRegistrationStarted,
    ProposalsRegistrationEnded,
    VotingSessionStarted,
    VotingSessionEnded,
    VotesTallied,
}

impl WorkflowStatus {
    /// The unique successor status, or `None` for the terminal status.
    fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, PartialEq, Eq, Debug)]
pub struct Voter {
    pub address: Pubkey,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is true.
    pub voted_proposal_id: u16,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, PartialEq, Eq, Debug)]
pub struct Proposal {
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    pub vote_count: u32,
}

/// A complete voting session: administrator, workflow status, voter
/// registry, proposal list and tally result.
///
/// Every mutating method checks all of its preconditions before touching
/// any field, so a rejected call leaves the session unchanged.
#[account]
#[derive(InitSpace)]
pub struct VotingAccount {
    /// PDA bump seed
    pub bump: u8,
    /// Unique identifier for this session
    pub id: u32,
    /// The administrator; set at creation, immutable
    pub authority: Pubkey,
    pub status: WorkflowStatus,
    /// Sentinel `NO_WINNER` until `tally_votes` stores a result
    pub winning_proposal_id: u16,
    #[max_len(MAX_VOTERS)]
    pub voters: Vec<Voter>,
    #[max_len(MAX_PROPOSALS)]
    pub proposals: Vec<Proposal>,
}

impl VotingAccount {
    pub fn register_voter(&mut self, caller: &Pubkey, voter: Pubkey) -> Result<()> {
        self.only_authority(caller)?;
        require!(
            self.status == WorkflowStatus::RegisteringVoters,
            ErrorCode::InvalidWorkflowStatus
        );
        require!(self.voter(&voter).is_none(), ErrorCode::AlreadyRegistered);
        require!(self.voters.len() < MAX_VOTERS, ErrorCode::VoterLimitReached);

        self.voters.push(Voter {
            address: voter,
            has_voted: false,
            voted_proposal_id: NO_WINNER,
        });
        Ok(())
    }

    /// Opens proposal registration and seeds the index-0 placeholder, so
    /// the first real proposal gets id 1.
    pub fn start_proposals_registration(
        &mut self,
        caller: &Pubkey,
    ) -> Result<(WorkflowStatus, WorkflowStatus)> {
        let change = self.advance_from(caller, WorkflowStatus::RegisteringVoters)?;
        self.proposals.push(Proposal {
            description: GENESIS_PROPOSAL.to_string(),
            vote_count: 0,
        });
        Ok(change)
    }

    pub fn end_proposals_registration(
        &mut self,
        caller: &Pubkey,
    ) -> Result<(WorkflowStatus, WorkflowStatus)> {
        self.advance_from(caller, WorkflowStatus::ProposalsRegistrationStarted)
    }

    pub fn start_voting_session(
        &mut self,
        caller: &Pubkey,
    ) -> Result<(WorkflowStatus, WorkflowStatus)> {
        self.advance_from(caller, WorkflowStatus::ProposalsRegistrationEnded)
    }

    pub fn end_voting_session(
        &mut self,
        caller: &Pubkey,
    ) -> Result<(WorkflowStatus, WorkflowStatus)> {
        self.advance_from(caller, WorkflowStatus::VotingSessionStarted)
    }

    pub fn submit_proposal(&mut self, caller: &Pubkey, description: &str) -> Result<u16> {
        self.only_voter(caller)?;
        require!(
            self.status == WorkflowStatus::ProposalsRegistrationStarted,
            ErrorCode::InvalidWorkflowStatus
        );
        require!(!description.is_empty(), ErrorCode::EmptyProposal);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            ErrorCode::DescriptionTooLong
        );
        require!(
            self.proposals.len() < MAX_PROPOSALS,
            ErrorCode::ProposalLimitReached
        );

        self.proposals.push(Proposal {
            description: description.to_string(),
            vote_count: 0,
        });
        Ok((self.proposals.len() - 1) as u16)
    }

    pub fn cast_vote(&mut self, caller: &Pubkey, proposal_id: u16) -> Result<()> {
        let voter_index = self.only_voter(caller)?;
        require!(
            self.status == WorkflowStatus::VotingSessionStarted,
            ErrorCode::InvalidWorkflowStatus
        );
        require!(!self.voters[voter_index].has_voted, ErrorCode::AlreadyVoted);
        // Index 0 is the placeholder and never a valid target.
        require!(
            proposal_id >= 1 && (proposal_id as usize) < self.proposals.len(),
            ErrorCode::ProposalNotFound
        );

        self.voters[voter_index].has_voted = true;
        self.voters[voter_index].voted_proposal_id = proposal_id;
        self.proposals[proposal_id as usize].vote_count += 1;
        Ok(())
    }

    /// Scans proposals 1..N left to right and keeps the first index that
    /// reaches the maximum count; later equal counts never displace an
    /// earlier leader. With no proposals, or no votes at all, the winner
    /// stays at the `NO_WINNER` sentinel.
    pub fn tally_votes(&mut self, caller: &Pubkey) -> Result<(WorkflowStatus, WorkflowStatus)> {
        self.only_authority(caller)?;
        require!(
            self.status == WorkflowStatus::VotingSessionEnded,
            ErrorCode::InvalidWorkflowStatus
        );

        let mut winning_id = NO_WINNER;
        let mut highest_count = 0u32;
        for (id, proposal) in self.proposals.iter().enumerate().skip(1) {
            if proposal.vote_count > highest_count {
                highest_count = proposal.vote_count;
                winning_id = id as u16;
            }
        }
        self.winning_proposal_id = winning_id;

        let previous = self.status;
        self.status = WorkflowStatus::VotesTallied;
        Ok((previous, self.status))
    }

    pub fn voter(&self, address: &Pubkey) -> Option<&Voter> {
        self.voters.iter().find(|v| v.address == *address)
    }

    pub fn proposal(&self, proposal_id: u16) -> Option<&Proposal> {
        self.proposals.get(proposal_id as usize)
    }

    /// The winning proposal once votes are tallied; `None` before the
    /// tally and when no proposal received a vote.
    pub fn winning_proposal(&self) -> Option<&Proposal> {
        if self.status != WorkflowStatus::VotesTallied || self.winning_proposal_id == NO_WINNER {
            return None;
        }
        self.proposal(self.winning_proposal_id)
    }

    fn only_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, ErrorCode::Unauthorized);
        Ok(())
    }

    fn only_voter(&self, caller: &Pubkey) -> Result<usize> {
        self.voters
            .iter()
            .position(|v| v.address == *caller)
            .ok_or_else(|| error!(ErrorCode::NotAVoter))
    }

    /// The single place every workflow transition goes through: checks
    /// the administrator, checks the exact predecessor status and moves
    /// one step forward. Returns (previous, new) for the status event.
    fn advance_from(
        &mut self,
        caller: &Pubkey,
        expected: WorkflowStatus,
    ) -> Result<(WorkflowStatus, WorkflowStatus)> {
        self.only_authority(caller)?;
        require!(self.status == expected, ErrorCode::InvalidWorkflowStatus);
        let next = expected
            .next()
            .ok_or_else(|| error!(ErrorCode::InvalidWorkflowStatus))?;
        let previous = self.status;
        self.status = next;
        Ok((previous, self.status))
    }
}
