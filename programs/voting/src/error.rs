use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not the voting administrator")]
    Unauthorized,
    #[msg("You're not a voter")]
    NotAVoter,
    #[msg("Action not allowed in the current workflow status")]
    InvalidWorkflowStatus,
    #[msg("Already registered")]
    AlreadyRegistered,
    #[msg("You cannot propose nothing")]
    EmptyProposal,
    #[msg("You have already voted")]
    AlreadyVoted,
    #[msg("Proposal not found")]
    ProposalNotFound,
    #[msg("Voter registry is full")]
    VoterLimitReached,
    #[msg("Proposal list is full")]
    ProposalLimitReached,
    #[msg("Proposal description is too long")]
    DescriptionTooLong,
}
