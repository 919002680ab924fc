use anchor_lang::prelude::*;

use crate::constants::NO_WINNER;
use crate::state::WorkflowStatus;
use crate::CreateVoting;

/// Creates a new voting session administered by the payer.
///
/// The session starts in `RegisteringVoters`; the payer becomes the
/// administrator and is the only identity allowed to register voters and
/// advance the workflow.
///
/// # Arguments
/// * `id` - Unique identifier for this session, part of the PDA seeds
pub fn create_voting(ctx: Context<CreateVoting>, id: u32) -> Result<()> {
    msg!("Creating voting session {}", id);

    let voting = &mut ctx.accounts.voting_account;
    voting.bump = ctx.bumps.voting_account;
    voting.id = id;
    voting.authority = ctx.accounts.authority.key();
    voting.status = WorkflowStatus::RegisteringVoters;
    voting.winning_proposal_id = NO_WINNER;
    voting.voters = Vec::new();
    voting.proposals = Vec::new();

    Ok(())
}
