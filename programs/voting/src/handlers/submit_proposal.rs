use anchor_lang::prelude::*;

use crate::state::ProposalRegistered;
use crate::VoterAction;

/// Submits a proposal during the open registration phase.
///
/// Any registered voter may submit; the description must be non-empty
/// and within the length cap. The proposal is appended at the next
/// dense index, starting at 1.
///
/// # Arguments
/// * `description` - The proposal text
pub fn submit_proposal(ctx: Context<VoterAction>, description: String) -> Result<()> {
    let caller = ctx.accounts.voter.key();
    let proposal_id = ctx
        .accounts
        .voting_account
        .submit_proposal(&caller, &description)?;

    msg!("Proposal {} registered", proposal_id);

    emit!(ProposalRegistered { proposal_id });
    Ok(())
}
