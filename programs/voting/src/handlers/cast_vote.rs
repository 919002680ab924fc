use anchor_lang::prelude::*;

use crate::state::Voted;
use crate::VoterAction;

/// Casts the caller's single vote for a proposal.
///
/// Only registered voters may vote, only while the voting session is
/// open, and only once. The target must be a real proposal id (1-based;
/// the placeholder at index 0 is never votable). The voter's ballot and
/// the proposal count are updated together or not at all.
///
/// # Arguments
/// * `proposal_id` - 1-based index of the chosen proposal
pub fn cast_vote(ctx: Context<VoterAction>, proposal_id: u16) -> Result<()> {
    let caller = ctx.accounts.voter.key();
    ctx.accounts.voting_account.cast_vote(&caller, proposal_id)?;

    msg!("Vote cast for proposal {}", proposal_id);

    emit!(Voted {
        voter: caller,
        proposal_id,
    });
    Ok(())
}
