use anchor_lang::prelude::*;

use crate::state::WorkflowStatusChange;
use crate::AdminAction;

/// Tallies the votes and stores the winning proposal id.
///
/// Only the administrator may tally, and only once the voting session
/// has ended. Ties keep the lowest proposal id; with no proposals or no
/// votes the winner stays at the sentinel id 0. Moves the session to
/// its terminal `VotesTallied` status.
pub fn tally_votes(ctx: Context<AdminAction>) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    let (previous_status, new_status) = ctx.accounts.voting_account.tally_votes(&caller)?;

    msg!(
        "Votes tallied, winning proposal {}",
        ctx.accounts.voting_account.winning_proposal_id
    );

    emit!(WorkflowStatusChange {
        previous_status,
        new_status,
    });
    Ok(())
}
