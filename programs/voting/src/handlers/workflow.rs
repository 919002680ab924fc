use anchor_lang::prelude::*;

use crate::state::WorkflowStatusChange;
use crate::AdminAction;

/// Opens proposal registration.
///
/// Seeds the non-votable placeholder at index 0 so that real proposals
/// are numbered from 1, then moves the session from `RegisteringVoters`
/// to `ProposalsRegistrationStarted`.
pub fn start_proposals_registration(ctx: Context<AdminAction>) -> Result<()> {
    msg!("Opening proposal registration");

    let caller = ctx.accounts.authority.key();
    let (previous_status, new_status) = ctx
        .accounts
        .voting_account
        .start_proposals_registration(&caller)?;

    emit!(WorkflowStatusChange {
        previous_status,
        new_status,
    });
    Ok(())
}

/// Closes proposal registration.
pub fn end_proposals_registration(ctx: Context<AdminAction>) -> Result<()> {
    msg!("Closing proposal registration");

    let caller = ctx.accounts.authority.key();
    let (previous_status, new_status) = ctx
        .accounts
        .voting_account
        .end_proposals_registration(&caller)?;

    emit!(WorkflowStatusChange {
        previous_status,
        new_status,
    });
    Ok(())
}

/// Opens the voting session.
pub fn start_voting_session(ctx: Context<AdminAction>) -> Result<()> {
    msg!("Opening voting session");

    let caller = ctx.accounts.authority.key();
    let (previous_status, new_status) =
        ctx.accounts.voting_account.start_voting_session(&caller)?;

    emit!(WorkflowStatusChange {
        previous_status,
        new_status,
    });
    Ok(())
}

/// Closes the voting session.
pub fn end_voting_session(ctx: Context<AdminAction>) -> Result<()> {
    msg!("Closing voting session");

    let caller = ctx.accounts.authority.key();
    let (previous_status, new_status) =
        ctx.accounts.voting_account.end_voting_session(&caller)?;

    emit!(WorkflowStatusChange {
        previous_status,
        new_status,
    });
    Ok(())
}
