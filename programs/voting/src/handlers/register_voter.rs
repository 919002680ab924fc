use anchor_lang::prelude::*;

use crate::state::VoterRegistered;
use crate::AdminAction;

/// Registers a voter on the whitelist.
///
/// Only the administrator may call this, and only while the session is
/// in `RegisteringVoters`. Registering the same address twice is
/// rejected.
///
/// # Arguments
/// * `voter` - Address to whitelist
pub fn register_voter(ctx: Context<AdminAction>, voter: Pubkey) -> Result<()> {
    msg!("Registering voter {}", voter);

    let caller = ctx.accounts.authority.key();
    ctx.accounts.voting_account.register_voter(&caller, voter)?;

    emit!(VoterRegistered {
        voter_address: voter,
    });
    Ok(())
}
