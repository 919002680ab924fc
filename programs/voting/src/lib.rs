// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;

use constants::*;
pub use error::ErrorCode;
pub use state::VotingAccount;

declare_id!("3mvaZFZYJGV86WxydBp2rDfK5bKcXq1PV7BBDy7NHZGX");

#[program]
pub mod voting {
    use super::*;

    pub fn create_voting(ctx: Context<CreateVoting>, id: u32) -> Result<()> {
        handlers::create_voting::create_voting(ctx, id)
    }

    pub fn register_voter(ctx: Context<AdminAction>, voter: Pubkey) -> Result<()> {
        handlers::register_voter::register_voter(ctx, voter)
    }

    pub fn start_proposals_registration(ctx: Context<AdminAction>) -> Result<()> {
        handlers::workflow::start_proposals_registration(ctx)
    }

    pub fn end_proposals_registration(ctx: Context<AdminAction>) -> Result<()> {
        handlers::workflow::end_proposals_registration(ctx)
    }

    pub fn start_voting_session(ctx: Context<AdminAction>) -> Result<()> {
        handlers::workflow::start_voting_session(ctx)
    }

    pub fn end_voting_session(ctx: Context<AdminAction>) -> Result<()> {
        handlers::workflow::end_voting_session(ctx)
    }

    pub fn submit_proposal(ctx: Context<VoterAction>, description: String) -> Result<()> {
        handlers::submit_proposal::submit_proposal(ctx, description)
    }

    pub fn cast_vote(ctx: Context<VoterAction>, proposal_id: u16) -> Result<()> {
        handlers::cast_vote::cast_vote(ctx, proposal_id)
    }

    pub fn tally_votes(ctx: Context<AdminAction>) -> Result<()> {
        handlers::tally_votes::tally_votes(ctx)
    }
}

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct CreateVoting<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + VotingAccount::INIT_SPACE,
        seeds = [VOTING_SEED, authority.key().as_ref(), id.to_le_bytes().as_ref()],
        bump,
    )]
    pub voting_account: Account<'info, VotingAccount>,

    pub system_program: Program<'info, System>,
}

/// Administrator-gated instructions: voter registration, workflow
/// transitions and the tally. The signer is checked against the stored
/// authority inside the state logic so that a mismatch is reported as
/// `Unauthorized` rather than a seeds violation.
#[derive(Accounts)]
pub struct AdminAction<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub voting_account: Account<'info, VotingAccount>,
}

/// Voter-gated instructions: proposal submission and vote casting. The
/// signer must be on the session's whitelist.
#[derive(Accounts)]
pub struct VoterAction<'info> {
    pub voter: Signer<'info>,

    #[account(mut)]
    pub voting_account: Account<'info, VotingAccount>,
}
