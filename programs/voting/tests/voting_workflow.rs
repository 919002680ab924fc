use anchor_lang::prelude::*;

use voting::constants::NO_WINNER;
use voting::state::{VotingAccount, WorkflowStatus};

fn new_session(authority: Pubkey) -> VotingAccount {
    VotingAccount {
        bump: 254,
        id: 7,
        authority,
        status: WorkflowStatus::RegisteringVoters,
        winning_proposal_id: NO_WINNER,
        voters: Vec::new(),
        proposals: Vec::new(),
    }
}

/// The full lifecycle: register A and B, collect proposals "X" and "Y",
/// one vote each, tally. With equal counts the first registered proposal
/// wins.
#[test]
fn full_session_elects_the_first_proposal_on_a_tie() {
    let admin = Pubkey::new_unique();
    let voter_a = Pubkey::new_unique();
    let voter_b = Pubkey::new_unique();
    let mut voting = new_session(admin);

    voting.register_voter(&admin, voter_a).unwrap();
    voting.register_voter(&admin, voter_b).unwrap();

    voting.start_proposals_registration(&admin).unwrap();
    assert_eq!(voting.submit_proposal(&voter_a, "X").unwrap(), 1);
    assert_eq!(voting.submit_proposal(&voter_b, "Y").unwrap(), 2);
    voting.end_proposals_registration(&admin).unwrap();

    voting.start_voting_session(&admin).unwrap();
    voting.cast_vote(&voter_a, 1).unwrap();
    voting.cast_vote(&voter_b, 2).unwrap();
    voting.end_voting_session(&admin).unwrap();

    voting.tally_votes(&admin).unwrap();
    assert_eq!(voting.status, WorkflowStatus::VotesTallied);
    assert_eq!(voting.winning_proposal_id, 1);

    let winner = voting.winning_proposal().unwrap();
    assert_eq!(winner.description, "X");
    assert_eq!(winner.vote_count, 1);

    // Ballot state is queryable after the fact.
    assert_eq!(voting.voter(&voter_a).unwrap().voted_proposal_id, 1);
    assert_eq!(voting.voter(&voter_b).unwrap().voted_proposal_id, 2);
}

#[test]
fn clear_majority_beats_the_first_proposal() {
    let admin = Pubkey::new_unique();
    let voters: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
    let mut voting = new_session(admin);

    for voter in &voters {
        voting.register_voter(&admin, *voter).unwrap();
    }
    voting.start_proposals_registration(&admin).unwrap();
    voting.submit_proposal(&voters[0], "first").unwrap();
    voting.submit_proposal(&voters[0], "second").unwrap();
    voting.end_proposals_registration(&admin).unwrap();

    voting.start_voting_session(&admin).unwrap();
    voting.cast_vote(&voters[0], 2).unwrap();
    voting.cast_vote(&voters[1], 2).unwrap();
    voting.cast_vote(&voters[2], 1).unwrap();
    voting.end_voting_session(&admin).unwrap();

    voting.tally_votes(&admin).unwrap();
    assert_eq!(voting.winning_proposal_id, 2);
    assert_eq!(voting.winning_proposal().unwrap().vote_count, 2);
}
