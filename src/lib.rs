#![no_std]

multiversx_sc::imports!();

pub mod dao_proxy;
pub mod errors;
pub mod types;

use errors::*;
use types::{Proposal, ProposalStatus};

// ============================================================
// Constants
// ============================================================

/// Quorum is expressed as a whole percentage of total shares
const PERCENT_DENOMINATOR: u64 = 100;

// ============================================================
// Contract
// ============================================================

/// Pooled fund governed by its contributors.
///
/// Contributions are accepted until `contributionEnd`; each unit of EGLD
/// contributed is one unit of voting weight. Investors propose disbursements,
/// vote once per proposal, and the admin executes proposals that closed with
/// quorum. The admin may also withdraw directly from the undistributed pool.
#[multiversx_sc::contract]
pub trait Dao {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, contribution_window: u64, voting_window: u64, quorum_percent: u64) {
        require!(quorum_percent <= PERCENT_DENOMINATOR, ERR_INVALID_QUORUM);

        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        self.admin().set(&caller);
        self.contribution_end()
            .set(now.saturating_add(contribution_window));
        self.voting_window().set(voting_window);
        self.quorum_percent().set(quorum_percent);
        self.next_proposal_id().set(0u64);
        self.total_shares().set(BigUint::zero());
        self.available_funds().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: contribute
    // Open until contributionEnd. Shares are 1:1 with EGLD paid.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        let now = self.blockchain().get_block_timestamp();
        require!(
            now < self.contribution_end().get(),
            ERR_CONTRIBUTION_WINDOW_CLOSED
        );

        self.shares(&caller).update(|s| *s += &payment_amount);
        self.investors().insert(caller.clone());
        self.total_shares().update(|ts| *ts += &payment_amount);
        self.available_funds()
            .update(|funds| *funds += &payment_amount);

        let investor_shares = self.shares(&caller).get();
        self.contribute_event(&caller, &payment_amount, &investor_shares);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // The amount is checked against, but not reserved from,
    // the available funds.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        name: ManagedBuffer,
        amount: BigUint,
        recipient: ManagedAddress,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_investor(&caller);
        require!(
            amount <= self.available_funds().get(),
            ERR_AMOUNT_EXCEEDS_AVAILABLE_FUNDS
        );

        let proposal_id = self.next_proposal_id().get();
        let end = self
            .blockchain()
            .get_block_timestamp()
            .saturating_add(self.voting_window().get());

        let proposal = Proposal {
            id: proposal_id,
            name,
            amount,
            recipient,
            votes: BigUint::zero(),
            end,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.next_proposal_id().set(proposal_id + 1);

        self.proposal_created_event(
            proposal_id,
            &caller,
            &proposal.recipient,
            &proposal.amount,
            end,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight is the voter's shares at the time of voting.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        self.require_investor(&caller);

        let mut proposal = self.load_proposal(proposal_id);
        require!(
            !self.voters(proposal_id).contains(&caller),
            ERR_ALREADY_VOTED
        );

        let now = self.blockchain().get_block_timestamp();
        require!(now <= proposal.end, ERR_VOTING_CLOSED);

        let weight = self.shares(&caller).get();
        proposal.votes += &weight;

        self.voters(proposal_id).insert(caller.clone());
        self.proposals(proposal_id).set(&proposal);

        self.vote_event(proposal_id, &caller, &weight);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Admin only, after the voting window, with quorum measured
    // against the current total shares.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        self.require_admin();

        let mut proposal = self.load_proposal(proposal_id);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);

        let now = self.blockchain().get_block_timestamp();
        require!(now > proposal.end, ERR_VOTING_NOT_YET_CLOSED);
        require!(self.quorum_reached(&proposal.votes), ERR_QUORUM_NOT_MET);

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        self.transfer_funds(&proposal.recipient, &proposal.amount);
        self.proposal_executed_event(proposal_id, &proposal.recipient, &proposal.amount);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Admin payout straight from the pool, outside governance.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint, recipient: ManagedAddress) {
        self.require_admin();

        self.transfer_funds(&recipient, &amount);
        self.withdraw_event(&recipient, &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_NOT_ADMIN);
    }

    fn require_investor(&self, address: &ManagedAddress) {
        require!(self.investors().contains(address), ERR_NOT_INVESTOR);
    }

    fn load_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    /// votes * 100 >= quorum_percent * total_shares
    fn quorum_reached(&self, votes: &BigUint) -> bool {
        let total_shares = self.total_shares().get();
        let quorum_percent = self.quorum_percent().get();

        votes * PERCENT_DENOMINATOR >= &total_shares * quorum_percent
    }

    /// Shared by proposal execution and direct withdrawal.
    fn transfer_funds(&self, recipient: &ManagedAddress, amount: &BigUint) {
        require!(
            *amount <= self.available_funds().get(),
            ERR_INSUFFICIENT_FUNDS
        );

        self.available_funds().update(|funds| *funds -= amount);
        self.send().direct_egld(recipient, amount);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(isInvestor)]
    fn is_investor(&self, address: &ManagedAddress) -> bool {
        self.investors().contains(address)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.load_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let next_id = self.next_proposal_id().get();
        let end = core::cmp::min(from.saturating_add(count), next_id);

        for proposal_id in from..end {
            result.push(self.proposals(proposal_id).get());
        }
        result
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: u64) -> ProposalStatus {
        let proposal = self.load_proposal(proposal_id);
        if proposal.executed {
            return ProposalStatus::Executed;
        }

        let now = self.blockchain().get_block_timestamp();
        if now <= proposal.end {
            ProposalStatus::Voting
        } else if self.quorum_reached(&proposal.votes) {
            ProposalStatus::Executable
        } else {
            ProposalStatus::QuorumNotReached
        }
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, address: &ManagedAddress) -> bool {
        self.voters(proposal_id).contains(address)
    }

    #[view(getVoters)]
    fn get_voters(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(proposal_id).iter() {
            result.push(voter);
        }
        result
    }

    #[view(getInvestors)]
    fn get_investors(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.investors().len() as u64;
        let end = core::cmp::min(from.saturating_add(count), total);

        // set indices are 1-based
        for index in from..end {
            result.push(self.investors().get_by_index(index as usize + 1));
        }
        result
    }

    #[view(getFundStats)]
    fn get_fund_stats(&self) -> MultiValue4<BigUint, BigUint, u64, u64> {
        let total_shares = self.total_shares().get();
        let available_funds = self.available_funds().get();
        let investor_count = self.investors().len() as u64;
        let proposal_count = self.next_proposal_id().get();
        (total_shares, available_funds, investor_count, proposal_count).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("contribute")]
    fn contribute_event(
        &self,
        #[indexed] investor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        shares: &BigUint,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
        end: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] recipient: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getContributionEnd)]
    #[storage_mapper("contributionEnd")]
    fn contribution_end(&self) -> SingleValueMapper<u64>;

    #[view(getVotingWindow)]
    #[storage_mapper("votingWindow")]
    fn voting_window(&self) -> SingleValueMapper<u64>;

    #[view(getQuorumPercent)]
    #[storage_mapper("quorumPercent")]
    fn quorum_percent(&self) -> SingleValueMapper<u64>;

    // ── Fund state ──

    #[view(getTotalShares)]
    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getAvailableFunds)]
    #[storage_mapper("availableFunds")]
    fn available_funds(&self) -> SingleValueMapper<BigUint>;

    #[view(getShares)]
    #[storage_mapper("shares")]
    fn shares(&self, investor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("investors")]
    fn investors(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Proposals ──

    #[view(getNextProposalId)]
    #[storage_mapper("nextProposalId")]
    fn next_proposal_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
