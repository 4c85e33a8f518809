use multiversx_sc::proxy_imports::*;

use crate::types::{Proposal, ProposalStatus};

pub struct DaoProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DaoProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DaoProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DaoProxyMethods { wrapped_tx: tx }
    }
}

pub struct DaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> DaoProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        contribution_window: Arg0,
        voting_window: Arg1,
        quorum_percent: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&contribution_window)
            .argument(&voting_window)
            .argument(&quorum_percent)
            .original_result()
    }
}

impl<Env, From, To, Gas> DaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> DaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn contribute(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("contribute")
            .original_result()
    }

    pub fn create_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        name: Arg0,
        amount: Arg1,
        recipient: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createProposal")
            .argument(&name)
            .argument(&amount)
            .argument(&recipient)
            .original_result()
    }

    pub fn vote<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn execute_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("executeProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn withdraw<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        amount: Arg0,
        recipient: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdraw")
            .argument(&amount)
            .argument(&recipient)
            .original_result()
    }

    pub fn is_investor<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isInvestor")
            .argument(&address)
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposals<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposals")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_proposal_status<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalStatus")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn has_voted<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        proposal_id: Arg0,
        address: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&proposal_id)
            .argument(&address)
            .original_result()
    }

    pub fn get_voters<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoters")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_investors<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInvestors")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_fund_stats(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue4<BigUint<Env::Api>, BigUint<Env::Api>, u64, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFundStats")
            .original_result()
    }

    pub fn admin(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdmin")
            .original_result()
    }

    pub fn contribution_end(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContributionEnd")
            .original_result()
    }

    pub fn voting_window(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotingWindow")
            .original_result()
    }

    pub fn quorum_percent(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getQuorumPercent")
            .original_result()
    }

    pub fn total_shares(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalShares")
            .original_result()
    }

    pub fn available_funds(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAvailableFunds")
            .original_result()
    }

    pub fn shares<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        investor: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getShares")
            .argument(&investor)
            .original_result()
    }

    pub fn next_proposal_id(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNextProposalId")
            .original_result()
    }
}
