multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal — a disbursement request voted on by investors
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub name: ManagedBuffer<M>,
    pub amount: BigUint<M>,
    pub recipient: ManagedAddress<M>,
    /// Sum of the voters' shares at the moment each of them voted
    pub votes: BigUint<M>,
    /// Last block timestamp at which votes are accepted
    pub end: u64,
    pub executed: bool,
}

// ============================================================
// Proposal Status — derived on read, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting window still open.
    Voting,
    /// Window closed and votes meet quorum. Admin may execute.
    Executable,
    /// Window closed without enough votes. Execution attempts revert.
    QuorumNotReached,
    /// Funds sent. Terminal state.
    Executed,
}
