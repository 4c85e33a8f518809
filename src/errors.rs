// Revert messages surfaced to callers. Each one aborts the whole transaction.

pub const ERR_INVALID_QUORUM: &str = "Quorum must be between 0 and 100";

pub const ERR_CONTRIBUTION_WINDOW_CLOSED: &str = "Cannot contribute after contribution period";

pub const ERR_NOT_INVESTOR: &str = "Investors only";

pub const ERR_AMOUNT_EXCEEDS_AVAILABLE_FUNDS: &str = "Amount too big";

pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";

pub const ERR_ALREADY_VOTED: &str = "Investor can only vote once for a proposal";

pub const ERR_VOTING_CLOSED: &str = "Can only vote until proposal ends";

pub const ERR_NOT_ADMIN: &str = "Admin only";

pub const ERR_ALREADY_EXECUTED: &str = "Cannot execute a proposal that has already been executed";

pub const ERR_VOTING_NOT_YET_CLOSED: &str = "Cannot execute proposal before end date";

pub const ERR_QUORUM_NOT_MET: &str = "Cannot execute proposal with votes below quorum";

pub const ERR_INSUFFICIENT_FUNDS: &str = "Not enough available funds";
