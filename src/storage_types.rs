use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Pledge(CampaignId, Address),
}

pub type CampaignId = u64;

/// A fundraising campaign stored on-chain.
///
/// Created by `launch`, removed only by `cancel` before its window opens.
/// After resolution the record persists; the success path is tracked via
/// `claimed` and the failure path via the per-contributor pledge entries.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    /// Funding target. Always positive.
    pub goal: i128,
    /// Ledger timestamp at which contributions open.
    pub start_at: u64,
    /// Ledger timestamp of the last second contributions are accepted.
    pub end_at: u64,
    /// Sum of all outstanding pledges against this campaign.
    pub total_contribution: i128,
    /// Set once by a successful `claim_funds`; never cleared.
    pub claimed: bool,
}

// Contract error codes, surfaced to callers as Error(Contract, #n)
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    InvalidGoal = 4,
    InvalidWindow = 5,
    InvalidAmount = 6,
    NotCreator = 7,
    AlreadyStarted = 8,
    NotStarted = 9,
    Ended = 10,
    NotEnded = 11,
    InsufficientContribution = 12,
    GoalNotReached = 13,
    AlreadyClaimed = 14,
    GoalReached = 15,
    NoContribution = 16,
}

// Constants
pub const MAX_CAMPAIGN_WINDOW: u64 = 90 * 86400; // campaigns close at most 90 days after launch
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
