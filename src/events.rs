use soroban_sdk::{contracttype, Address, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignLaunchedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub goal: i128,
    pub start_at: u64,
    pub end_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignCancelledEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub total_contribution: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct PledgeWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub total_contribution: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct FundsClaimedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_campaign_launched(
    env: &soroban_sdk::Env,
    event: CampaignLaunchedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "campaign_launched"),),
        event,
    );
}

pub fn emit_campaign_cancelled(
    env: &soroban_sdk::Env,
    event: CampaignCancelledEvent,
) {
    env.events().publish(
        (Symbol::new(env, "campaign_cancelled"),),
        event,
    );
}

pub fn emit_contributed(
    env: &soroban_sdk::Env,
    event: ContributedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "contributed"),),
        event,
    );
}

pub fn emit_pledge_withdrawn(
    env: &soroban_sdk::Env,
    event: PledgeWithdrawnEvent,
) {
    env.events().publish(
        (Symbol::new(env, "pledge_withdrawn"),),
        event,
    );
}

pub fn emit_funds_claimed(
    env: &soroban_sdk::Env,
    event: FundsClaimedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "funds_claimed"),),
        event,
    );
}

pub fn emit_refunded(
    env: &soroban_sdk::Env,
    event: RefundedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "refunded"),),
        event,
    );
}
