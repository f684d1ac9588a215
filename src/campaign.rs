use soroban_sdk::{token, Address, Env};

use crate::storage_types::*;

pub fn read_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CrowdfundError::CampaignNotFound)
}

pub fn write_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Outstanding pledge balance; zero when no entry exists.
pub fn read_pledge(env: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Pledge(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

/// Store a pledge balance. A balance of zero removes the entry, so absence
/// and zero stay interchangeable for readers.
pub fn write_pledge(env: &Env, campaign_id: CampaignId, contributor: &Address, balance: i128) {
    let key = PersistentKey::Pledge(campaign_id, contributor.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent(env, &key);
    }
}

pub fn read_token(env: &Env) -> Result<Address, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundError::NotInitialized)
}

/// Fail unless the campaign window is currently open.
pub fn check_window_open(env: &Env, campaign: &Campaign) -> Result<(), CrowdfundError> {
    let now = env.ledger().timestamp();
    if now < campaign.start_at {
        return Err(CrowdfundError::NotStarted);
    }
    if now > campaign.end_at {
        return Err(CrowdfundError::Ended);
    }
    Ok(())
}

/// Move tokens from a contributor into contract custody.
pub fn move_in(env: &Env, from: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_address = read_token(env)?;
    let token_client = token::Client::new(env, &token_address);
    token_client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Move tokens out of contract custody.
pub fn move_out(env: &Env, to: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_address = read_token(env)?;
    let token_client = token::Client::new(env, &token_address);
    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
