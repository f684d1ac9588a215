#![no_std]

mod campaign;
mod events;
mod storage_types;


use soroban_sdk::{contract, contractimpl, Address, Env};
use storage_types::*;

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the contract with the token all pledges settle in
    pub fn initialize(env: Env, token: Address) -> Result<(), CrowdfundError> {
        if env.storage().instance().has(&DataKey::Token) {
            return Err(CrowdfundError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::NextCampaignId, &1u64);
        campaign::extend_instance(&env);

        Ok(())
    }

    /// Register a new campaign and return its identifier
    pub fn launch(
        env: Env,
        creator: Address,
        goal: i128,
        start_at: u64,
        end_at: u64,
    ) -> Result<CampaignId, CrowdfundError> {
        creator.require_auth();

        if goal <= 0 {
            return Err(CrowdfundError::InvalidGoal);
        }

        let now = env.ledger().timestamp();
        if start_at < now || end_at < start_at || end_at > now + MAX_CAMPAIGN_WINDOW {
            return Err(CrowdfundError::InvalidWindow);
        }

        let campaign_id: CampaignId = env
            .storage()
            .instance()
            .get(&DataKey::NextCampaignId)
            .ok_or(CrowdfundError::NotInitialized)?;

        let campaign = Campaign {
            id: campaign_id,
            creator: creator.clone(),
            goal,
            start_at,
            end_at,
            total_contribution: 0,
            claimed: false,
        };

        campaign::write_campaign(&env, &campaign);
        env.storage()
            .instance()
            .set(&DataKey::NextCampaignId, &(campaign_id + 1));
        campaign::extend_instance(&env);

        events::emit_campaign_launched(
            &env,
            events::CampaignLaunchedEvent {
                campaign_id,
                creator,
                goal,
                start_at,
                end_at,
            },
        );

        Ok(campaign_id)
    }

    /// Remove a campaign before its window opens
    pub fn cancel(
        env: Env,
        creator: Address,
        campaign_id: CampaignId,
    ) -> Result<(), CrowdfundError> {
        creator.require_auth();

        let campaign = campaign::read_campaign(&env, campaign_id)?;
        if campaign.creator != creator {
            return Err(CrowdfundError::NotCreator);
        }
        if env.ledger().timestamp() >= campaign.start_at {
            return Err(CrowdfundError::AlreadyStarted);
        }

        // No pledge entries can exist yet: contributions are only accepted
        // once the window has opened, and by then cancellation is rejected.
        env.storage()
            .persistent()
            .remove(&PersistentKey::Campaign(campaign_id));

        events::emit_campaign_cancelled(
            &env,
            events::CampaignCancelledEvent {
                campaign_id,
                creator,
            },
        );

        Ok(())
    }

    /// Pledge tokens to an open campaign
    pub fn contribute(
        env: Env,
        contributor: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        contributor.require_auth();

        if amount <= 0 {
            return Err(CrowdfundError::InvalidAmount);
        }

        let mut campaign = campaign::read_campaign(&env, campaign_id)?;
        campaign::check_window_open(&env, &campaign)?;

        campaign::move_in(&env, &contributor, amount)?;

        let balance = campaign::read_pledge(&env, campaign_id, &contributor) + amount;
        campaign.total_contribution += amount;

        campaign::write_pledge(&env, campaign_id, &contributor, balance);
        campaign::write_campaign(&env, &campaign);

        events::emit_contributed(
            &env,
            events::ContributedEvent {
                campaign_id,
                contributor,
                amount,
                total_contribution: campaign.total_contribution,
            },
        );

        Ok(())
    }

    /// Take back part or all of a pledge while the campaign is still open
    pub fn withdraw_pledge(
        env: Env,
        contributor: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        contributor.require_auth();

        if amount <= 0 {
            return Err(CrowdfundError::InvalidAmount);
        }

        let mut campaign = campaign::read_campaign(&env, campaign_id)?;
        campaign::check_window_open(&env, &campaign)?;

        let balance = campaign::read_pledge(&env, campaign_id, &contributor);
        if balance < amount {
            return Err(CrowdfundError::InsufficientContribution);
        }

        campaign.total_contribution -= amount;
        campaign::write_pledge(&env, campaign_id, &contributor, balance - amount);
        campaign::write_campaign(&env, &campaign);

        campaign::move_out(&env, &contributor, amount)?;

        events::emit_pledge_withdrawn(
            &env,
            events::PledgeWithdrawnEvent {
                campaign_id,
                contributor,
                amount,
                total_contribution: campaign.total_contribution,
            },
        );

        Ok(())
    }

    /// Pay the pooled funds to the creator of a campaign that met its goal
    pub fn claim_funds(
        env: Env,
        creator: Address,
        campaign_id: CampaignId,
    ) -> Result<(), CrowdfundError> {
        creator.require_auth();

        let mut campaign = campaign::read_campaign(&env, campaign_id)?;
        if campaign.creator != creator {
            return Err(CrowdfundError::NotCreator);
        }
        if env.ledger().timestamp() <= campaign.end_at {
            return Err(CrowdfundError::NotEnded);
        }
        if campaign.total_contribution < campaign.goal {
            return Err(CrowdfundError::GoalNotReached);
        }
        if campaign.claimed {
            return Err(CrowdfundError::AlreadyClaimed);
        }

        // The pooled total is paid out as a whole; individual pledge entries
        // stay untouched and the flag blocks a second claim.
        campaign.claimed = true;
        campaign::write_campaign(&env, &campaign);

        campaign::move_out(&env, &creator, campaign.total_contribution)?;

        events::emit_funds_claimed(
            &env,
            events::FundsClaimedEvent {
                campaign_id,
                creator,
                amount: campaign.total_contribution,
            },
        );

        Ok(())
    }

    /// Return a contributor's pledge after a campaign missed its goal
    pub fn get_refund(
        env: Env,
        contributor: Address,
        campaign_id: CampaignId,
    ) -> Result<(), CrowdfundError> {
        contributor.require_auth();

        let mut campaign = campaign::read_campaign(&env, campaign_id)?;
        if env.ledger().timestamp() <= campaign.end_at {
            return Err(CrowdfundError::NotEnded);
        }
        if campaign.total_contribution >= campaign.goal {
            return Err(CrowdfundError::GoalReached);
        }

        let balance = campaign::read_pledge(&env, campaign_id, &contributor);
        if balance == 0 {
            return Err(CrowdfundError::NoContribution);
        }

        campaign.total_contribution -= balance;
        campaign::write_pledge(&env, campaign_id, &contributor, 0);
        campaign::write_campaign(&env, &campaign);

        campaign::move_out(&env, &contributor, balance)?;

        events::emit_refunded(
            &env,
            events::RefundedEvent {
                campaign_id,
                contributor,
                amount: balance,
            },
        );

        Ok(())
    }

    /// Get a campaign record
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
        campaign::read_campaign(&env, campaign_id)
    }

    /// Get a contributor's outstanding pledge; zero when none exists
    pub fn get_pledge(env: Env, campaign_id: CampaignId, contributor: Address) -> i128 {
        campaign::read_pledge(&env, campaign_id, &contributor)
    }

    /// Get the identifier the next launched campaign will receive
    pub fn get_next_campaign_id(env: Env) -> Result<CampaignId, CrowdfundError> {
        env.storage()
            .instance()
            .get(&DataKey::NextCampaignId)
            .ok_or(CrowdfundError::NotInitialized)
    }

    /// Get the token all value transfers settle in
    pub fn get_token(env: Env) -> Result<Address, CrowdfundError> {
        campaign::read_token(&env)
    }
}
