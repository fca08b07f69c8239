#![no_std]

multiversx_sc::imports!();

pub mod types;

use types::{Bounty, BountyAddition, BountyClaim, DistributionRun};

// ============================================================
// Constants
// ============================================================

/// Ledger metadata, informational only; balances are internal
/// storage, not an ESDT.
const TOKEN_NAME: &[u8] = b"Community Rewards";
const TOKEN_TICKER: &[u8] = b"CRWD";
const TOKEN_DECIMALS: u32 = 6;

pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_INVALID_AMOUNT: &str = "ERR_INVALID_AMOUNT";
pub const ERR_INVALID_ADDRESS: &str = "ERR_INVALID_ADDRESS";
pub const ERR_INVALID_DEADLINE: &str = "ERR_INVALID_DEADLINE";
pub const ERR_INSUFFICIENT_BALANCE: &str = "ERR_INSUFFICIENT_BALANCE";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "ERR_INSUFFICIENT_ALLOWANCE";
pub const ERR_INSUFFICIENT_SUPPLY: &str = "ERR_INSUFFICIENT_SUPPLY";
pub const ERR_INSUFFICIENT_STAKE: &str = "ERR_INSUFFICIENT_STAKE";
pub const ERR_INSUFFICIENT_VOTE_CREDIT: &str = "ERR_INSUFFICIENT_VOTE_CREDIT";
pub const ERR_NOT_REGISTERED: &str = "ERR_NOT_REGISTERED";
pub const ERR_COOLDOWN_ACTIVE: &str = "ERR_COOLDOWN_ACTIVE";
pub const ERR_DISTRIBUTION_IN_PROGRESS: &str = "ERR_DISTRIBUTION_IN_PROGRESS";
pub const ERR_NOTHING_TO_DISTRIBUTE: &str = "ERR_NOTHING_TO_DISTRIBUTE";
pub const ERR_INVALID_BOUNTY: &str = "ERR_INVALID_BOUNTY";
pub const ERR_INVALID_CLAIM: &str = "ERR_INVALID_CLAIM";
pub const ERR_NOT_YET_EXPIRED: &str = "ERR_NOT_YET_EXPIRED";
pub const ERR_ALREADY_CLAIMED: &str = "ERR_ALREADY_CLAIMED";
pub const ERR_NOT_A_CONTRIBUTOR: &str = "ERR_NOT_A_CONTRIBUTOR";
pub const ERR_ALREADY_REFUNDED: &str = "ERR_ALREADY_REFUNDED";

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CommunityRewards {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, initial_supply: BigUint, distribution_period_seconds: u64, page_size: u64) {
        require!(initial_supply > 0u64, ERR_INVALID_AMOUNT);
        require!(distribution_period_seconds > 0, ERR_INVALID_AMOUNT);
        require!(page_size > 0, ERR_INVALID_AMOUNT);

        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.distribution_period().set(distribution_period_seconds);
        self.page_size().set(page_size);

        self.total_supply().set(&initial_supply);
        self.balances(&caller).set(&initial_supply);
        self.register_holder(&caller);

        let idle = DistributionRun {
            last_completed_timestamp: 0,
            current_page: 0,
            page_size: 0,
            frozen_basis: BigUint::zero(),
            pool_amount: BigUint::zero(),
        };
        self.votes_run().set(&idle);
        self.tokens_run().set(idle);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS: ledger
    // Balance moves are rejected while a votes-distribution run
    // is mid-flight: its frozen basis must not drift between
    // pages.
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        self.require_votes_distribution_idle();

        let caller = self.blockchain().get_caller();
        self.transfer_internal(&caller, &to, &amount);

        self.transfer_event(&caller, &to, &amount);
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowance(&caller, &spender).set(&amount);

        self.approve_event(&caller, &spender, &amount);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        self.require_votes_distribution_idle();

        let caller = self.blockchain().get_caller();
        let allowance = self.allowance(&from, &caller).get();
        require!(allowance >= amount, ERR_INSUFFICIENT_ALLOWANCE);

        self.allowance(&from, &caller).set(&allowance - &amount);
        self.transfer_internal(&from, &to, &amount);

        self.transfer_event(&from, &to, &amount);
    }

    #[endpoint(burn)]
    fn burn(&self, amount: BigUint) {
        self.require_owner();
        self.require_votes_distribution_idle();

        let caller = self.blockchain().get_caller();
        require!(self.balances(&caller).get() >= amount, ERR_INSUFFICIENT_BALANCE);
        require!(self.total_supply().get() >= amount, ERR_INSUFFICIENT_SUPPLY);

        self.balances(&caller).update(|b| *b -= &amount);
        self.total_supply().update(|s| *s -= &amount);

        self.burn_event(&caller, &amount);
    }

    #[endpoint(stakeTokens)]
    fn stake_tokens(&self, amount: BigUint) {
        self.require_votes_distribution_idle();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let caller = self.blockchain().get_caller();
        let escrow = self.blockchain().get_sc_address();
        self.transfer_internal(&caller, &escrow, &amount);

        self.staked_balance(&caller).update(|s| *s += &amount);
        self.total_staked().update(|t| *t += &amount);

        self.stake_event(&caller, &amount);
    }

    #[endpoint(unstakeTokens)]
    fn unstake_tokens(&self, amount: BigUint) {
        self.require_votes_distribution_idle();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let caller = self.blockchain().get_caller();
        require!(
            self.staked_balance(&caller).get() >= amount,
            ERR_INSUFFICIENT_STAKE
        );

        let escrow = self.blockchain().get_sc_address();
        self.transfer_internal(&escrow, &caller, &amount);

        self.staked_balance(&caller).update(|s| *s -= &amount);
        self.total_staked().update(|t| *t -= &amount);

        self.unstake_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINTS: distribution engine
    // The same paginated engine runs twice: vote credits spread
    // over holders weighted by balance, and minted tokens spread
    // over projects weighted by weekly upvotes. A run freezes its
    // basis, pool and page size at the first call; the operator
    // keeps calling until the completion timestamp changes.
    // ========================================================

    #[endpoint(setPageSize)]
    fn set_page_size(&self, new_size: u64) {
        self.require_owner();
        require!(new_size > 0, ERR_INVALID_AMOUNT);

        self.page_size().set(new_size);

        self.page_size_set_event(new_size);
    }

    #[endpoint(distributeVotes)]
    fn distribute_votes(&self, pool_amount: BigUint) {
        self.require_owner();

        let now = self.blockchain().get_block_timestamp();
        let mut run = self.votes_run().get();

        if run.current_page == 0 {
            require!(
                now >= run.last_completed_timestamp + self.distribution_period().get(),
                ERR_COOLDOWN_ACTIVE
            );
            let basis = self.total_supply().get();
            require!(basis > 0u64, ERR_NOTHING_TO_DISTRIBUTE);
            require!(pool_amount > 0u64, ERR_NOTHING_TO_DISTRIBUTE);

            run.frozen_basis = basis;
            run.pool_amount = pool_amount;
            run.page_size = self.page_size().get();
        } else {
            // Resumed page: the pool must match the frozen snapshot.
            require!(pool_amount == run.pool_amount, ERR_INVALID_AMOUNT);
        }

        let holder_count = self.holder_addresses().len() as u64;
        let start = run.current_page * run.page_size;
        let end = core::cmp::min(start + run.page_size, holder_count);

        for i in start..end {
            let holder = self.holder_addresses().get((i + 1) as usize);
            let weight = self.balances(&holder).get();
            let credit = &run.pool_amount * &weight / &run.frozen_basis;
            if credit > 0u64 {
                self.votes_to_use(&holder).update(|v| *v += &credit);
            }
        }

        if start + run.page_size >= holder_count {
            run.current_page = 0;
            run.last_completed_timestamp = now;
            self.votes_distributed_event(&run.pool_amount, &run.frozen_basis, now);
        } else {
            run.current_page += 1;
        }

        self.votes_run().set(run);
    }

    #[endpoint(distributeTokens)]
    fn distribute_tokens(&self, pool_amount: BigUint) {
        self.require_owner();

        let now = self.blockchain().get_block_timestamp();
        let mut run = self.tokens_run().get();

        if run.current_page == 0 {
            require!(
                now >= run.last_completed_timestamp + self.distribution_period().get(),
                ERR_COOLDOWN_ACTIVE
            );
            let basis = self.total_upvotes_this_week().get();
            require!(basis > 0u64, ERR_NOTHING_TO_DISTRIBUTE);
            require!(pool_amount > 0u64, ERR_NOTHING_TO_DISTRIBUTE);

            run.frozen_basis = basis;
            run.pool_amount = pool_amount;
            run.page_size = self.page_size().get();
        } else {
            require!(pool_amount == run.pool_amount, ERR_INVALID_AMOUNT);
        }

        let project_count = self.project_addresses().len() as u64;
        let start = run.current_page * run.page_size;
        let end = core::cmp::min(start + run.page_size, project_count);

        for i in start..end {
            let project = self.project_addresses().get((i + 1) as usize);
            let weight = self.upvotes_this_week(&project).get();
            let minted = &run.pool_amount * &weight / &run.frozen_basis;
            if minted > 0u64 {
                self.mint(&project, &minted);
            }
        }

        if start + run.page_size >= project_count {
            run.current_page = 0;
            run.last_completed_timestamp = now;
            self.reset_weekly_upvotes();
            self.tokens_distributed_event(&run.pool_amount, &run.frozen_basis, now);
        } else {
            run.current_page += 1;
        }

        self.tokens_run().set(run);
    }

    // ========================================================
    // ENDPOINTS: voting
    // ========================================================

    #[endpoint(addProjectAddress)]
    fn add_project_address(&self, address: ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);

        if self.project_known(&address).get() {
            return;
        }
        self.project_addresses().push(&address);
        self.project_known(&address).set(true);

        self.project_added_event(&address);
    }

    #[endpoint(vote)]
    fn vote(&self, project: ManagedAddress, votes: BigUint) {
        require!(self.project_known(&project).get(), ERR_NOT_REGISTERED);
        require!(votes > 0u64, ERR_INVALID_AMOUNT);
        // Upvote counters are the frozen basis of a token run.
        self.require_tokens_distribution_idle();

        let caller = self.blockchain().get_caller();
        require!(
            self.votes_to_use(&caller).get() >= votes,
            ERR_INSUFFICIENT_VOTE_CREDIT
        );

        self.votes_to_use(&caller).update(|v| *v -= &votes);
        self.upvotes_this_week(&project).update(|u| *u += &votes);
        self.total_upvotes_this_week().update(|t| *t += &votes);

        self.vote_event(&caller, &project, &votes);
    }

    // ========================================================
    // ENDPOINTS: bounties
    // Escrowed funds live in the contract's own ledger slot until
    // the creator accepts a claim or the deadline passes and the
    // contributors reclaim their shares one by one.
    // ========================================================

    #[endpoint(createBounty)]
    fn create_bounty(&self, project: ManagedAddress, amount: BigUint, deadline_block: u64) -> u64 {
        require!(self.project_known(&project).get(), ERR_NOT_REGISTERED);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        require!(
            deadline_block > self.blockchain().get_block_nonce(),
            ERR_INVALID_DEADLINE
        );

        let caller = self.blockchain().get_caller();
        let escrow = self.blockchain().get_sc_address();
        self.transfer_internal(&caller, &escrow, &amount);

        let bounty_id = self.bounties(&project).len() as u64 + 1;
        self.bounties(&project).push(&Bounty {
            id: bounty_id,
            creator: caller.clone(),
            amount: amount.clone(),
            deadline_block,
            total_amount: amount.clone(),
            active: true,
            successfully_claimed: false,
            refunded: false,
        });
        self.bounty_additions(&project, bounty_id).push(&BountyAddition {
            contributor: caller.clone(),
            amount: amount.clone(),
            refunded: false,
        });
        self.bounty_locked_balance(&caller).update(|l| *l += &amount);

        self.bounty_created_event(&project, bounty_id, &caller, &amount, deadline_block);

        bounty_id
    }

    #[endpoint(addToBounty)]
    fn add_to_bounty(&self, project: ManagedAddress, bounty_id: u64, amount: BigUint) {
        let mut bounty = self.require_active_bounty(&project, bounty_id);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let caller = self.blockchain().get_caller();
        let escrow = self.blockchain().get_sc_address();
        self.transfer_internal(&caller, &escrow, &amount);

        bounty.total_amount += &amount;
        self.bounties(&project).set(bounty_id as usize, &bounty);
        self.bounty_additions(&project, bounty_id).push(&BountyAddition {
            contributor: caller.clone(),
            amount: amount.clone(),
            refunded: false,
        });
        self.bounty_locked_balance(&caller).update(|l| *l += &amount);

        self.bounty_addition_event(&project, bounty_id, &caller, &amount, &bounty.total_amount);
    }

    #[endpoint(createBountyClaim)]
    fn create_bounty_claim(&self, project: ManagedAddress, bounty_id: u64) -> u64 {
        self.require_active_bounty(&project, bounty_id);

        let caller = self.blockchain().get_caller();
        let claim_id = self.bounty_claims(&project).len() as u64 + 1;
        self.bounty_claims(&project).push(&BountyClaim {
            id: claim_id,
            bounty_id,
            claimer: caller.clone(),
            successful: false,
        });

        self.bounty_claim_created_event(&project, bounty_id, claim_id, &caller);

        claim_id
    }

    #[endpoint(acceptBountyClaim)]
    fn accept_bounty_claim(&self, project: ManagedAddress, claim_id: u64) {
        let claims_len = self.bounty_claims(&project).len() as u64;
        require!(claim_id >= 1 && claim_id <= claims_len, ERR_INVALID_CLAIM);

        let mut claim = self.bounty_claims(&project).get(claim_id as usize);
        let mut bounty = self.require_active_bounty(&project, claim.bounty_id);

        let caller = self.blockchain().get_caller();
        require!(caller == bounty.creator, ERR_UNAUTHORIZED);

        let escrow = self.blockchain().get_sc_address();
        self.transfer_internal(&escrow, &claim.claimer, &bounty.total_amount);

        // The pot went to the claimer: release every contributor's lock.
        let additions_len = self.bounty_additions(&project, claim.bounty_id).len();
        for i in 1..=additions_len {
            let addition = self.bounty_additions(&project, claim.bounty_id).get(i);
            self.bounty_locked_balance(&addition.contributor)
                .update(|l| *l -= &addition.amount);
        }

        claim.successful = true;
        self.bounty_claims(&project).set(claim_id as usize, &claim);

        bounty.active = false;
        bounty.successfully_claimed = true;
        self.bounties(&project).set(claim.bounty_id as usize, &bounty);

        self.bounty_claim_accepted_event(
            &project,
            claim.bounty_id,
            claim_id,
            &claim.claimer,
            &bounty.total_amount,
        );
    }

    #[endpoint(refundMyBountyShare)]
    fn refund_my_bounty_share(&self, project: ManagedAddress, bounty_id: u64) {
        let mut bounty = self.require_bounty(&project, bounty_id);
        require!(!bounty.successfully_claimed, ERR_ALREADY_CLAIMED);
        if bounty.active {
            require!(
                self.blockchain().get_block_nonce() >= bounty.deadline_block,
                ERR_NOT_YET_EXPIRED
            );
        }

        // Scan first, commit after: the caller's unrefunded deposits are
        // settled together in one transfer.
        let caller = self.blockchain().get_caller();
        let additions = self.bounty_additions(&project, bounty_id);
        let additions_len = additions.len();
        let mut refund_total = BigUint::zero();
        let mut is_contributor = false;
        for i in 1..=additions_len {
            let addition = additions.get(i);
            if addition.contributor != caller {
                continue;
            }
            is_contributor = true;
            if !addition.refunded {
                refund_total += &addition.amount;
            }
        }
        require!(is_contributor, ERR_NOT_A_CONTRIBUTOR);
        require!(refund_total > 0u64, ERR_ALREADY_REFUNDED);

        if bounty.active {
            // First refund closes the bounty for good.
            bounty.active = false;
            bounty.refunded = true;
            self.bounties(&project).set(bounty_id as usize, &bounty);
            self.bounty_expired_event(&project, bounty_id);
        }

        for i in 1..=additions_len {
            let mut addition = self.bounty_additions(&project, bounty_id).get(i);
            if addition.contributor == caller && !addition.refunded {
                addition.refunded = true;
                self.bounty_additions(&project, bounty_id).set(i, &addition);
            }
        }

        let escrow = self.blockchain().get_sc_address();
        self.transfer_internal(&escrow, &caller, &refund_total);
        self.bounty_locked_balance(&caller).update(|l| *l -= &refund_total);

        self.bounty_refunded_event(&project, bounty_id, &caller, &refund_total);
    }

    // ========================================================
    // INTERNAL: ledger primitives
    // ========================================================

    /// Moves value between ledger slots. An address joins the holder
    /// registry the first time its balance turns positive; the registry
    /// only ever grows.
    fn transfer_internal(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        require!(self.balances(from).get() >= *amount, ERR_INSUFFICIENT_BALANCE);

        self.balances(from).update(|b| *b -= amount);
        self.balances(to).update(|b| *b += amount);

        if *amount > 0u64 {
            self.register_holder(to);
        }
    }

    fn mint(&self, to: &ManagedAddress, amount: &BigUint) {
        self.balances(to).update(|b| *b += amount);
        self.total_supply().update(|s| *s += amount);
        self.register_holder(to);
    }

    fn register_holder(&self, address: &ManagedAddress) {
        if self.holder_known(address).get() {
            return;
        }
        self.holder_addresses().push(address);
        self.holder_known(address).set(true);
    }

    fn reset_weekly_upvotes(&self) {
        let count = self.project_addresses().len();
        for i in 1..=count {
            let project = self.project_addresses().get(i);
            self.upvotes_this_week(&project).set(BigUint::zero());
        }
        self.total_upvotes_this_week().set(BigUint::zero());
    }

    // ========================================================
    // INTERNAL: guards
    // ========================================================

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            ERR_UNAUTHORIZED
        );
    }

    fn require_votes_distribution_idle(&self) {
        require!(
            self.votes_run().get().current_page == 0,
            ERR_DISTRIBUTION_IN_PROGRESS
        );
    }

    fn require_tokens_distribution_idle(&self) {
        require!(
            self.tokens_run().get().current_page == 0,
            ERR_DISTRIBUTION_IN_PROGRESS
        );
    }

    fn require_bounty(&self, project: &ManagedAddress, bounty_id: u64) -> Bounty<Self::Api> {
        let len = self.bounties(project).len() as u64;
        require!(bounty_id >= 1 && bounty_id <= len, ERR_INVALID_BOUNTY);
        self.bounties(project).get(bounty_id as usize)
    }

    fn require_active_bounty(&self, project: &ManagedAddress, bounty_id: u64) -> Bounty<Self::Api> {
        let bounty = self.require_bounty(project, bounty_id);
        require!(bounty.active, ERR_INVALID_BOUNTY);
        bounty
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getTokenName)]
    fn token_name(&self) -> ManagedBuffer {
        ManagedBuffer::from(TOKEN_NAME)
    }

    #[view(getTokenTicker)]
    fn token_ticker(&self) -> ManagedBuffer {
        ManagedBuffer::from(TOKEN_TICKER)
    }

    #[view(getDecimals)]
    fn decimals(&self) -> u32 {
        TOKEN_DECIMALS
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getTotalSupply)]
    fn get_total_supply(&self) -> BigUint {
        self.total_supply().get()
    }

    #[view(balanceOf)]
    fn balance_of(&self, address: &ManagedAddress) -> BigUint {
        self.balances(address).get()
    }

    #[view(getAllowance)]
    fn get_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> BigUint {
        self.allowance(owner, spender).get()
    }

    #[view(stakedBalanceOf)]
    fn staked_balance_of(&self, address: &ManagedAddress) -> BigUint {
        self.staked_balance(address).get()
    }

    #[view(getTotalStaked)]
    fn get_total_staked(&self) -> BigUint {
        self.total_staked().get()
    }

    #[view(getVotesToUse)]
    fn get_votes_to_use(&self, address: &ManagedAddress) -> BigUint {
        self.votes_to_use(address).get()
    }

    #[view(getUpvotesReceivedThisWeek)]
    fn get_upvotes_received_this_week(&self, project: &ManagedAddress) -> BigUint {
        self.upvotes_this_week(project).get()
    }

    #[view(getTotalUpvotesReceivedThisWeek)]
    fn get_total_upvotes_received_this_week(&self) -> BigUint {
        self.total_upvotes_this_week().get()
    }

    #[view(getHolderAddresses)]
    fn get_holder_addresses(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for holder in self.holder_addresses().iter() {
            result.push(holder);
        }
        result
    }

    #[view(isHolderAddress)]
    fn is_holder_address(&self, address: &ManagedAddress) -> bool {
        self.holder_known(address).get()
    }

    #[view(getProjectAddresses)]
    fn get_project_addresses(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for project in self.project_addresses().iter() {
            result.push(project);
        }
        result
    }

    #[view(isProjectAddress)]
    fn is_project_address(&self, address: &ManagedAddress) -> bool {
        self.project_known(address).get()
    }

    #[view(getPageSize)]
    fn get_page_size(&self) -> u64 {
        self.page_size().get()
    }

    #[view(getDistributionPeriod)]
    fn get_distribution_period(&self) -> u64 {
        self.distribution_period().get()
    }

    #[view(canDistributeVotes)]
    fn can_distribute_votes(&self) -> bool {
        let run = self.votes_run().get();
        run.current_page > 0
            || self.blockchain().get_block_timestamp()
                >= run.last_completed_timestamp + self.distribution_period().get()
    }

    #[view(canDistributeTokens)]
    fn can_distribute_tokens(&self) -> bool {
        let run = self.tokens_run().get();
        run.current_page > 0
            || self.blockchain().get_block_timestamp()
                >= run.last_completed_timestamp + self.distribution_period().get()
    }

    #[view(lastVotesDistributionTimestamp)]
    fn last_votes_distribution_timestamp(&self) -> u64 {
        self.votes_run().get().last_completed_timestamp
    }

    #[view(lastTokensDistributionTimestamp)]
    fn last_tokens_distribution_timestamp(&self) -> u64 {
        self.tokens_run().get().last_completed_timestamp
    }

    #[view(nextVotesDistributionTimestamp)]
    fn next_votes_distribution_timestamp(&self) -> u64 {
        self.votes_run().get().last_completed_timestamp + self.distribution_period().get()
    }

    #[view(nextTokensDistributionTimestamp)]
    fn next_tokens_distribution_timestamp(&self) -> u64 {
        self.tokens_run().get().last_completed_timestamp + self.distribution_period().get()
    }

    #[view(votesDistributionPage)]
    fn votes_distribution_page(&self) -> u64 {
        self.votes_run().get().current_page
    }

    #[view(tokensDistributionPage)]
    fn tokens_distribution_page(&self) -> u64 {
        self.tokens_run().get().current_page
    }

    #[view(getBountiesLength)]
    fn get_bounties_length(&self, project: &ManagedAddress) -> u64 {
        self.bounties(project).len() as u64
    }

    #[view(getBountyData)]
    fn get_bounty_data(
        &self,
        project: &ManagedAddress,
        bounty_id: u64,
    ) -> OptionalValue<Bounty<Self::Api>> {
        let len = self.bounties(project).len() as u64;
        if bounty_id < 1 || bounty_id > len {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.bounties(project).get(bounty_id as usize))
        }
    }

    #[view(getBountyAdditions)]
    fn get_bounty_additions(
        &self,
        project: &ManagedAddress,
        bounty_id: u64,
    ) -> MultiValueEncoded<BountyAddition<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let count = self.bounty_additions(project, bounty_id).len();
        for i in 1..=count {
            result.push(self.bounty_additions(project, bounty_id).get(i));
        }
        result
    }

    #[view(getBountyClaimsLength)]
    fn get_bounty_claims_length(&self, project: &ManagedAddress) -> u64 {
        self.bounty_claims(project).len() as u64
    }

    #[view(getBountyClaimData)]
    fn get_bounty_claim_data(
        &self,
        project: &ManagedAddress,
        claim_id: u64,
    ) -> OptionalValue<BountyClaim<Self::Api>> {
        let len = self.bounty_claims(project).len() as u64;
        if claim_id < 1 || claim_id > len {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.bounty_claims(project).get(claim_id as usize))
        }
    }

    #[view(getBountyLockedBalance)]
    fn get_bounty_locked_balance(&self, address: &ManagedAddress) -> BigUint {
        self.bounty_locked_balance(address).get()
    }

    #[view(getAccountSummary)]
    fn get_account_summary(
        &self,
        address: &ManagedAddress,
    ) -> MultiValue4<BigUint, BigUint, BigUint, BigUint> {
        (
            self.balances(address).get(),
            self.staked_balance(address).get(),
            self.bounty_locked_balance(address).get(),
            self.votes_to_use(address).get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approve")]
    fn approve_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("burn")]
    fn burn_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("stake")]
    fn stake_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("unstake")]
    fn unstake_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("pageSizeSet")]
    fn page_size_set_event(&self, #[indexed] new_size: u64);

    #[event("votesDistributed")]
    fn votes_distributed_event(
        &self,
        #[indexed] pool_amount: &BigUint,
        #[indexed] basis: &BigUint,
        timestamp: u64,
    );

    #[event("tokensDistributed")]
    fn tokens_distributed_event(
        &self,
        #[indexed] pool_amount: &BigUint,
        #[indexed] basis: &BigUint,
        timestamp: u64,
    );

    #[event("projectAdded")]
    fn project_added_event(&self, #[indexed] project: &ManagedAddress);

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] project: &ManagedAddress,
        votes: &BigUint,
    );

    #[event("bountyCreated")]
    fn bounty_created_event(
        &self,
        #[indexed] project: &ManagedAddress,
        #[indexed] bounty_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] amount: &BigUint,
        deadline_block: u64,
    );

    #[event("bountyAddition")]
    fn bounty_addition_event(
        &self,
        #[indexed] project: &ManagedAddress,
        #[indexed] bounty_id: u64,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_amount: &BigUint,
    );

    #[event("bountyClaimCreated")]
    fn bounty_claim_created_event(
        &self,
        #[indexed] project: &ManagedAddress,
        #[indexed] bounty_id: u64,
        #[indexed] claim_id: u64,
        claimer: &ManagedAddress,
    );

    #[event("bountyClaimAccepted")]
    fn bounty_claim_accepted_event(
        &self,
        #[indexed] project: &ManagedAddress,
        #[indexed] bounty_id: u64,
        #[indexed] claim_id: u64,
        #[indexed] claimer: &ManagedAddress,
        payout: &BigUint,
    );

    #[event("bountyExpired")]
    fn bounty_expired_event(&self, #[indexed] project: &ManagedAddress, #[indexed] bounty_id: u64);

    #[event("bountyRefunded")]
    fn bounty_refunded_event(
        &self,
        #[indexed] project: &ManagedAddress,
        #[indexed] bounty_id: u64,
        #[indexed] contributor: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("distributionPeriod")]
    fn distribution_period(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("pageSize")]
    fn page_size(&self) -> SingleValueMapper<u64>;

    // ── Ledger ──

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balances")]
    fn balances(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("holderAddresses")]
    fn holder_addresses(&self) -> VecMapper<ManagedAddress>;

    #[storage_mapper("holderKnown")]
    fn holder_known(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("stakedBalance")]
    fn staked_balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;

    // ── Voting ──

    #[storage_mapper("votesToUse")]
    fn votes_to_use(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("projectAddresses")]
    fn project_addresses(&self) -> VecMapper<ManagedAddress>;

    #[storage_mapper("projectKnown")]
    fn project_known(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("upvotesThisWeek")]
    fn upvotes_this_week(&self, project: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalUpvotesThisWeek")]
    fn total_upvotes_this_week(&self) -> SingleValueMapper<BigUint>;

    // ── Distribution runs ──

    #[storage_mapper("votesRun")]
    fn votes_run(&self) -> SingleValueMapper<DistributionRun<Self::Api>>;

    #[storage_mapper("tokensRun")]
    fn tokens_run(&self) -> SingleValueMapper<DistributionRun<Self::Api>>;

    // ── Bounties ──

    #[storage_mapper("bounties")]
    fn bounties(&self, project: &ManagedAddress) -> VecMapper<Bounty<Self::Api>>;

    #[storage_mapper("bountyAdditions")]
    fn bounty_additions(
        &self,
        project: &ManagedAddress,
        bounty_id: u64,
    ) -> VecMapper<BountyAddition<Self::Api>>;

    #[storage_mapper("bountyClaims")]
    fn bounty_claims(&self, project: &ManagedAddress) -> VecMapper<BountyClaim<Self::Api>>;

    #[storage_mapper("bountyLockedBalance")]
    fn bounty_locked_balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
