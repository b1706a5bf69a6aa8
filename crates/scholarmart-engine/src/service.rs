//! # Marketplace Service
//!
//! The operation handlers behind [`MarketplaceApi`]. Every handler runs the
//! same shape: authorization, argument validation, record reads, pure
//! computation, commits (record writes plus value transfers), then event
//! emission and stats. A failed step aborts with zero effects.
//!
//! The fallible commit step (record creation at a derived or caller-supplied
//! address) always runs before value moves, so a replayed operation dies on
//! the address collision rather than paying twice. Balance prechecks make the
//! subsequent transfer infallible under the host's single-writer guarantee.

use crate::authorization;
use crate::domain::entities::{
    PaperAccessPass, PaperEntry, Platform, Record, RecordKind, Treasury,
};
use crate::domain::invariants::{
    check_paper_price_invariant, check_pass_mint_transition, check_platform_counter_transition,
};
use crate::domain::services::{
    check_withdrawal, compose_token_name, compute_listing_fee, paper_access_pass_address,
    platform_address, treasury_address, validate_listing_fee, validate_paper_fields,
    validate_platform_name, validate_price,
};
use crate::domain::value_objects::{Address, Identity};
use crate::errors::{EngineError, LedgerError};
use crate::events::{
    MarketplaceEvent, NftMinted, PaperAccessPassCreated, PaperCreated, PlatformInitialized,
    TreasuryWithdrawn,
};
use crate::ports::inbound::{
    CreatePaperArgs, CreatePaperReceipt, InitializeReceipt, MarketplaceApi, MintNftArgs,
    MintNftReceipt, PayPassReceipt, WithdrawReceipt,
};
use crate::ports::outbound::{Clock, EventSink, LedgerStore, TokenIssuer, TokenSpec};

use std::sync::{Arc, RwLock};
use tracing::{debug, info, instrument};

// =============================================================================
// SERVICE STATS
// =============================================================================

/// Operation counters, queryable at any time.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Total operations handled, successful or not.
    pub operations_handled: u64,
    /// Operations that committed.
    pub successful_operations: u64,
    /// Operations that aborted with an error.
    pub failed_operations: u64,
    /// Smallest native units moved by committed operations.
    pub value_transferred: u64,
}

// =============================================================================
// MARKETPLACE SERVICE
// =============================================================================

/// The marketplace state-transition engine.
///
/// Generic over its four collaborators so tests wire in-memory adapters and
/// production wires the host runtime.
pub struct MarketplaceService<L, T, E, C>
where
    L: LedgerStore,
    T: TokenIssuer,
    E: EventSink,
    C: Clock,
{
    ledger: Arc<L>,
    tokens: Arc<T>,
    events: Arc<E>,
    clock: Arc<C>,
    stats: RwLock<ServiceStats>,
}

impl<L, T, E, C> MarketplaceService<L, T, E, C>
where
    L: LedgerStore,
    T: TokenIssuer,
    E: EventSink,
    C: Clock,
{
    /// Creates a service over the given collaborators.
    pub fn new(ledger: Arc<L>, tokens: Arc<T>, events: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            ledger,
            tokens,
            events,
            clock,
            stats: RwLock::new(ServiceStats::default()),
        }
    }

    /// Current operation counters.
    pub fn stats(&self) -> ServiceStats {
        self.stats.read().unwrap().clone()
    }

    fn track<R>(&self, moved: u64, result: Result<R, EngineError>) -> Result<R, EngineError> {
        let mut stats = self.stats.write().unwrap();
        stats.operations_handled += 1;
        match &result {
            Ok(_) => {
                stats.successful_operations += 1;
                stats.value_transferred = stats.value_transferred.saturating_add(moved);
            }
            Err(err) => {
                stats.failed_operations += 1;
                debug!(error = %err, "operation aborted");
            }
        }
        result
    }

    /// Maps ledger failures from record creation and rewriting.
    fn structural(err: LedgerError) -> EngineError {
        match err {
            LedgerError::RecordAlreadyExists(address) => EngineError::RecordAlreadyExists(address),
            LedgerError::RecordNotFound(address) => EngineError::RecordNotFound(address),
            LedgerError::InsufficientFunds { .. } => EngineError::InsufficientBalanceForListing,
            LedgerError::BalanceOverflow => EngineError::ArithmeticOverflow,
        }
    }

    fn read_platform(&self, address: Address) -> Result<Platform, EngineError> {
        match self.ledger.read_record(address).map_err(Self::structural)? {
            Some(Record::Platform(platform)) => Ok(platform),
            Some(_) => Err(EngineError::RecordKindMismatch {
                address,
                expected: RecordKind::Platform,
            }),
            None => Err(EngineError::RecordNotFound(address)),
        }
    }

    fn read_paper_entry(&self, address: Address) -> Result<PaperEntry, EngineError> {
        match self.ledger.read_record(address).map_err(Self::structural)? {
            Some(Record::PaperEntry(entry)) => Ok(entry),
            Some(_) => Err(EngineError::RecordKindMismatch {
                address,
                expected: RecordKind::PaperEntry,
            }),
            None => Err(EngineError::RecordNotFound(address)),
        }
    }

    fn read_pass(&self, address: Address) -> Result<PaperAccessPass, EngineError> {
        match self.ledger.read_record(address).map_err(Self::structural)? {
            Some(Record::PaperAccessPass(pass)) => Ok(pass),
            Some(_) => Err(EngineError::RecordKindMismatch {
                address,
                expected: RecordKind::PaperAccessPass,
            }),
            None => Err(EngineError::RecordNotFound(address)),
        }
    }

    fn require_balance(&self, account: Address, required: u64) -> Result<(), EngineError> {
        if self.ledger.balance_of(account) < required {
            return Err(EngineError::InsufficientBalanceForListing);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // HANDLERS
    // -------------------------------------------------------------------------

    fn initialize_inner(
        &self,
        caller: Identity,
        name: &str,
        listing_fee_bps: u16,
    ) -> Result<InitializeReceipt, EngineError> {
        validate_platform_name(name)?;
        validate_listing_fee(listing_fee_bps)?;

        let platform_addr = platform_address(&caller);
        let treasury_addr = treasury_address(&platform_addr, &caller);

        // The platform record is the singleton guard: re-initialization for
        // the same admin collides here and nothing is touched.
        self.ledger
            .create_record(
                platform_addr,
                Record::Platform(Platform {
                    admin: caller,
                    listing_fee_bps,
                    name: name.to_string(),
                    nft_counter: 0,
                }),
            )
            .map_err(Self::structural)?;
        self.ledger
            .create_record(treasury_addr, Record::Treasury(Treasury {}))
            .map_err(Self::structural)?;

        info!(platform = %platform_addr, admin = %caller, "platform initialized");
        self.events
            .emit(MarketplaceEvent::PlatformInitialized(PlatformInitialized {
                platform: platform_addr,
                treasury: treasury_addr,
                admin: caller,
                name: name.to_string(),
                listing_fee_bps,
            }));

        Ok(InitializeReceipt {
            platform: platform_addr,
            treasury: treasury_addr,
        })
    }

    fn create_paper_inner(
        &self,
        caller: Identity,
        platform: Address,
        paper_entry: Address,
        args: CreatePaperArgs,
    ) -> Result<CreatePaperReceipt, EngineError> {
        validate_paper_fields(&args.title, &args.description, &args.uri)?;
        validate_price(args.is_open_access, args.price)?;

        let platform_record = self.read_platform(platform)?;
        let treasury_addr = treasury_address(&platform, &platform_record.admin);

        // Open-access listings escrow nothing.
        let listing_fee = if args.is_open_access {
            0
        } else {
            compute_listing_fee(args.price, platform_record.listing_fee_bps)?
        };

        let researcher_account = Address::from(caller);
        self.require_balance(researcher_account, listing_fee)?;

        let entry = PaperEntry {
            researcher: caller,
            title: args.title.clone(),
            description: args.description,
            uri: args.uri,
            price: args.price,
            is_open_access: args.is_open_access,
            created_at: self.clock.unix_timestamp(),
        };
        debug_assert!(check_paper_price_invariant(&entry));

        self.ledger
            .create_record(paper_entry, Record::PaperEntry(entry))
            .map_err(Self::structural)?;
        self.ledger
            .transfer_value(researcher_account, treasury_addr, listing_fee)
            .map_err(Self::structural)?;

        info!(
            paper = %paper_entry,
            researcher = %caller,
            fee = listing_fee,
            "paper created"
        );
        self.events.emit(MarketplaceEvent::PaperCreated(PaperCreated {
            researcher: caller,
            paper_entry,
            title: args.title,
            is_open_access: args.is_open_access,
            price: args.price,
        }));

        Ok(CreatePaperReceipt {
            paper_entry,
            listing_fee,
        })
    }

    fn pay_pass_inner(
        &self,
        caller: Identity,
        paper_entry: Address,
        researcher: Identity,
        purchased_at: Option<i64>,
    ) -> Result<PayPassReceipt, EngineError> {
        let entry = self.read_paper_entry(paper_entry)?;
        authorization::require_matching_researcher(&entry, &researcher)?;

        let price = entry.price;
        let owner_account = Address::from(caller);
        if !entry.is_open_access {
            self.require_balance(owner_account, price)?;
        }

        let pass_addr = paper_access_pass_address(&caller, &paper_entry);
        let purchased_at = purchased_at.unwrap_or_else(|| self.clock.unix_timestamp());

        // Creating the pass first makes a double purchase die on the address
        // collision before any value moves.
        self.ledger
            .create_record(
                pass_addr,
                Record::PaperAccessPass(PaperAccessPass {
                    mint: None,
                    paper_entry,
                    owner: caller,
                    price,
                    purchased_at,
                }),
            )
            .map_err(Self::structural)?;

        if !entry.is_open_access {
            // The listing fee was escrowed at creation time; the purchase
            // price goes to the researcher whole.
            self.ledger
                .transfer_value(owner_account, Address::from(researcher), price)
                .map_err(Self::structural)?;
        }

        info!(pass = %pass_addr, owner = %caller, price, "paper access pass created");
        self.events
            .emit(MarketplaceEvent::PaperAccessPassCreated(PaperAccessPassCreated {
                paper_entry,
                paper_access_pass: pass_addr,
                owner: caller,
                price,
                purchased_at,
            }));

        Ok(PayPassReceipt {
            paper_access_pass: pass_addr,
            price_paid: price,
        })
    }

    fn mint_nft_inner(
        &self,
        caller: Identity,
        platform: Address,
        paper_entry: Address,
        args: MintNftArgs,
    ) -> Result<MintNftReceipt, EngineError> {
        let pass_addr = paper_access_pass_address(&caller, &paper_entry);
        let pass = self.read_pass(pass_addr)?;
        authorization::require_pass_owner(&pass, &caller)?;

        if pass.mint.is_some() {
            return Err(EngineError::NftAlreadyMintedToPaperAccessPass);
        }

        let platform_record = self.read_platform(platform)?;
        let sequence = platform_record
            .nft_counter
            .checked_add(1)
            .ok_or(EngineError::ArithmeticOverflow)?;
        let name = compose_token_name(args.name.as_deref(), sequence);

        let mint = self.tokens.issue_unique_token(
            caller,
            TokenSpec {
                name: name.clone(),
                symbol: args.symbol.unwrap_or_default(),
                uri: args.uri,
                sequence,
            },
        )?;

        let upgraded = PaperAccessPass {
            mint: Some(mint),
            ..pass.clone()
        };
        let bumped = Platform {
            nft_counter: sequence,
            ..platform_record.clone()
        };
        debug_assert!(check_pass_mint_transition(&pass, &upgraded));
        debug_assert!(check_platform_counter_transition(&platform_record, &bumped));

        self.ledger
            .write_record(pass_addr, Record::PaperAccessPass(upgraded))
            .map_err(Self::structural)?;
        self.ledger
            .write_record(platform, Record::Platform(bumped))
            .map_err(Self::structural)?;

        info!(pass = %pass_addr, sequence, token_name = %name, "collectible minted");
        self.events.emit(MarketplaceEvent::NftMinted(NftMinted {
            paper_access_pass: pass_addr,
            mint,
            owner: caller,
            sequence,
        }));

        Ok(MintNftReceipt {
            mint,
            sequence,
            name,
        })
    }

    fn withdraw_inner(
        &self,
        caller: Identity,
        amount: u64,
    ) -> Result<WithdrawReceipt, EngineError> {
        let platform_addr = platform_address(&caller);
        let platform_record = self.read_platform(platform_addr)?;
        authorization::require_platform_admin(&platform_record, &caller)?;

        let treasury_addr = treasury_address(&platform_addr, &caller);
        let balance = self.ledger.balance_of(treasury_addr);
        check_withdrawal(balance, amount)?;

        self.ledger
            .transfer_value(treasury_addr, Address::from(caller), amount)
            .map_err(|_| EngineError::InsufficientBalanceForWithdraw)?;

        let treasury_remaining = balance - amount;
        info!(treasury = %treasury_addr, amount, treasury_remaining, "treasury withdrawal");
        self.events
            .emit(MarketplaceEvent::TreasuryWithdrawn(TreasuryWithdrawn {
                platform: platform_addr,
                treasury: treasury_addr,
                admin: caller,
                amount,
            }));

        Ok(WithdrawReceipt {
            amount,
            treasury_remaining,
        })
    }
}

impl<L, T, E, C> MarketplaceApi for MarketplaceService<L, T, E, C>
where
    L: LedgerStore,
    T: TokenIssuer,
    E: EventSink,
    C: Clock,
{
    #[instrument(skip(self), fields(caller = %caller))]
    fn initialize(
        &self,
        caller: Identity,
        name: &str,
        listing_fee_bps: u16,
    ) -> Result<InitializeReceipt, EngineError> {
        let result = self.initialize_inner(caller, name, listing_fee_bps);
        self.track(0, result)
    }

    #[instrument(skip(self, args), fields(caller = %caller))]
    fn create_paper(
        &self,
        caller: Identity,
        platform: Address,
        paper_entry: Address,
        args: CreatePaperArgs,
    ) -> Result<CreatePaperReceipt, EngineError> {
        let result = self.create_paper_inner(caller, platform, paper_entry, args);
        let moved = result.as_ref().map(|r| r.listing_fee).unwrap_or(0);
        self.track(moved, result)
    }

    #[instrument(skip(self), fields(caller = %caller))]
    fn pay_pass(
        &self,
        caller: Identity,
        paper_entry: Address,
        researcher: Identity,
        purchased_at: Option<i64>,
    ) -> Result<PayPassReceipt, EngineError> {
        let result = self.pay_pass_inner(caller, paper_entry, researcher, purchased_at);
        let moved = result.as_ref().map(|r| r.price_paid).unwrap_or(0);
        self.track(moved, result)
    }

    #[instrument(skip(self, args), fields(caller = %caller))]
    fn mint_nft(
        &self,
        caller: Identity,
        platform: Address,
        paper_entry: Address,
        args: MintNftArgs,
    ) -> Result<MintNftReceipt, EngineError> {
        let result = self.mint_nft_inner(caller, platform, paper_entry, args);
        self.track(0, result)
    }

    #[instrument(skip(self), fields(caller = %caller))]
    fn withdraw(&self, caller: Identity, amount: u64) -> Result<WithdrawReceipt, EngineError> {
        let result = self.withdraw_inner(caller, amount);
        let moved = result.as_ref().map(|r| r.amount).unwrap_or(0);
        self.track(moved, result)
    }
}

// =============================================================================
// TESTS
// =============================================================================
