//! # Adversarial Scenarios
//!
//! Replays, impostors, and drained wallets. Every rejected operation must
//! leave the ledger exactly as it found it.

#[cfg(test)]
mod tests {
    use crate::integration::{fresh_address, open_paper, paid_paper, random_identity, TestBench};
    use scholarmart_engine::prelude::*;

    // =========================================================================
    // REPLAYED CREATION
    // =========================================================================

    #[test]
    fn test_reinitialize_cannot_reset_the_counter() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let reader = random_identity();
        let platform = bench.service.initialize(admin, "lab", 0).unwrap();

        let paper = fresh_address();
        bench
            .service
            .create_paper(researcher, platform.platform, paper, open_paper())
            .unwrap();
        bench.service.pay_pass(reader, paper, researcher, None).unwrap();
        bench
            .service
            .mint_nft(
                reader,
                platform.platform,
                paper,
                MintNftArgs {
                    name: None,
                    symbol: None,
                    uri: "ipfs://QmNft".into(),
                },
            )
            .unwrap();

        // A replayed Initialize collides instead of overwriting the platform.
        let err = bench.service.initialize(admin, "lab", 0).unwrap_err();
        assert!(matches!(err, EngineError::RecordAlreadyExists(_)));

        let record = bench
            .ledger
            .read_record(platform.platform)
            .unwrap()
            .unwrap();
        assert_eq!(record.as_platform().unwrap().nft_counter, 1);
    }

    #[test]
    fn test_double_purchase_charges_once() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let reader = random_identity();
        let platform = bench.service.initialize(admin, "lab", 0).unwrap();
        bench.ledger.credit(Address::from(reader), 1_000);

        let paper = fresh_address();
        bench
            .service
            .create_paper(researcher, platform.platform, paper, paid_paper(400))
            .unwrap();

        bench.service.pay_pass(reader, paper, researcher, None).unwrap();
        let err = bench
            .service
            .pay_pass(reader, paper, researcher, None)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::RecordAlreadyExists(paper_access_pass_address(&reader, &paper))
        );

        // Only the first purchase paid the researcher.
        assert_eq!(bench.wallet_balance(reader), 600);
        assert_eq!(bench.wallet_balance(researcher), 400);
    }

    #[test]
    fn test_paper_address_collision_rejected_before_fees_move() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let platform = bench.service.initialize(admin, "lab", 800).unwrap();
        bench.ledger.credit(Address::from(researcher), 10 * UNIT);

        let paper = fresh_address();
        bench
            .service
            .create_paper(researcher, platform.platform, paper, paid_paper(UNIT))
            .unwrap();
        let treasury_after_first = bench.ledger.balance_of(platform.treasury);

        let err = bench
            .service
            .create_paper(researcher, platform.platform, paper, paid_paper(UNIT))
            .unwrap_err();
        assert_eq!(err, EngineError::RecordAlreadyExists(paper));
        assert_eq!(
            bench.ledger.balance_of(platform.treasury),
            treasury_after_first
        );
    }

    // =========================================================================
    // IMPOSTORS
    // =========================================================================

    #[test]
    fn test_impostor_researcher_cannot_redirect_payment() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let impostor = random_identity();
        let reader = random_identity();
        let platform = bench.service.initialize(admin, "lab", 0).unwrap();
        bench.ledger.credit(Address::from(reader), 1_000);

        let paper = fresh_address();
        bench
            .service
            .create_paper(researcher, platform.platform, paper, paid_paper(500))
            .unwrap();

        let err = bench
            .service
            .pay_pass(reader, paper, impostor, None)
            .unwrap_err();
        assert_eq!(err, EngineError::PayPassInvalidResearcher);
        assert_eq!(bench.wallet_balance(reader), 1_000);
        assert_eq!(bench.wallet_balance(impostor), 0);
    }

    #[test]
    fn test_stranger_cannot_withdraw_from_foreign_treasury() {
        let bench = TestBench::new();
        let admin = random_identity();
        let stranger = random_identity();
        let platform = bench.service.initialize(admin, "lab", 0).unwrap();
        bench.ledger.credit(platform.treasury, 200 * UNIT);

        // The stranger's own platform does not exist; the derived addressing
        // never even reaches the admin's treasury.
        let err = bench.service.withdraw(stranger, 100 * UNIT).unwrap_err();
        assert!(matches!(err, EngineError::RecordNotFound(_)));
        assert_eq!(bench.ledger.balance_of(platform.treasury), 200 * UNIT);
        assert_eq!(bench.wallet_balance(stranger), 0);
    }

    #[test]
    fn test_non_owner_cannot_mint_on_foreign_pass() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let reader = random_identity();
        let thief = random_identity();
        let platform = bench.service.initialize(admin, "lab", 0).unwrap();

        let paper = fresh_address();
        bench
            .service
            .create_paper(researcher, platform.platform, paper, open_paper())
            .unwrap();
        bench.service.pay_pass(reader, paper, researcher, None).unwrap();

        let err = bench
            .service
            .mint_nft(
                thief,
                platform.platform,
                paper,
                MintNftArgs {
                    name: None,
                    symbol: None,
                    uri: "ipfs://QmNft".into(),
                },
            )
            .unwrap_err();
        // The thief's derived pass address holds nothing.
        assert!(matches!(err, EngineError::RecordNotFound(_)));
        assert_eq!(bench.tokens.issued_count(), 0);
    }

    // =========================================================================
    // DRAINED WALLETS
    // =========================================================================

    #[test]
    fn test_broke_reader_cannot_buy_a_pass() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let reader = random_identity();
        let platform = bench.service.initialize(admin, "lab", 0).unwrap();

        let paper = fresh_address();
        bench
            .service
            .create_paper(researcher, platform.platform, paper, paid_paper(500))
            .unwrap();
        bench.ledger.credit(Address::from(reader), 499);

        let err = bench
            .service
            .pay_pass(reader, paper, researcher, None)
            .unwrap_err();
        assert_eq!(err, EngineError::InsufficientBalanceForListing);
        // No pass record was left behind.
        assert_eq!(
            bench
                .ledger
                .read_record(paper_access_pass_address(&reader, &paper))
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_withdraw_cannot_breach_the_reserve() {
        let bench = TestBench::new();
        let admin = random_identity();
        let platform = bench.service.initialize(admin, "lab", 0).unwrap();
        bench.ledger.credit(platform.treasury, 99 * UNIT);

        // Any compliant amount would leave less than the 50-unit reserve.
        let err = bench.service.withdraw(admin, 50 * UNIT).unwrap_err();
        assert_eq!(err, EngineError::WithdrawalBelowMinimumThreshold);
        assert_eq!(bench.ledger.balance_of(platform.treasury), 99 * UNIT);
    }

    // =========================================================================
    // ERROR IDENTITY
    // =========================================================================

    #[test]
    fn test_failures_surface_the_specific_kind() {
        let bench = TestBench::new();
        let admin = random_identity();

        let name_err = bench
            .service
            .initialize(admin, &"x".repeat(21), 0)
            .unwrap_err();
        assert_eq!(name_err.to_string(), "Invalid name length");

        let fee_err = bench.service.initialize(admin, "lab", 801).unwrap_err();
        assert_eq!(fee_err.to_string(), "Invalid listing fee");
        assert_ne!(name_err, fee_err);
    }
}
