//! # Marketplace Flow Tests
//!
//! Full listing-to-collectible journeys driven through the public API with
//! in-memory adapters behind every port.

#[cfg(test)]
mod tests {
    use crate::integration::{fresh_address, open_paper, paid_paper, random_identity, TestBench};
    use scholarmart_engine::prelude::*;

    // =========================================================================
    // END-TO-END SCENARIO
    // =========================================================================

    /// Initialize -> CreatePaper -> PayPass -> MintNft, checking every balance
    /// and record along the way.
    #[test]
    fn test_full_marketplace_journey() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let reader = random_identity();

        // Fund the participants.
        bench.ledger.credit(Address::from(researcher), 10 * UNIT);
        bench.ledger.credit(Address::from(reader), 10 * UNIT);

        // Initialize at the fee ceiling.
        let platform = bench.service.initialize(admin, "lab", 800).unwrap();

        // List a 1-unit paper; 8% of it lands in the treasury.
        let paper = fresh_address();
        let listed = bench
            .service
            .create_paper(researcher, platform.platform, paper, paid_paper(1_000_000_000))
            .unwrap();
        assert_eq!(listed.listing_fee, 80_000_000);
        assert_eq!(bench.ledger.balance_of(platform.treasury), 80_000_000);

        // The reader buys a pass; the researcher is paid the full price and
        // the treasury does not move again.
        let researcher_before = bench.wallet_balance(researcher);
        let pass = bench
            .service
            .pay_pass(reader, paper, researcher, None)
            .unwrap();
        assert_eq!(
            bench.wallet_balance(researcher),
            researcher_before + 1_000_000_000
        );
        assert_eq!(bench.ledger.balance_of(platform.treasury), 80_000_000);

        let stored = bench
            .ledger
            .read_record(pass.paper_access_pass)
            .unwrap()
            .unwrap();
        let stored_pass = stored.as_paper_access_pass().unwrap();
        assert_eq!(stored_pass.owner, reader);
        assert_eq!(stored_pass.mint, None);

        // The reader upgrades the pass into collectible #0001.
        let minted = bench
            .service
            .mint_nft(
                reader,
                platform.platform,
                paper,
                MintNftArgs {
                    name: Some("Spin Networks Under Load".into()),
                    symbol: Some("SPIN".into()),
                    uri: "ipfs://QmNft".into(),
                },
            )
            .unwrap();
        assert_eq!(minted.sequence, 1);
        assert_eq!(minted.name, "Spin Networks Under Load #0001");

        let upgraded = bench
            .ledger
            .read_record(pass.paper_access_pass)
            .unwrap()
            .unwrap();
        assert_eq!(
            upgraded.as_paper_access_pass().unwrap().mint,
            Some(minted.mint)
        );
        let platform_record = bench
            .ledger
            .read_record(platform.platform)
            .unwrap()
            .unwrap();
        assert_eq!(platform_record.as_platform().unwrap().nft_counter, 1);

        // One event per committed transition, in order.
        let names: Vec<&str> = bench
            .events
            .events()
            .iter()
            .map(MarketplaceEvent::name)
            .collect();
        assert_eq!(
            names,
            [
                "platform_initialized",
                "paper_created",
                "paper_access_pass_created",
                "nft_minted"
            ]
        );
    }

    // =========================================================================
    // OPEN ACCESS
    // =========================================================================

    #[test]
    fn test_open_access_flow_moves_no_value() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let reader = random_identity();

        let platform = bench.service.initialize(admin, "openlab", 800).unwrap();
        let paper = fresh_address();
        bench
            .service
            .create_paper(researcher, platform.platform, paper, open_paper())
            .unwrap();

        // Nobody was funded, and nobody needed to be.
        let pass = bench
            .service
            .pay_pass(reader, paper, researcher, None)
            .unwrap();
        assert_eq!(pass.price_paid, 0);
        assert_eq!(bench.ledger.balance_of(platform.treasury), 0);
        assert_eq!(bench.wallet_balance(researcher), 0);

        let stored = bench
            .ledger
            .read_record(pass.paper_access_pass)
            .unwrap()
            .unwrap();
        assert_eq!(stored.as_paper_access_pass().unwrap().price, 0);
    }

    #[test]
    fn test_open_access_with_price_is_rejected() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();

        let platform = bench.service.initialize(admin, "openlab", 0).unwrap();
        let args = CreatePaperArgs {
            is_open_access: true,
            price: 1,
            ..paid_paper(1)
        };
        let err = bench
            .service
            .create_paper(researcher, platform.platform, fresh_address(), args)
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidPrice);
    }

    // =========================================================================
    // MULTIPLE PLATFORMS, PAPERS, READERS
    // =========================================================================

    #[test]
    fn test_two_admins_get_disjoint_platforms() {
        let bench = TestBench::new();
        let first = random_identity();
        let second = random_identity();

        let a = bench.service.initialize(first, "alpha", 100).unwrap();
        let b = bench.service.initialize(second, "beta", 200).unwrap();
        assert_ne!(a.platform, b.platform);
        assert_ne!(a.treasury, b.treasury);
    }

    #[test]
    fn test_counter_numbers_collectibles_across_readers() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let platform = bench.service.initialize(admin, "lab", 0).unwrap();

        let paper = fresh_address();
        bench
            .service
            .create_paper(researcher, platform.platform, paper, open_paper())
            .unwrap();

        for expected_sequence in 1..=3u64 {
            let reader = random_identity();
            bench
                .service
                .pay_pass(reader, paper, researcher, None)
                .unwrap();
            let minted = bench
                .service
                .mint_nft(
                    reader,
                    platform.platform,
                    paper,
                    MintNftArgs {
                        name: Some("Spin Networks Under Load".into()),
                        symbol: None,
                        uri: format!("ipfs://QmNft/{expected_sequence}"),
                    },
                )
                .unwrap();
            assert_eq!(minted.sequence, expected_sequence);
        }

        let platform_record = bench
            .ledger
            .read_record(platform.platform)
            .unwrap()
            .unwrap();
        assert_eq!(platform_record.as_platform().unwrap().nft_counter, 3);
        assert_eq!(bench.tokens.issued_count(), 3);
    }

    // =========================================================================
    // WITHDRAWAL
    // =========================================================================

    #[test]
    fn test_admin_withdraws_accumulated_fees() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let platform = bench.service.initialize(admin, "lab", 800).unwrap();
        bench
            .ledger
            .credit(Address::from(researcher), 10_000 * UNIT);

        // 8% of 1250 units per listing; 100 listings accumulate 100 units.
        for _ in 0..100 {
            bench
                .service
                .create_paper(
                    researcher,
                    platform.platform,
                    fresh_address(),
                    paid_paper(1_250 * UNIT),
                )
                .unwrap();
        }
        assert_eq!(bench.ledger.balance_of(platform.treasury), 10_000 * UNIT);

        let withdrawn = bench.service.withdraw(admin, 9_950 * UNIT).unwrap();
        assert_eq!(withdrawn.treasury_remaining, 50 * UNIT);
        assert_eq!(bench.wallet_balance(admin), 9_950 * UNIT);

        let last = bench.events.last().unwrap();
        assert_eq!(last.name(), "treasury_withdrawn");
    }

    // =========================================================================
    // EVENT PAYLOADS
    // =========================================================================

    /// Indexers consume events as JSON; the payload field names are a contract.
    #[test]
    fn test_paper_created_event_json_shape() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let platform = bench.service.initialize(admin, "lab", 0).unwrap();

        bench
            .service
            .create_paper(researcher, platform.platform, fresh_address(), open_paper())
            .unwrap();

        let json = serde_json::to_string(&bench.events.last().unwrap()).unwrap();
        assert!(json.contains("\"PaperCreated\""));
        for field in ["researcher", "paper_entry", "title", "is_open_access", "price"] {
            assert!(json.contains(&format!("\"{field}\"")), "missing {field}");
        }
    }

    #[test]
    fn test_pass_event_carries_purchase_details() {
        let bench = TestBench::new();
        let admin = random_identity();
        let researcher = random_identity();
        let reader = random_identity();
        let platform = bench.service.initialize(admin, "lab", 0).unwrap();
        bench.ledger.credit(Address::from(reader), UNIT);

        let paper = fresh_address();
        bench
            .service
            .create_paper(researcher, platform.platform, paper, paid_paper(250))
            .unwrap();
        bench
            .service
            .pay_pass(reader, paper, researcher, Some(1_234))
            .unwrap();

        match bench.events.last().unwrap() {
            MarketplaceEvent::PaperAccessPassCreated(event) => {
                assert_eq!(event.paper_entry, paper);
                assert_eq!(event.owner, reader);
                assert_eq!(event.price, 250);
                assert_eq!(event.purchased_at, 1_234);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
